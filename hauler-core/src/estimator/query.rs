use crate::model::RoadClass;
use serde::{Deserialize, Serialize};

/// a single duration estimation request.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EstimateQuery {
    /// route driving distance in kilometers. must be non-negative.
    pub distance_km: f64,
    /// optional road class hint for the route. accepted and echoed back on
    /// output rows, but tier selection is distance-based and does not
    /// consult it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_class: Option<RoadClass>,
}

impl EstimateQuery {
    pub fn new(distance_km: f64) -> EstimateQuery {
        EstimateQuery {
            distance_km,
            route_class: None,
        }
    }
}
