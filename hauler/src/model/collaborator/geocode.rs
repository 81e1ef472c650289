use super::CollaboratorError;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a free-text place name resolved to a coordinate.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeocodedPlace {
    /// resolved coordinate, x is longitude and y is latitude
    pub coordinate: Point<f64>,
    /// human-readable name of the resolved place
    pub display_name: String,
}

/// resolves free-text place names to coordinates. a place that cannot be
/// found is Ok(None); Err is reserved for collaborator failures.
pub trait GeocodeService: Send + Sync {
    fn resolve(&self, place_name: &str) -> Result<Option<GeocodedPlace>, CollaboratorError>;
}
