use super::config::{AppConfig, GeocodeSourceConfig, RouteSourceConfig};
use super::HaulerAppError;
use crate::model::collaborator::{
    GeocodeService, HaversineRouteService, RouteService, TableGeocodeService,
};
use crate::model::render::{GeoJsonRenderer, RouteRenderer};
use hauler_core::estimator::{DurationEstimator, EstimateQuery};
use hauler_core::model::RoadClass;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

/// a single user request: either a raw driving distance or a pair of
/// place names to geocode and route between before estimating.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum HaulerQuery {
    Trip {
        from: String,
        to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        route_class: Option<RoadClass>,
    },
    Distance(EstimateQuery),
}

/// the wired application: the duration estimator plus whichever
/// collaborators the configuration provides.
pub struct HaulerApp {
    pub estimator: DurationEstimator,
    pub geocoder: Option<Arc<dyn GeocodeService>>,
    pub router: Option<Arc<dyn RouteService>>,
    pub renderer: Arc<dyn RouteRenderer>,
}

impl TryFrom<&AppConfig> for HaulerApp {
    type Error = HaulerAppError;

    fn try_from(config: &AppConfig) -> Result<Self, Self::Error> {
        let estimator = DurationEstimator::try_from(config.estimator.clone())?;
        let geocoder: Option<Arc<dyn GeocodeService>> = match &config.geocode {
            Some(GeocodeSourceConfig::Table { file }) => {
                let service = TableGeocodeService::from_csv(Path::new(file))?;
                Some(Arc::new(service))
            }
            None => None,
        };
        let router: Option<Arc<dyn RouteService>> = match &config.route {
            Some(RouteSourceConfig::Haversine) => Some(Arc::new(HaversineRouteService {})),
            None => None,
        };
        Ok(HaulerApp {
            estimator,
            geocoder,
            router,
            renderer: Arc::new(GeoJsonRenderer {}),
        })
    }
}

impl HaulerApp {
    /// runs one query to completion, producing a JSON output row.
    ///
    /// # Arguments
    ///
    /// * `query` - the request to run
    ///
    /// # Returns
    ///
    /// a row echoing the request alongside the estimate; place-name trips
    /// additionally carry the resolved endpoint names, route distance, and
    /// a GeoJSON rendering of the route.
    pub fn run_query(&self, query: &HaulerQuery) -> Result<Value, HaulerAppError> {
        match query {
            HaulerQuery::Distance(estimate_query) => {
                let estimate = self.estimator.estimate(estimate_query)?;
                Ok(json!({
                    "request": serde_json::to_value(query)?,
                    "estimate": serde_json::to_value(estimate)?,
                }))
            }
            HaulerQuery::Trip {
                from,
                to,
                route_class,
            } => {
                let geocoder = self.geocoder.as_ref().ok_or_else(|| {
                    HaulerAppError::InvalidUserInput(format!(
                        "query from '{from}' to '{to}' requires a geocode source but none is configured"
                    ))
                })?;
                let router = self.router.as_ref().ok_or_else(|| {
                    HaulerAppError::InvalidUserInput(format!(
                        "query from '{from}' to '{to}' requires a route source but none is configured"
                    ))
                })?;
                let origin = geocoder
                    .resolve(from)?
                    .ok_or_else(|| HaulerAppError::LocationNotFound(from.clone()))?;
                let destination = geocoder
                    .resolve(to)?
                    .ok_or_else(|| HaulerAppError::LocationNotFound(to.clone()))?;
                let plan = router
                    .route(&origin.coordinate, &destination.coordinate)?
                    .ok_or_else(|| HaulerAppError::RouteNotFound(from.clone(), to.clone()))?;
                let distance_km = plan.distance_km();
                let estimate = self.estimator.estimate(&EstimateQuery {
                    distance_km,
                    route_class: *route_class,
                })?;
                let route = self.renderer.render(&plan, &origin, &destination)?;
                Ok(json!({
                    "request": serde_json::to_value(query)?,
                    "origin": origin.display_name,
                    "destination": destination.display_name,
                    "distance_km": distance_km,
                    "estimate": serde_json::to_value(estimate)?,
                    "route": serde_json::to_value(&route)?,
                }))
            }
        }
    }
}
