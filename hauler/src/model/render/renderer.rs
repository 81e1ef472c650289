use crate::model::collaborator::{GeocodedPlace, RoutePlan};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failure rendering route: {0}")]
    RenderFailure(String),
}

/// renders a planned route with start/end markers and viewport-fitting
/// bounds. the map view itself is out of scope; implementations produce a
/// data artifact a map client can display directly.
pub trait RouteRenderer: Send + Sync {
    fn render(
        &self,
        plan: &RoutePlan,
        origin: &GeocodedPlace,
        destination: &GeocodedPlace,
    ) -> Result<geojson::FeatureCollection, RenderError>;
}
