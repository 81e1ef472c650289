use super::CollaboratorError;
use geo::{LineString, Point};
use uom::si::f64::Length;

/// a path between two coordinates: the primary path as an ordered
/// coordinate sequence, its total distance, and zero or more alternative
/// paths.
#[derive(Clone, Debug)]
pub struct RoutePlan {
    pub path: LineString<f64>,
    pub distance: Length,
    pub alternatives: Vec<LineString<f64>>,
}

impl RoutePlan {
    pub fn distance_km(&self) -> f64 {
        self.distance.get::<uom::si::length::kilometer>()
    }
}

/// resolves two coordinates to a route plan. an unreachable destination is
/// Ok(None); Err is reserved for collaborator failures.
pub trait RouteService: Send + Sync {
    fn route(
        &self,
        origin: &Point<f64>,
        destination: &Point<f64>,
    ) -> Result<Option<RoutePlan>, CollaboratorError>;
}
