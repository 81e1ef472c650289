use super::{CollaboratorError, RoutePlan, RouteService};
use geo::{Distance, Haversine, LineString, Point};
use uom::si::f64::Length;

/// offline route service producing a two-point great-circle plan. stands
/// in for a road network router when no external routing service is
/// wired; the resulting distance feeds the duration estimator the same
/// way a network route distance would.
pub struct HaversineRouteService {}

impl RouteService for HaversineRouteService {
    fn route(
        &self,
        origin: &Point<f64>,
        destination: &Point<f64>,
    ) -> Result<Option<RoutePlan>, CollaboratorError> {
        let meters = Haversine.distance(*origin, *destination);
        if !meters.is_finite() {
            return Err(CollaboratorError::RouteFailure(format!(
                "non-finite distance between {:?} and {:?}",
                origin.x_y(),
                destination.x_y()
            )));
        }
        let plan = RoutePlan {
            path: LineString::from(vec![origin.0, destination.0]),
            distance: Length::new::<uom::si::length::meter>(meters),
            alternatives: vec![],
        };
        Ok(Some(plan))
    }
}
