mod error;
mod geocode;
mod haversine_route;
mod route;
mod table_geocode;

pub use error::CollaboratorError;
pub use geocode::{GeocodeService, GeocodedPlace};
pub use haversine_route::HaversineRouteService;
pub use route::{RoutePlan, RouteService};
pub use table_geocode::{PlaceRecord, TableGeocodeService};
