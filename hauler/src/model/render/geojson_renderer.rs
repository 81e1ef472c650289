use super::{RenderError, RouteRenderer};
use crate::model::collaborator::{GeocodedPlace, RoutePlan};
use geo::{BoundingRect, Point};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};

/// renders a route plan as a GeoJSON FeatureCollection: one LineString
/// feature for the primary path, point features marking the origin and
/// destination, and a bbox for fitting the viewport.
pub struct GeoJsonRenderer {}

impl RouteRenderer for GeoJsonRenderer {
    fn render(
        &self,
        plan: &RoutePlan,
        origin: &GeocodedPlace,
        destination: &GeocodedPlace,
    ) -> Result<geojson::FeatureCollection, RenderError> {
        let bounding = plan.path.bounding_rect().ok_or_else(|| {
            RenderError::RenderFailure("route path has no coordinates".to_string())
        })?;
        let bbox = vec![
            bounding.min().x,
            bounding.min().y,
            bounding.max().x,
            bounding.max().y,
        ];

        let mut route_properties = JsonObject::new();
        route_properties.insert("role".to_string(), "route".into());
        route_properties.insert("distance_km".to_string(), plan.distance_km().into());
        let route_feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&plan.path))),
            id: None,
            properties: Some(route_properties),
            foreign_members: None,
        };

        let features = vec![
            route_feature,
            marker_feature(&origin.coordinate, "origin", &origin.display_name),
            marker_feature(
                &destination.coordinate,
                "destination",
                &destination.display_name,
            ),
        ];

        Ok(FeatureCollection {
            bbox: Some(bbox),
            features,
            foreign_members: None,
        })
    }
}

fn marker_feature(coordinate: &Point<f64>, role: &str, name: &str) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("role".to_string(), role.into());
    properties.insert("name".to_string(), name.into());
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(coordinate))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
