use super::RoadClass;
use serde::{Deserialize, Serialize};
use uom::si::f64::Velocity;

/// assumed average speed for each road class, in kilometers per hour.
/// the secondary and residential entries are not selected by the current
/// distance-based tier logic but remain tunable configuration alongside
/// the reachable tiers.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SpeedProfile {
    pub motorway_kph: f64,
    pub trunk_kph: f64,
    pub primary_kph: f64,
    pub secondary_kph: f64,
    pub residential_kph: f64,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        SpeedProfile {
            motorway_kph: 80.0,
            trunk_kph: 60.0,
            primary_kph: 50.0,
            secondary_kph: 40.0,
            residential_kph: 30.0,
        }
    }
}

impl SpeedProfile {
    /// grab the assumed speed for a road class as a uom Velocity
    pub fn speed(&self, road_class: &RoadClass) -> Velocity {
        Velocity::new::<uom::si::velocity::kilometer_per_hour>(self.speed_kph(road_class))
    }

    pub fn speed_kph(&self, road_class: &RoadClass) -> f64 {
        match road_class {
            RoadClass::Motorway => self.motorway_kph,
            RoadClass::Trunk => self.trunk_kph,
            RoadClass::Primary => self.primary_kph,
            RoadClass::Secondary => self.secondary_kph,
            RoadClass::Residential => self.residential_kph,
        }
    }
}
