use crate::model::EstimatorError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// coarse road classification used to assume an average travel speed for
/// a trip. ordered from fastest to slowest assumed speed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoadClass {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Residential,
}

impl RoadClass {
    pub const ALL: [RoadClass; 5] = [
        RoadClass::Motorway,
        RoadClass::Trunk,
        RoadClass::Primary,
        RoadClass::Secondary,
        RoadClass::Residential,
    ];
}

impl Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoadClass::Motorway => "motorway",
            RoadClass::Trunk => "trunk",
            RoadClass::Primary => "primary",
            RoadClass::Secondary => "secondary",
            RoadClass::Residential => "residential",
        };
        write!(f, "{s}")
    }
}

impl FromStr for RoadClass {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "motorway" => Ok(RoadClass::Motorway),
            "trunk" => Ok(RoadClass::Trunk),
            "primary" => Ok(RoadClass::Primary),
            "secondary" => Ok(RoadClass::Secondary),
            "residential" => Ok(RoadClass::Residential),
            _ => Err(EstimatorError::InvalidArgument(format!(
                "unknown road class '{s}', expected one of: motorway, trunk, primary, secondary, residential"
            ))),
        }
    }
}
