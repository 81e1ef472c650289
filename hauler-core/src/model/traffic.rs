use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// coarse traffic condition assumption used to inflate base driving time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrafficCondition {
    Peak,
    Normal,
    Nighttime,
}

impl Display for TrafficCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrafficCondition::Peak => "peak",
            TrafficCondition::Normal => "normal",
            TrafficCondition::Nighttime => "nighttime",
        };
        write!(f, "{s}")
    }
}

/// multipliers applied to base driving time per traffic condition. the
/// estimator currently applies only the normal factor; peak and nighttime
/// remain tunable configuration.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TimeFactors {
    pub peak: f64,
    pub normal: f64,
    pub nighttime: f64,
}

impl Default for TimeFactors {
    fn default() -> Self {
        TimeFactors {
            peak: 1.4,
            normal: 1.2,
            nighttime: 1.1,
        }
    }
}

impl TimeFactors {
    pub fn factor(&self, condition: &TrafficCondition) -> f64 {
        match condition {
            TrafficCondition::Peak => self.peak,
            TrafficCondition::Normal => self.normal,
            TrafficCondition::Nighttime => self.nighttime,
        }
    }
}
