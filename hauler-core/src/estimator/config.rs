use crate::model::{SpeedProfile, TimeFactors};
use serde::{Deserialize, Serialize};

/// tunable constants of the duration estimation heuristic. every value the
/// heuristic depends on is a named field here so deployments can adjust
/// assumptions without touching the algorithm.
///
/// distances are kilometers, times are minutes unless a field name says
/// otherwise.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EstimatorConfig {
    /// assumed average speed per road class
    pub speed_profile: SpeedProfile,
    /// traffic condition multipliers on base driving time
    pub time_factors: TimeFactors,

    /// trips at or below this distance are treated as urban deliveries
    pub short_haul_max_km: f64,
    /// assumed average speed for urban delivery trips
    pub urban_speed_kph: f64,
    /// fixed loading/unloading time for urban delivery trips
    pub short_haul_service_minutes: f64,
    /// fraction of base driving time added as an urban traffic buffer
    pub traffic_buffer_ratio: f64,

    /// long-haul trips strictly above this distance use the motorway speed.
    /// also the threshold above which the weight station delay applies.
    pub motorway_tier_min_km: f64,
    /// long-haul trips strictly above this distance (and at or below the
    /// motorway threshold) use the trunk speed; at or below, primary.
    /// also the boundary between the long and short service delays and
    /// the cutoff (strict, from below) for the city access delay.
    pub trunk_tier_min_km: f64,

    /// continuous driving allowed before a mandated rest break
    pub continuous_drive_limit_hours: f64,
    /// length of each mandated rest break
    pub rest_break_minutes: f64,

    /// loading/unloading time when distance exceeds the trunk threshold
    pub long_service_minutes: f64,
    /// loading/unloading time otherwise
    pub short_service_minutes: f64,
    /// delay for entering city limits, applied strictly below the trunk
    /// threshold
    pub city_access_minutes: f64,
    /// weight station stop, applied strictly above the motorway threshold
    pub weight_station_minutes: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            speed_profile: SpeedProfile::default(),
            time_factors: TimeFactors::default(),
            short_haul_max_km: 15.0,
            urban_speed_kph: 25.0,
            short_haul_service_minutes: 15.0,
            traffic_buffer_ratio: 0.2,
            motorway_tier_min_km: 100.0,
            trunk_tier_min_km: 50.0,
            continuous_drive_limit_hours: 4.5,
            rest_break_minutes: 45.0,
            long_service_minutes: 30.0,
            short_service_minutes: 20.0,
            city_access_minutes: 20.0,
            weight_station_minutes: 15.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = EstimatorConfig::default();
        assert_eq!(config.short_haul_max_km, 15.0);
        assert_eq!(config.urban_speed_kph, 25.0);
        assert_eq!(config.short_haul_service_minutes, 15.0);
        assert_eq!(config.traffic_buffer_ratio, 0.2);
        assert_eq!(config.motorway_tier_min_km, 100.0);
        assert_eq!(config.trunk_tier_min_km, 50.0);
        assert_eq!(config.continuous_drive_limit_hours, 4.5);
        assert_eq!(config.rest_break_minutes, 45.0);
        assert_eq!(config.long_service_minutes, 30.0);
        assert_eq!(config.short_service_minutes, 20.0);
        assert_eq!(config.city_access_minutes, 20.0);
        assert_eq!(config.weight_station_minutes, 15.0);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let json = serde_json::json!({
            "urban_speed_kph": 20.0,
            "speed_profile": { "motorway_kph": 90.0 }
        });
        let config: EstimatorConfig =
            serde_json::from_value(json).expect("test invariant failed: cannot deserialize");
        assert_eq!(config.urban_speed_kph, 20.0);
        assert_eq!(config.speed_profile.motorway_kph, 90.0);
        // untouched fields fall back to defaults
        assert_eq!(config.speed_profile.trunk_kph, 60.0);
        assert_eq!(config.rest_break_minutes, 45.0);
    }
}
