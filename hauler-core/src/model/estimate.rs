use serde::{Deserialize, Serialize};
use uom::si::f64::Time;

/// result of a duration estimation: the total trip time rounded to the
/// nearest whole minute and the count of mandated rest breaks included
/// in that total.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationEstimate {
    pub total_minutes: u64,
    pub rest_stops: u64,
}

impl DurationEstimate {
    /// grab the total trip time as a uom Time value
    pub fn total(&self) -> Time {
        Time::new::<uom::si::time::minute>(self.total_minutes as f64)
    }
}
