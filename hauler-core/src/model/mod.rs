mod estimate;
mod error;
mod road_class;
mod speed_profile;
mod traffic;

pub use estimate::DurationEstimate;
pub use error::EstimatorError;
pub use road_class::RoadClass;
pub use speed_profile::SpeedProfile;
pub use traffic::{TimeFactors, TrafficCondition};
