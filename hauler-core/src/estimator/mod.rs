mod config;
mod model;
mod query;

pub use config::EstimatorConfig;
pub use model::DurationEstimator;
pub use query::EstimateQuery;
