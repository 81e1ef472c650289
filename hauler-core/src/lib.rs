pub mod estimator;
pub mod model;
