#[derive(thiserror::Error, Debug)]
pub enum EstimatorError {
    #[error("invalid estimator argument: {0}")]
    InvalidArgument(String),
    #[error("failure building duration estimator: {0}")]
    BuildError(String),
}
