use crate::model::collaborator::CollaboratorError;
use crate::model::render::RenderError;
use hauler_core::model::EstimatorError;

#[derive(thiserror::Error, Debug)]
pub enum HaulerAppError {
    #[error("failure building app: {0}")]
    BuildFailure(String),
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
    #[error("location not found: '{0}'")]
    LocationNotFound(String),
    #[error("no route found between '{0}' and '{1}'")]
    RouteNotFound(String, String),
    #[error(transparent)]
    EstimatorError(#[from] EstimatorError),
    #[error(transparent)]
    CollaboratorError(#[from] CollaboratorError),
    #[error(transparent)]
    RenderError(#[from] RenderError),
    #[error("error decoding JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
