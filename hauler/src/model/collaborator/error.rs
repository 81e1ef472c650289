#[derive(thiserror::Error, Debug)]
pub enum CollaboratorError {
    #[error("geocoding failure for '{place}': {message}")]
    GeocodeFailure { place: String, message: String },
    #[error("routing failure: {0}")]
    RouteFailure(String),
    #[error("failure building collaborator: {0}")]
    BuildError(String),
}
