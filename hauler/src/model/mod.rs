pub mod collaborator;
pub mod render;
