pub mod cli_args;
pub mod config;
mod error;
pub mod hauler_app;
pub mod run;

pub use error::HaulerAppError;
