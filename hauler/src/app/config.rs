use super::HaulerAppError;
use config::{Config, File};
use hauler_core::estimator::EstimatorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// top-level application configuration: the estimator constants plus
/// optional geocode and route collaborator sources. place-name queries
/// require both sources; raw distance queries require neither.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct AppConfig {
    pub estimator: EstimatorConfig,
    pub geocode: Option<GeocodeSourceConfig>,
    pub route: Option<RouteSourceConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum GeocodeSourceConfig {
    /// CSV place table with name, latitude, longitude, display_name
    /// columns. a relative file path is resolved against the directory of
    /// the configuration file.
    Table { file: String },
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum RouteSourceConfig {
    /// two-point great-circle plan between the geocoded endpoints
    Haversine,
}

impl AppConfig {
    /// reads an AppConfig from a TOML file, resolving any relative
    /// collaborator file paths against the configuration file's directory.
    pub fn from_file(path: &Path) -> Result<AppConfig, HaulerAppError> {
        let config = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| {
                HaulerAppError::BuildFailure(format!(
                    "configuration file '{}' produced error: {e}",
                    path.display()
                ))
            })?;
        let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
            HaulerAppError::BuildFailure(format!(
                "failure decoding configuration file '{}': {e}",
                path.display()
            ))
        })?;
        if let Some(base) = path.parent() {
            app_config.normalize_paths(base);
        }
        Ok(app_config)
    }

    fn normalize_paths(&mut self, base: &Path) {
        if let Some(GeocodeSourceConfig::Table { file }) = &mut self.geocode {
            let file_path = Path::new(file.as_str());
            if file_path.is_relative() {
                *file = base.join(file_path).to_string_lossy().to_string();
            }
        }
    }
}
