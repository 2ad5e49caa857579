use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use songkit::config::DatabaseConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub database: DatabaseConfig,
}

/// Loads the demo configuration, layering environment variables over
/// an optional config file over built-in defaults.
pub fn load_config(path: &str) -> Result<DemoConfig> {
    let config = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("SONG_DEMO").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config("config/does-not-exist").unwrap();
        assert_eq!(config.database.keyspace, "go_demo1");
        assert_eq!(config.database.port, 9042);
    }
}
