use anyhow::Result;
use std::time::Duration;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "logisland.toml";
pub const ENV_PREFIX: &str = "LOGISLAND";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    #[default]
    Rest,
    Memory,
}

/// Where the live search filter of a data source is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Fetch once, filter the fetched rows locally.
    #[default]
    Client,
    /// Send the filter as the search keyword on every change.
    Server,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub jobs_api: String,
    pub topics_api: String,
    pub plugins_api: String,
    pub crud_backend: BackendType,
    pub filter_mode: FilterMode,
    pub page_size: u32,
    pub seed_sample_data: bool,
    /// How long a page waits for its first rows before rendering without them.
    pub page_wait_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            jobs_api: "http://localhost:8081/jobs".to_string(),
            topics_api: "http://localhost:8081/topics".to_string(),
            plugins_api: "http://localhost:8081/processors".to_string(),
            crud_backend: BackendType::Rest,
            filter_mode: FilterMode::Client,
            page_size: 10,
            seed_sample_data: false,
            page_wait_ms: 5000,
        }
    }
}

impl ConsoleConfig {
    pub fn page_wait(&self) -> Duration {
        Duration::from_millis(self.page_wait_ms)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, url) in [
            ("jobs_api", &self.jobs_api),
            ("topics_api", &self.topics_api),
            ("plugins_api", &self.plugins_api),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow::anyhow!("{} must be an http(s) URL, got '{}'", key, url));
            }
        }
        if self.page_size == 0 {
            return Err(anyhow::anyhow!("page_size must be positive"));
        }
        Ok(())
    }
}

/// Layers defaults, an optional config file and `LOGISLAND_*` environment variables.
///
/// An explicit `path` must exist; without one, `logisland.toml` is read when present.
pub fn load_console_config(path: Option<&str>) -> Result<ConsoleConfig> {
    dotenv::dotenv().ok();

    let file = match path {
        Some(p) => config::File::with_name(p).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_PATH).required(false),
    };
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;

    let console_config: ConsoleConfig = settings.try_deserialize()?;
    console_config.validate()?;
    log::debug!("Loaded console config: {:?}", console_config);
    Ok(console_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "topics_api = \"http://host/topics\"\ncrud_backend = \"memory\"\nfilter_mode = \"server\""
        )
        .unwrap();

        let config = load_console_config(file.path().to_str()).unwrap();
        assert_eq!(config.topics_api, "http://host/topics");
        assert_eq!(config.jobs_api, "http://localhost:8081/jobs");
        assert_eq!(config.crud_backend, BackendType::Memory);
        assert_eq!(config.filter_mode, FilterMode::Server);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load_console_config(Some("/nonexistent/logisland.toml")).is_err());
    }

    #[test]
    fn environment_applies_without_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        // SAFETY: no other test in this binary reads or writes this variable.
        unsafe { std::env::set_var("LOGISLAND_PLUGINS_API", "http://plugins:9000/processors") };

        let loaded = load_console_config(None);

        unsafe { std::env::remove_var("LOGISLAND_PLUGINS_API") };
        std::env::set_current_dir(previous).unwrap();

        let config = loaded.unwrap();
        assert_eq!(config.plugins_api, "http://plugins:9000/processors");
        assert_eq!(config.jobs_api, ConsoleConfig::default().jobs_api);
    }

    #[test]
    fn rejects_non_http_urls() {
        let config = ConsoleConfig {
            jobs_api: "ftp://host/jobs".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(ConsoleConfig::default().validate().is_ok());
    }
}
