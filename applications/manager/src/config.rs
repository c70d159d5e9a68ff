/// Application settings
use bookshelf_client::ClientConfig;
use bookshelf_core::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bookshelf.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Base URL of the book API, without the `/bookapi` suffix
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Settings {
    /// Load settings once at startup.
    ///
    /// Sources, lowest priority first: the config file, `BOOKSHELF_*`
    /// environment variables, then `api_url_override` (the CLI flag).
    pub fn load(config_file: Option<&Path>, api_url_override: Option<String>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match config_file {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(config::Environment::with_prefix("BOOKSHELF"));

        let config = settings
            .set_override_option("api_url", api_url_override)
            .and_then(|builder| builder.build())
            .map_err(|e| BookshelfError::config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| BookshelfError::config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(BookshelfError::config(
                "API URL is required (set BOOKSHELF_API_URL or --api-url)",
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(BookshelfError::config(format!(
                "API URL must start with http:// or https://, got {:?}",
                url
            )));
        }

        Ok(())
    }

    /// Client configuration to hand to the HTTP book service
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.trim())
    }
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}
