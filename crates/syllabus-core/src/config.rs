//! Generator configuration.
//!
//! Configuration is optional. Without a file every setting falls back to its
//! default, and `SYLLABUS__*` environment variables can override individual
//! keys (for example `SYLLABUS__SHARED_SERVER__HOST`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Default SSH port of the shared lab server.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "syllabus.toml";

/// Main configuration structure for Syllabus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shared lab server handed out to students.
    pub shared_server: SharedServerConfig,

    /// Assets referenced by the generated page.
    pub page: PageConfig,
}

/// Shared lab server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedServerConfig {
    /// Hostname students connect to. Empty when no server is shared.
    pub host: String,

    /// SSH port on the shared server.
    pub port: u16,
}

/// Page asset settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Stylesheet URLs linked from the document head.
    pub stylesheets: Vec<String>,

    /// Script URLs included at the end of the body.
    pub scripts: Vec<String>,
}

fn default_stylesheets() -> Vec<String> {
    vec!["bootstrap-3.2.0-dist/css/bootstrap.min.css".to_string()]
}

fn default_scripts() -> Vec<String> {
    vec![
        "https://ajax.googleapis.com/ajax/libs/jquery/1.11.1/jquery.min.js".to_string(),
        "bootstrap-3.2.0-dist/js/bootstrap.min.js".to_string(),
    ]
}

impl Default for SharedServerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_SSH_PORT,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            stylesheets: default_stylesheets(),
            scripts: default_scripts(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional file layered under `SYLLABUS__*`
    /// environment overrides.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix("SYLLABUS").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load the given file, or `syllabus.toml` from the working directory if it
    /// exists, falling back to defaults plus environment overrides.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.exists() => Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            ))),
            Some(path) => Self::load_with_env(Some(path)),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    tracing::info!(path = DEFAULT_CONFIG_FILE, "using configuration file");
                    Self::load_with_env(Some(default_path))
                } else {
                    tracing::debug!("no configuration file found, using defaults");
                    Self::load_with_env(None)
                }
            }
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.shared_server.port == 0 {
            return Err(CoreError::config("shared_server.port must not be zero"));
        }

        if self.shared_server.host.chars().any(char::is_whitespace) {
            tracing::warn!(
                host = %self.shared_server.host,
                "shared_server.host contains whitespace"
            );
        }

        Ok(())
    }

    /// Apply command-line overrides for the shared server.
    pub fn with_shared_server(mut self, host: Option<&str>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.shared_server.host = host.to_string();
        }
        if let Some(port) = port {
            self.shared_server.port = port;
        }
        self
    }
}
