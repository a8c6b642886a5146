use crate::error::{Result, SignupError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "signup.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub users: UsersSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL IDE on GET requests
    #[serde(default = "default_playground")]
    pub playground: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_playground() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            playground: default_playground(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersSettings {
    #[serde(default = "default_activation_token_length")]
    pub activation_token_length: usize,
}

fn default_activation_token_length() -> usize {
    32
}

impl Default for UsersSettings {
    fn default() -> Self {
        Self {
            activation_token_length: default_activation_token_length(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SignupConfig {
    /// Loads the config from an explicit path, or searches upward from
    /// `start_path`. No config file found means defaults.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<(Self, Option<PathBuf>)> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(SignupError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(start_path),
        };

        let Some(config_path) = config_path else {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            return Ok((Self::default(), None));
        };

        let config = Self::from_file(&config_path)?;
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, Some(config_path)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SignupConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(SignupError::Config("server.host cannot be empty".to_string()));
        }
        if !(8..=128).contains(&self.users.activation_token_length) {
            return Err(SignupError::Config(format!(
                "users.activation_token_length must be between 8 and 128, got {}",
                self.users.activation_token_length
            )));
        }
        Ok(())
    }

    /// Applies `serve` command-line flags on top of the loaded settings and
    /// re-checks the result.
    pub fn apply_server_overrides(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
        no_playground: bool,
    ) -> Result<()> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if no_playground {
            self.server.playground = false;
        }
        self.validate()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
