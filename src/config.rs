use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://cricbuzz-cricket.p.rapidapi.com";
pub const DEFAULT_UPSTREAM_HOST: &str = "cricbuzz-cricket.p.rapidapi.com";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Connection details for the cricket-data API
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 { 30 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CRICKET__)
    /// 5. RAPIDAPI_KEY / RAPIDAPI_HOST
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CRICKET__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = substitute_env_vars(settings)?;

        Self::from_config(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        let settings = substitute_env_vars(settings)?;

        Self::from_config(settings)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;

        if settings.upstream.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "upstream.api_key must be set (RAPIDAPI_KEY or CRICKET__UPSTREAM__API_KEY)".into(),
            ));
        }

        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CRICKET")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000)?
        .set_default("upstream.base_url", DEFAULT_UPSTREAM_BASE_URL)?
        .set_default("upstream.api_host", DEFAULT_UPSTREAM_HOST)?
        .set_default("upstream.timeout_secs", default_timeout_secs())
}

/// Apply the conventional RapidAPI variables on top of the loaded config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = env::var("RAPIDAPI_KEY") {
        builder = builder.set_override("upstream.api_key", api_key)?;
    }
    if let Ok(api_host) = env::var("RAPIDAPI_HOST") {
        builder = builder.set_override("upstream.api_host", api_host)?;
    }

    builder.build()
}
