use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, cors::CorsConfig, env_or_default, env_parse_or,
    server::ServerConfig,
};
use domain_articles::GeminiConfig;
use std::time::Duration;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5000;

/// Which text generator backs the service
#[derive(Clone, Debug)]
pub enum GeneratorConfig {
    Gemini(GeminiConfig),
    /// Canned offline output, no credentials needed
    Scripted,
}

impl FromEnv for GeneratorConfig {
    /// `GENERATOR_PROVIDER`: `gemini` (default) or `scripted`
    fn from_env() -> Result<Self, ConfigError> {
        let provider = env_or_default("GENERATOR_PROVIDER", "gemini");
        match provider.to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini(GeminiConfig::from_env()?)),
            "scripted" => Ok(Self::Scripted),
            other => Err(ConfigError::ParseError {
                key: "GENERATOR_PROVIDER".to_string(),
                details: format!("unknown provider '{}', expected gemini or scripted", other),
            }),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    pub generator: GeneratorConfig,
    /// Minimum spacing between generator calls; zero disables pacing
    pub generation_min_interval: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env_with_port(DEFAULT_PORT)?;
        let cors = CorsConfig::from_env()?;
        let generator = GeneratorConfig::from_env()?;
        let interval_ms: u64 = env_parse_or("GENERATION_MIN_INTERVAL_MS", 1000)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            generator,
            generation_min_interval: Duration::from_millis(interval_ms),
        })
    }
}
