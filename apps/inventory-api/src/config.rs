use core_config::{AppInfo, FromEnv, app_info, cors::CorsConfig, env_bool, server::ServerConfig};

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Load the demonstration catalogue at startup (`SEED_SAMPLE_DATA`)
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let seed_sample_data = env_bool("SEED_SAMPLE_DATA", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            cors,
            environment,
            seed_sample_data,
        })
    }
}
