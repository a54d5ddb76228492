//! Server configuration, read from the environment.

use imaginary_core::gateway::DEFAULT_GATEWAY_URL;

const DEFAULT_PORT: u16 = 8090;

/// CDN credentials; uploads are disabled unless all three are present.
#[derive(Debug, Clone)]
pub struct CdnConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Everything the server reads from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub gateway_base_url: String,
    /// Absent keys fail at request time, not at startup.
    pub gateway_api_key: Option<String>,
    pub database_url: Option<String>,
    pub cdn: Option<CdnConfig>,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env_var("IMAGINARY_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cdn = match (
            env_var("CDN_CLOUD_NAME"),
            env_var("CDN_API_KEY"),
            env_var("CDN_API_SECRET"),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => {
                Some(CdnConfig { cloud_name, api_key, api_secret })
            }
            _ => None,
        };

        Self {
            port,
            gateway_base_url: env_var("GATEWAY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
            gateway_api_key: env_var("GATEWAY_API_KEY"),
            database_url: env_var("DATABASE_URL"),
            cdn,
        }
    }
}
