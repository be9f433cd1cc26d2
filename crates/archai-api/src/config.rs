use std::env;
use std::path::PathBuf;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,

    /// Allowed CORS origins; `*` allows any origin
    pub cors_origins: Vec<String>,

    /// Optional TOML file for the layered pipeline configuration
    pub config_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 8001,
            cors_origins: vec!["*".to_string()],
            config_path: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = match env::var("ARCHAI_PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid ARCHAI_PORT value '{}', using {}", value, defaults.port);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .ok()
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        let config_path = env::var("ARCHAI_CONFIG")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            port,
            cors_origins,
            config_path,
        }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Whether any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
