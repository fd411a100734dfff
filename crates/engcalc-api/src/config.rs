//! Environment-based server configuration.

use std::env;

/// Default port, matching the original deployment.
const DEFAULT_PORT: u16 = 3001;

/// Origins allowed by default: the deployed frontends plus local dev ports.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://localhost:4173",
    "https://engineering-calc-api.vercel.app",
    "https://engineer-brain-tool.vercel.app",
];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub max_body_size_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            max_body_size_mb: 1,
        }
    }
}

impl ServerConfig {
    /// Build configuration from environment variables, falling back to the
    /// defaults above. `ENGCALC_PORT` wins over the platform-provided `PORT`.
    pub fn from_environment() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("ENGCALC_HOST").unwrap_or(defaults.host),
            port: env::var("ENGCALC_PORT")
                .or_else(|_| env::var("PORT"))
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.port),
            allowed_origins: env::var("ENGCALC_ALLOWED_ORIGINS")
                .ok()
                .map(|raw| {
                    raw.split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.allowed_origins),
            max_body_size_mb: env::var("ENGCALC_MAX_BODY_SIZE_MB")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.max_body_size_mb),
        }
    }

    /// An origin is allowed when it is on the allowlist or is any localhost
    /// origin (local dev servers pick arbitrary ports).
    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
            || origin.contains("localhost")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployment() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.allowed_origins.contains(&"http://localhost:5173".to_string()));
    }

    #[test]
    fn localhost_origins_are_always_allowed() {
        let config = ServerConfig::default();
        assert!(config.is_allowed_origin("http://localhost:9999"));
        assert!(config.is_allowed_origin("https://engineer-brain-tool.vercel.app"));
        assert!(!config.is_allowed_origin("https://evil.example.com"));
    }

    #[test]
    fn origin_list_parses_from_env_format() {
        let config = ServerConfig {
            allowed_origins: "https://a.example, https://b.example"
                .split(',')
                .map(|o| o.trim().to_string())
                .collect(),
            ..ServerConfig::default()
        };
        assert!(config.is_allowed_origin("https://a.example"));
        assert!(config.is_allowed_origin("https://b.example"));
    }
}
