use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub data_dir: String,
    pub generator_url: String,
    pub generator_api_key: Option<SecretString>,
    pub generator_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            generator_url: env::var("GENERATOR_URL")
                .unwrap_or_else(|_| "http://localhost:8788/generate-quiz".to_string()),
            generator_api_key: env::var("GENERATOR_API_KEY").ok().map(SecretString::from),
            // The generation call is the only remote dependency; a hung call
            // would otherwise leave the session stuck in `generating`.
            generator_timeout_secs: env::var("GENERATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(45),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            data_dir: "./data-test".to_string(),
            generator_url: "http://localhost:8788/generate-quiz".to_string(),
            generator_api_key: None,
            generator_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(!config.data_dir.is_empty());
        assert!(!config.generator_url.is_empty());
        assert!(config.generator_timeout_secs > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_host, "127.0.0.1");
        assert_eq!(config.data_dir, "./data-test");
        assert!(config.generator_api_key.is_none());
    }
}
