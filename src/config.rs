use std::env;
use std::fmt;
use anyhow::{Context, Result};

use crate::policy::StatusPolicy;

#[derive(Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub service_host: String,
    pub service_port: u16,
    pub status_policy: StatusPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());

        let db_port = lookup("DB_PORT")
            .unwrap_or_else(|| "3306".to_string())
            .parse::<u16>()
            .context("DB_PORT must be a valid port number (0-65535)")?;

        let db_user = lookup("DB_USER")
            .context("DB_USER environment variable is required")?;

        let db_password = lookup("DB_PASSWORD").unwrap_or_default();

        let db_name = lookup("DB_NAME")
            .context("DB_NAME environment variable is required")?;

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .context("DB_MAX_CONNECTIONS must be a positive integer")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let status_policy = match lookup("STATUS_POLICY") {
            Some(value) => value
                .parse::<StatusPolicy>()
                .context("STATUS_POLICY must be 'documented' or 'legacy'")?,
            None => StatusPolicy::default(),
        };

        Ok(Config {
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            db_max_connections,
            service_host,
            service_port,
            status_policy,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Database: {}@{}:{}/{}",
            self.db_user,
            self.db_host,
            self.db_port,
            self.db_name
        );
        let password = if self.db_password.is_empty() {
            "not set"
        } else {
            "set (redacted)"
        };
        tracing::info!("  Database password: {}", password);
        tracing::info!("  Max database connections: {}", self.db_max_connections);
        tracing::info!("  Status policy: {}", self.status_policy);
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"<redacted>")
            .field("db_name", &self.db_name)
            .field("db_max_connections", &self.db_max_connections)
            .field("service_host", &self.service_host)
            .field("service_port", &self.service_port)
            .field("status_policy", &self.status_policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [("DB_USER", "root"), ("DB_NAME", "alumni")];

    #[test]
    fn test_config_with_all_vars() {
        let config = load(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "3307"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "alumni"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("SERVICE_HOST", "0.0.0.0"),
            ("SERVICE_PORT", "9000"),
            ("STATUS_POLICY", "legacy"),
        ])
        .unwrap();

        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.db_port, 3307);
        assert_eq!(config.db_user, "app");
        assert_eq!(config.db_password, "secret");
        assert_eq!(config.db_name, "alumni");
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.service_port, 9000);
        assert_eq!(config.status_policy, StatusPolicy::Legacy);
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = load(&REQUIRED).unwrap();

        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_port, 3306);
        assert_eq!(config.db_password, "");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.status_policy, StatusPolicy::Documented);
    }

    #[test]
    fn test_missing_required_var() {
        let error = load(&[("DB_USER", "root")]).unwrap_err();
        assert!(error.to_string().contains("DB_NAME"));

        let error = load(&[("DB_NAME", "alumni")]).unwrap_err();
        assert!(error.to_string().contains("DB_USER"));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SERVICE_PORT", "not-a-number"));
        let error = load(&vars).unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("DB_PORT", "99999"));
        let error = load(&vars).unwrap_err();
        assert!(error.to_string().contains("DB_PORT"));
    }

    #[test]
    fn test_zero_connections_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("DB_MAX_CONNECTIONS", "0"));
        let error = load(&vars).unwrap_err();
        assert!(error.to_string().contains("DB_MAX_CONNECTIONS"));
    }

    #[test]
    fn test_invalid_status_policy() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("STATUS_POLICY", "strict"));
        let error = load(&vars).unwrap_err();
        assert!(error.to_string().contains("STATUS_POLICY"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("DB_PASSWORD", "cit381"));
        let config = load(&vars).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("cit381"));
        assert!(rendered.contains("<redacted>"));
    }
}
