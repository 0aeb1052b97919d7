//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blogger_infra::DatabaseConfig;

/// Client assets shipped in this crate's source tree.
const BUNDLED_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Unset means posts live in memory only.
    pub database: Option<DatabaseConfig>,
    /// Directory of client assets; `None` disables static serving.
    pub public_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse_or = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        };

        let database = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
                min_connections: parse_or("DB_MIN_CONNECTIONS", 1),
            });

        // An explicit PUBLIC_DIR is used as given; otherwise `./public`,
        // then the assets bundled with this crate.
        let public_dir = match lookup("PUBLIC_DIR") {
            Some(dir) => Some(PathBuf::from(dir)).filter(|d| d.is_dir()),
            None => [PathBuf::from("public"), PathBuf::from(BUNDLED_PUBLIC_DIR)]
                .into_iter()
                .find(|d| d.is_dir()),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database,
            public_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("PUBLIC_DIR", "/definitely/not/here")]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.database.is_none());
        assert!(config.public_dir.is_none());
    }

    #[test]
    fn test_database_settings() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/blog"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("PORT", "8080"),
        ]);
        let db = config.database.unwrap();
        assert_eq!(db.url, "postgres://localhost/blog");
        assert_eq!(db.max_connections, 25);
        assert_eq!(db.min_connections, 1);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_public_dir_defaults_to_bundled_assets() {
        let dir = config(&[]).public_dir.unwrap();
        assert!(dir.join("blogger.html").is_file());
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config(&[("PORT", "http"), ("DATABASE_URL", "")]);
        assert_eq!(config.port, 3000);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_existing_public_dir_is_used() {
        let dir = env::temp_dir();
        let config = config(&[("PUBLIC_DIR", dir.to_str().unwrap())]);
        assert_eq!(config.public_dir, Some(dir));
    }
}
