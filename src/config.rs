//! Environment-driven configuration.

/// Runtime settings, all from environment variables (`.env` honored via
/// dotenvy in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string. Falls back to a local file-backed SQLite store
    /// when `DATABASE_URL` is absent.
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://holocron.db?mode=rwc".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        Config { database_url, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_file_store() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("PORT");
        let cfg = Config::from_env();
        assert!(cfg.database_url.starts_with("sqlite://"));
        assert_eq!(cfg.port, 3000);
    }
}
