use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub store_backend: StoreBackend,
    pub run_migrations: bool,
    pub quiz_exclude_previous: bool,
    pub request_max_bytes: usize,
    pub is_production: bool,
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(str::trim) {
        Some("1") | Some("true") | Some("yes") | Some("on") => true,
        Some("0") | Some("false") | Some("no") | Some("off") => false,
        _ => default,
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_port = lookup("API_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "postgres://postgres@localhost:5432/trivia".into());
        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(10);
        let store_backend = match lookup("STORE_BACKEND")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("postgres") | Some("postgresql") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => anyhow::bail!("unknown STORE_BACKEND '{other}' (expected postgres or memory)"),
        };
        let run_migrations = parse_flag(lookup("RUN_MIGRATIONS"), true);
        let quiz_exclude_previous = parse_flag(lookup("QUIZ_EXCLUDE_PREVIOUS"), true);
        let request_max_bytes = lookup("REQUEST_MAX_BYTES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(64 * 1024);
        let is_production = matches!(
            lookup("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );

        if is_production && store_backend == StoreBackend::Memory {
            anyhow::bail!("STORE_BACKEND=memory is not allowed in production");
        }

        Ok(Self {
            api_port,
            database_url,
            db_max_connections,
            store_backend,
            run_migrations,
            quiz_exclude_previous,
            request_max_bytes,
            is_production,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = config_with(&[]).unwrap();
        assert_eq!(cfg.api_port, 5000);
        assert_eq!(cfg.store_backend, StoreBackend::Postgres);
        assert_eq!(cfg.db_max_connections, 10);
        assert!(cfg.run_migrations);
        assert!(cfg.quiz_exclude_previous);
        assert!(!cfg.is_production);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config_with(&[
            ("API_PORT", "8080"),
            ("STORE_BACKEND", "Memory"),
            ("QUIZ_EXCLUDE_PREVIOUS", "false"),
            ("DB_MAX_CONNECTIONS", "0"),
        ])
        .unwrap();
        assert_eq!(cfg.api_port, 8080);
        assert_eq!(cfg.store_backend, StoreBackend::Memory);
        assert!(!cfg.quiz_exclude_previous);
        assert_eq!(cfg.db_max_connections, 10);
    }

    #[test]
    fn rejects_unknown_backend_and_memory_in_production() {
        assert!(config_with(&[("STORE_BACKEND", "sqlite")]).is_err());
        assert!(config_with(&[("STORE_BACKEND", "memory"), ("RUST_ENV", "production")]).is_err());
    }
}
