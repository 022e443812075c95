use anyhow::{Context as _, anyhow};

use internship_core::tracing::LogFormat;

/// Supervisors service configuration loaded from environment variables.
#[derive(Debug)]
pub struct SupervisorsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `SUPERVISORS_PORT`.
    pub supervisors_port: u16,
    /// Stdout log format, `json` (default) or `pretty`. Env var: `LOG_FORMAT`.
    pub log_format: LogFormat,
}

impl SupervisorsConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
        let supervisors_port = match lookup("SUPERVISORS_PORT") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid SUPERVISORS_PORT: {v}"))?,
            None => 3120,
        };
        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse().map_err(|e: String| anyhow!(e))?,
            None => LogFormat::default(),
        };
        Ok(Self {
            database_url,
            supervisors_port,
            log_format,
        })
    }
}
