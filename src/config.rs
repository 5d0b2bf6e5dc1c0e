use serde::Deserialize;
use std::time::Duration;

/// Default upstream API root.
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default name of the environment variable holding the TMDB read token.
pub const DEFAULT_TOKEN_VAR: &str = "TMDB_API_READ_TOKEN";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub tmdb_base_url: String,
    pub tmdb_token_var: String,
    pub tmdb_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("TMDB Base URL: {}", config.tmdb_base_url);
        tracing::debug!("Server Port: {}", config.port);
        match config.tmdb_timeout {
            Some(timeout) => tracing::info!("TMDB request timeout: {:?}", timeout),
            None => tracing::debug!("No TMDB request timeout configured"),
        }

        let token_present = std::env::var(&config.tmdb_token_var)
            .map(|token| !token.is_empty())
            .unwrap_or(false);
        if !token_present {
            tracing::warn!(
                "{} is not set; trending requests will fail until it is provided",
                config.tmdb_token_var
            );
        }

        Ok(config)
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            tmdb_base_url: {
                let url = lookup("TMDB_BASE_URL")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string());
                let url = url.trim().trim_end_matches('/').to_string();
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("TMDB_BASE_URL must start with http:// or https://");
                }
                url
            },
            tmdb_token_var: lookup("TMDB_TOKEN_VAR")
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_TOKEN_VAR.to_string()),
            tmdb_timeout: lookup("TMDB_TIMEOUT_SECS")
                .filter(|s| !s.trim().is_empty())
                .map(|secs| match secs.trim().parse::<u64>() {
                    Ok(n) if n > 0 => Ok(Duration::from_secs(n)),
                    _ => Err(anyhow::anyhow!(
                        "TMDB_TIMEOUT_SECS must be a positive number of seconds"
                    )),
                })
                .transpose()?,
        })
    }
}
