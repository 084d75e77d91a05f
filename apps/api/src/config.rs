use anyhow::{bail, Context, Result};

use crate::sentiment::MatchPolicy;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub match_policy: MatchPolicy,
    pub max_feedback_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            match_policy: MatchPolicy::Substring,
            max_feedback_chars: 10_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let port = lookup("PORT")
            .map(|v| {
                v.trim()
                    .parse::<u16>()
                    .context("PORT must be a valid port number")
            })
            .transpose()?
            .unwrap_or(defaults.port);

        let match_policy = lookup("SENTIMENT_MATCH_POLICY")
            .map(|v| {
                v.parse::<MatchPolicy>()
                    .context("SENTIMENT_MATCH_POLICY must be 'substring' or 'whole_word'")
            })
            .transpose()?
            .unwrap_or(defaults.match_policy);

        let max_feedback_chars = lookup("MAX_FEEDBACK_CHARS")
            .map(|v| {
                v.trim()
                    .parse::<usize>()
                    .context("MAX_FEEDBACK_CHARS must be a positive integer")
            })
            .transpose()?
            .unwrap_or(defaults.max_feedback_chars);
        if max_feedback_chars == 0 {
            bail!("MAX_FEEDBACK_CHARS must be greater than zero");
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            match_policy,
            max_feedback_chars,
        })
    }
}
