use std::sync::Arc;

use crate::config::Config;
use crate::sentiment::{LexiconScorer, SentimentScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable sentiment scorer. Default: LexiconScorer with the configured match policy.
    pub sentiment: Arc<dyn SentimentScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sentiment = Arc::new(LexiconScorer::new(config.match_policy));
        Self { config, sentiment }
    }
}
