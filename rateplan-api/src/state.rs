use std::sync::Arc;
use std::time::Duration;

use rateplan_core::{CoreResult, FeedRepository};
use rateplan_forecast::{DemandForecaster, HeuristicForecaster};
use rateplan_rules::{build_rules, RuleEngine};
use rateplan_store::{Config, InMemoryFeeds};

use crate::quote::QuoteService;

#[derive(Clone)]
pub struct AppState {
    pub feeds: Arc<dyn FeedRepository>,
    pub quotes: Arc<QuoteService>,
    pub request_timeout: Duration,
}

impl AppState {
    /// Seeded in-memory feeds, the heuristic forecaster and the configured rule set.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let feeds: Arc<dyn FeedRepository> = Arc::new(InMemoryFeeds::from_settings(&config.feeds)?);
        Ok(Self::with_parts(
            feeds,
            Arc::new(HeuristicForecaster::new()),
            config,
        ))
    }

    /// Same wiring with caller-supplied feeds and forecaster.
    pub fn with_parts(
        feeds: Arc<dyn FeedRepository>,
        forecaster: Arc<dyn DemandForecaster>,
        config: &Config,
    ) -> Self {
        let engine = RuleEngine::new(build_rules(&config.pricing));
        let quotes = QuoteService::new(
            feeds.clone(),
            forecaster,
            engine,
            config.feeds.fallback_base_rate,
        );

        Self {
            feeds,
            quotes: Arc::new(quotes),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        }
    }
}
