use std::sync::Arc;

use crate::analysis::{
    AtsScorer, AuthorshipDetector, PatternDetector, RuleBasedAtsScorer, ScoringRules,
};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ATS scorer. Default: RuleBasedAtsScorer.
    pub ats_scorer: Arc<dyn AtsScorer>,
    /// Pluggable authorship detector. Default: PatternDetector.
    pub detector: Arc<dyn AuthorshipDetector>,
}

impl AppState {
    pub fn new(config: Config, rules: ScoringRules) -> Self {
        Self {
            config,
            ats_scorer: Arc::new(RuleBasedAtsScorer::new(rules.ats)),
            detector: Arc::new(PatternDetector::new(rules.detector)),
        }
    }
}
