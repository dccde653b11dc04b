// Document analysis engine: ATS resume scoring and AI-authorship detection.
// Every stage is a pure function of its input text. Nothing here performs I/O;
// handlers run the CPU-bound work inside tokio::task::spawn_blocking.

pub mod ats;
pub mod detector;
pub mod handlers;
pub mod patterns;
pub mod recommendations;
pub mod rules;
pub mod signals;
pub mod validation;

use thiserror::Error;

pub use ats::{AtsScorer, RuleBasedAtsScorer, ScoreReport};
pub use detector::{AuthorshipDetector, ClassificationResult, PatternDetector};
pub use rules::ScoringRules;

/// Errors surfaced by the analysis layer.
///
/// The scorers themselves never fail on string input; these come from
/// validation before the core runs, or from the blocking task it runs on.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{field} exceeds {limit} characters (got {actual})")]
    InputTooLarge {
        field: &'static str,
        limit: usize,
        actual: usize,
    },

    #[error("Internal compute error: {0}")]
    InternalCompute(String),
}

/// Runs CPU-bound analysis off the async executor.
///
/// A panic inside `f` surfaces as `InternalCompute`; it is a defect, never retried.
pub async fn run_blocking<T, F>(f: F) -> Result<T, AnalysisError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AnalysisError::InternalCompute(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_blocking_returns_value() {
        assert_eq!(run_blocking(|| 2 + 2).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_run_blocking_maps_panic_to_compute_error() {
        let err = run_blocking(|| -> u32 { panic!("scorer bug") }).await.unwrap_err();
        assert!(matches!(err, AnalysisError::InternalCompute(_)));
    }
}
