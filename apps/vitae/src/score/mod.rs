//! Resume Scoring — pluggable, trait-based scorer over the aggregate.
//!
//! Default: `HeuristicScorer` (pure-Rust, deterministic, fully testable).
//! Optional: `RemoteScorer` (HTTP collaborator, configured by endpoint URL).
//!
//! `ResumeApp` holds an `Arc<dyn ResumeScorer>`, picked at bootstrap.

pub mod heuristic;
pub mod improve;
pub mod remote;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::warn;

use crate::errors::AppError;
use crate::models::ResumeData;

pub use heuristic::HeuristicScorer;
pub use improve::improve_bullet_points;
pub use remote::RemoteScorer;

/// Fixed delay between automatic retries after a failed scoring call.
pub const SCORE_RETRY_DELAY: Duration = Duration::from_secs(10);

/// The scoring collaborator's response contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// 0–100 completeness/quality score.
    pub score: u32,
    /// Section labels the resume is missing points for.
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// The scorer seam. Implement this to swap backends without touching callers.
#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(&self, resume: &ResumeData) -> Result<ScoreReport, AppError>;
}

/// Scores with automatic fixed-delay retry until success or cancellation.
///
/// `cancelled` is flipped (or dropped) when the consuming view tears down;
/// a torn-down consumer never receives a late report. Each failure is logged
/// with its classification so the shell can show network-vs-server messaging
/// for the attempt in progress.
pub async fn score_with_retry(
    scorer: &dyn ResumeScorer,
    resume: &ResumeData,
    mut cancelled: watch::Receiver<bool>,
) -> Option<ScoreReport> {
    loop {
        if *cancelled.borrow() {
            return None;
        }

        match scorer.score(resume).await {
            Ok(report) => return Some(report),
            Err(err) => {
                warn!(code = err.code(), "scoring failed, retrying: {err}");
                tokio::select! {
                    _ = tokio::time::sleep(SCORE_RETRY_DELAY) => {}
                    // Both a flip to true and a dropped sender end the loop.
                    changed = cancelled.changed() => {
                        if changed.is_err() || *cancelled.borrow() {
                            return None;
                        }
                    }
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails `failures` times, then succeeds.
    struct FlakyScorer {
        failures: u32,
        calls: AtomicU32,
    }

    #[async_trait]
    impl ResumeScorer for FlakyScorer {
        async fn score(&self, _resume: &ResumeData) -> Result<ScoreReport, AppError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(AppError::Network("connection refused".to_string()))
            } else {
                Ok(ScoreReport {
                    score: 55,
                    missing: vec![],
                    feedback: None,
                })
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_until_success() {
        let scorer = FlakyScorer {
            failures: 2,
            calls: AtomicU32::new(0),
        };
        let (_tx, rx) = watch::channel(false);

        let report = score_with_retry(&scorer, &ResumeData::initial(), rx)
            .await
            .expect("should eventually succeed");
        assert_eq!(report.score, 55);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_ends_retry_loop() {
        let scorer = FlakyScorer {
            failures: u32::MAX,
            calls: AtomicU32::new(0),
        };
        let (tx, rx) = watch::channel(false);

        let resume = ResumeData::initial();
        let handle = tokio::spawn(async move {
            score_with_retry(&scorer, &resume, rx).await
        });
        tx.send(true).unwrap();

        assert_eq!(handle.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_already_cancelled_returns_immediately() {
        let scorer = FlakyScorer {
            failures: 0,
            calls: AtomicU32::new(0),
        };
        let (tx, rx) = watch::channel(true);
        drop(tx);

        let report = score_with_retry(&scorer, &ResumeData::initial(), rx).await;
        assert_eq!(report, None);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_score_report_tolerates_missing_optionals() {
        let report: ScoreReport = serde_json::from_str("{\"score\": 70}").unwrap();
        assert_eq!(report.score, 70);
        assert!(report.missing.is_empty());
        assert!(report.feedback.is_none());
    }
}
