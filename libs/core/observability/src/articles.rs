//! Article generation and storage metrics.

use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Article metrics recorder
pub struct ArticleMetrics;

impl ArticleMetrics {
    /// Record one generator call. `mode` is `batch` or `single`,
    /// `outcome` is `success` or `failure`.
    pub fn record_generation(mode: &'static str, outcome: &'static str, elapsed: Duration) {
        counter!("article_generations_total", "mode" => mode, "outcome" => outcome).increment(1);
        histogram!("article_generation_duration_seconds", "mode" => mode)
            .record(elapsed.as_secs_f64());

        tracing::debug!(
            mode = mode,
            outcome = outcome,
            duration_ms = elapsed.as_millis() as u64,
            "Recorded article generation"
        );
    }

    pub fn record_lookup(found: bool) {
        let outcome = if found { "hit" } else { "miss" };
        counter!("article_lookups_total", "outcome" => outcome).increment(1);
    }

    /// Set the number of articles currently stored
    pub fn set_stored_articles(count: usize) {
        gauge!("articles_stored").set(count as f64);
    }
}
