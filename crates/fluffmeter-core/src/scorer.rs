//! Fluff scoring: concurrent sampling, averaging, and verdict mapping.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::config::ScorerConfig;
use crate::error::{ScoreError, ScoreResult};
use crate::prompt::build_prompt;
use crate::provider::LlmClient;

/// Outcome of analyzing one piece of text. Ephemeral, one per request.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Averaged fluff score in [0.0, 1.0].
    pub score: f64,
    /// Canned verdict for the score's bucket.
    pub verdict: &'static str,
}

/// Scoring engine. Holds the config and a provider; no other state.
#[derive(Clone)]
pub struct Scorer {
    config: ScorerConfig,
    client: Arc<dyn LlmClient>,
}

impl Scorer {
    pub fn new(config: ScorerConfig, client: Arc<dyn LlmClient>) -> Self {
        Self { config, client }
    }

    /// Score `text` by averaging `config.samples` independent model calls.
    ///
    /// All calls run concurrently against the same prompt. Any call failing
    /// (network, provider, unparsable content) fails the whole operation;
    /// there is no partial average.
    pub async fn calculate_bs_score(&self, text: &str) -> ScoreResult<f64> {
        let prompt = build_prompt(text);
        let samples = self.config.samples.max(1) as usize;

        debug!(
            provider = self.client.provider_name(),
            samples, "scoring fan-out"
        );

        let calls = (0..samples).map(|_| {
            let client = Arc::clone(&self.client);
            let prompt = prompt.clone();
            async move {
                let resp = client.complete(&prompt).await?;
                parse_score(&resp.text)
            }
        });

        let scores = try_join_all(calls).await?;
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;

        debug!(score = mean, "scoring complete");
        Ok(mean)
    }

    /// Compute the averaged score and its verdict. The only contract the
    /// web layer depends on.
    pub async fn analyze_text(&self, text: &str) -> ScoreResult<Analysis> {
        let score = self.calculate_bs_score(text).await?;
        Ok(Analysis {
            score,
            verdict: verdict_text(score),
        })
    }
}

/// Parse one model completion as a bare JSON number, clamped to [0.0, 1.0].
fn parse_score(content: &str) -> ScoreResult<f64> {
    let trimmed = content.trim();
    let value: f64 =
        serde_json::from_str(trimmed).map_err(|_| ScoreError::NonNumericScore {
            content: content.to_string(),
        })?;
    Ok(value.clamp(0.0, 1.0))
}

/// Map a score onto its verdict bucket.
pub fn verdict_text(score: f64) -> &'static str {
    if score < 0.25 {
        "Surprisingly concrete! You're either an actual expert or a very convincing liar."
    } else if score < 0.50 {
        "A bit wobbly, but still mostly tethered to reality."
    } else if score < 0.75 {
        "High-grade fluff. Your LinkedIn game is strong, but your substance-to-jargon ratio is concerning."
    } else {
        "Full cosmic nonsense. This text detached from Earth's gravity a while ago."
    }
}
