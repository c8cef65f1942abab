//! Corporate-fluff scoring engine.
//!
//! Rates a piece of text for "corporate fluff" on a 0.0–1.0 scale by asking
//! an LLM judge, averaging several concurrent samples to damp sampling
//! variance, and mapping the mean onto a canned verdict.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use fluffmeter_core::{OpenAiClient, Scorer, ScorerConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ScorerConfig::from_env();
//! let client = Arc::new(OpenAiClient::new(config.clone())?);
//! let scorer = Scorer::new(config, client);
//!
//! let analysis = scorer.analyze_text("Thrilled to unlock new momentum!").await?;
//! println!("{:.2}: {}", analysis.score, analysis.verdict);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `OPENAI_API_KEY` | API credential |
//! | `FLUFFMETER_API_BASE` | API base URL (default: `https://api.openai.com/v1`) |
//! | `FLUFFMETER_MODEL` | Model id (default: `gpt-4o-mini`) |
//! | `FLUFFMETER_TIMEOUT` | Request timeout in seconds (default: 30) |

pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod scorer;

// Re-export main types
pub use config::ScorerConfig;
pub use error::{ScoreError, ScoreResult};
pub use prompt::{build_prompt, PROMPT_VERSION};
pub use provider::{LlmClient, LlmResponse, OpenAiClient};
pub use scorer::{verdict_text, Analysis, Scorer};
