//! The single form route: GET renders the empty form, POST scores the
//! submitted text and re-renders the page with the outcome.

use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use fluffmeter_core::Scorer;
use serde::Deserialize;
use tracing::warn;

use crate::template::{render_page, PageView};

/// Shared per-process state.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Scorer,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub text: String,
}

pub async fn index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Html<String> {
    let mut view = PageView {
        text: form.text,
        ..PageView::default()
    };

    if !view.text.is_empty() {
        match state.scorer.analyze_text(&view.text).await {
            Ok(analysis) => {
                view.score = Some(format!("{:.1}", analysis.score * 100.0));
                view.verdict = Some(analysis.verdict);
            }
            Err(e) => {
                warn!(error = %e, "analysis failed");
                view.score = Some(format!("Error: {}", e));
            }
        }
    }

    Html(render_page(&view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fluffmeter_core::{
        LlmClient, LlmResponse, ScoreError, ScoreResult, ScorerConfig,
    };
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct MockLlmClient {
        responses: std::sync::Mutex<Vec<ScoreResult<String>>>,
        calls: AtomicU32,
    }

    impl MockLlmClient {
        fn returning(scores: Vec<&str>) -> Arc<Self> {
            Arc::new(Self {
                responses: std::sync::Mutex::new(
                    scores.into_iter().map(|s| Ok(s.to_string())).collect(),
                ),
                calls: AtomicU32::new(0),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            let err = || {
                Err(ScoreError::Network {
                    message: message.to_string(),
                })
            };
            Arc::new(Self {
                responses: std::sync::Mutex::new(vec![err(), err(), err()]),
                calls: AtomicU32::new(0),
            })
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, _prompt: &str) -> ScoreResult<LlmResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut resps = self.responses.lock().unwrap();
            if resps.is_empty() {
                return Err(ScoreError::Network {
                    message: "no more mock responses".to_string(),
                });
            }
            resps.remove(0).map(|text| LlmResponse {
                text,
                provider: "mock".to_string(),
                model: "mock".to_string(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }

    fn state_with(client: Arc<MockLlmClient>) -> AppState {
        AppState {
            scorer: Scorer::new(ScorerConfig::default(), client),
        }
    }

    #[tokio::test]
    async fn get_renders_empty_form() {
        let Html(page) = index().await;
        assert!(page.contains(r#"<textarea name="text""#));
        assert!(!page.contains("Fluff score"));
    }

    #[tokio::test]
    async fn post_renders_percentage_and_verdict() {
        let client = MockLlmClient::returning(vec!["0.05", "0.07", "0.06"]);
        let state = state_with(client.clone());
        let form = SubmitForm {
            text: "We reduced latency by 40% via caching".to_string(),
        };

        let Html(page) = submit(State(state), Form(form)).await;

        assert!(page.contains("Fluff score: 6.0%"));
        assert!(page.contains("Surprisingly concrete"));
        assert!(page.contains(">We reduced latency by 40% via caching</textarea>"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn empty_post_performs_no_analysis() {
        let client = MockLlmClient::returning(vec!["0.5", "0.5", "0.5"]);
        let state = state_with(client.clone());
        let form = SubmitForm {
            text: String::new(),
        };

        let Html(page) = submit(State(state), Form(form)).await;

        assert!(!page.contains("Fluff score"));
        assert!(!page.contains("Error:"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn upstream_failure_renders_error_cell() {
        let state = state_with(MockLlmClient::failing("connection refused"));
        let form = SubmitForm {
            text: "shaping the future together".to_string(),
        };

        let Html(page) = submit(State(state), Form(form)).await;

        assert!(page.contains("Error: network error: connection refused"));
        assert!(!page.contains("class=\"verdict\""));
        assert!(page.contains(">shaping the future together</textarea>"));
    }

    #[tokio::test]
    async fn high_fluff_post_gets_the_top_bucket() {
        let client = MockLlmClient::returning(vec!["0.92", "0.95", "0.88"]);
        let state = state_with(client);
        let form = SubmitForm {
            text: "Unlocking new momentum toward excellence".to_string(),
        };

        let Html(page) = submit(State(state), Form(form)).await;

        assert!(page.contains("Fluff score: 91.7%"));
        assert!(page.contains("Full cosmic nonsense"));
    }
}
