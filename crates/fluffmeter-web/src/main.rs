use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use fluffmeter_core::{OpenAiClient, Scorer, ScorerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod template;

use routes::{router, AppState};

/// Web front end for the corporate-fluff scorer.
#[derive(Debug, Parser)]
#[command(name = "fluffmeter", version, about)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// API key for the LLM provider.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the chat-completions API.
    #[arg(long, env = "FLUFFMETER_API_BASE")]
    api_base: Option<String>,

    /// Model identifier.
    #[arg(long, env = "FLUFFMETER_MODEL")]
    model: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "FLUFFMETER_TIMEOUT")]
    timeout: Option<u64>,
}

impl Cli {
    fn scorer_config(&self) -> ScorerConfig {
        let mut config = ScorerConfig::default();
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(base) = &self.api_base {
            config = config.with_api_base(base);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.scorer_config();

    let client = Arc::new(OpenAiClient::new(config.clone())?);
    let scorer = Scorer::new(config.clone(), client);
    let app = router(AppState { scorer });

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    info!(addr = %cli.bind, model = %config.model, "fluffmeter listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
