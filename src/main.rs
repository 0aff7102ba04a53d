use anyhow::Result;
use clap::Parser;
use gemini_chatbot::chat::ChatService;
use gemini_chatbot::gemini::GeminiClient;
use gemini_chatbot::models::Config;
use gemini_chatbot::server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gemini-chatbot")]
#[command(about = "Chat backend bridging a web UI to the Gemini API")]
struct CliArgs {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_chatbot=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let config = Config::from_env()?;

    info!("Using Gemini model {}", config.model);

    let client = GeminiClient::new(config.api_key, config.model, config.base_url);
    let service = Arc::new(ChatService::new(Box::new(client)));
    let app = server::router(service);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Listening on {}", args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
