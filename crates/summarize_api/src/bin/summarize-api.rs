use clap::Parser;
use summarize_api::{
    huggingface::HuggingFaceClient, tracing::init_tracing_subscriber, SummarizeApiBuilder,
};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(
    name = "summarize-api",
    version,
    about = "An API endpoint to summarize text using the BART model"
)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Summarization model served by the inference API
    #[arg(long, env = "SUMMARIZER_MODEL", default_value = HuggingFaceClient::DEFAULT_MODEL)]
    model: String,

    /// Hugging Face API token
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    hf_api_token: Option<String>,

    /// Base URL of the inference API
    #[arg(long, env = "HF_INFERENCE_URL", default_value = HuggingFaceClient::DEFAULT_BASE_URL)]
    inference_url: String,

    /// Disable permissive CORS headers
    #[arg(long)]
    no_cors: bool,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    // the engine is built once and shared by every request
    let mut engine = HuggingFaceClient::new(&cli.model).with_base_url(&cli.inference_url);
    if let Some(token) = cli.hf_api_token {
        engine = engine.with_api_token(token);
    } else {
        tracing::warn!("HF_API_TOKEN not set, inference requests will be anonymous");
    }

    let api = SummarizeApiBuilder::new()
        .engine(engine)
        .cors(!cli.no_cors)
        .build();

    let listener = TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    api.serve(listener, shutdown_signal()).await
}
