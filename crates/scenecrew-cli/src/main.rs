//! Scene breakdown CLI binary.
//!
//! Takes a single topic argument and prints the generation result as JSON
//! to stdout. All diagnostics go to stderr so stdout stays machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scenecrew_llm::{generate_scene_breakdown, OpenAiClient};
use scenecrew_models::{ErrorResponse, GenerateResponse};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Log to stderr; default to warn so stdout stays clean JSON
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(env_filter)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: scenecrew <topic>");
        std::process::exit(1);
    }
    let topic = &args[1];

    println!("{}", run(topic).await);
}

/// Generate a breakdown and render it as the JSON envelope.
///
/// Failures (missing credential, API errors) become the uniform
/// `{status:"error", message}` payload rather than a nonzero exit.
async fn run(topic: &str) -> String {
    let result = match OpenAiClient::from_env() {
        Ok(client) => generate_scene_breakdown(&client, topic).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(breakdown) => {
            serde_json::to_string_pretty(&GenerateResponse::from_breakdown(breakdown))
                .expect("response is serializable")
        }
        Err(e) => serde_json::to_string_pretty(&ErrorResponse::new(e.to_string()))
            .expect("error envelope is serializable"),
    }
}
