// mood_sense - one-shot mood detection CLI
// Reads a single data-URI image payload and emits one JSON mood record on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use mood_sense::{detect_mood, EngineClient, EngineConfig, MoodError};

#[derive(Parser)]
#[command(
    name = "mood_sense",
    version,
    about = "Mood detection from a still image via the face-engine daemon"
)]
struct Args {
    /// Image payload as a data URI (`<tag>,<base64 body>`); read from stdin when omitted
    image: Option<String>,

    /// Unix socket path of the face-engine daemon
    #[arg(long, default_value = "/tmp/face_engine.sock")]
    socket_path: String,

    /// Face detector backend the engine should use
    #[arg(long, default_value = "ssd")]
    detector_backend: String,

    /// Per-request engine timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries exactly one machine-readable record
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let payload = match args.image {
        Some(payload) => payload,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            buf
        }
    };
    let payload = payload.trim();

    // The only fatal condition: nothing to work on at all
    if payload.is_empty() {
        eprintln!(
            "{}",
            serde_json::json!({
                "error": MoodError::NoInput.to_string(),
                "usage": "mood_sense <image_data_uri> (or pipe the payload on stdin)",
            })
        );
        std::process::exit(1);
    }

    let analyzer = EngineClient::new(EngineConfig {
        socket_path: args.socket_path,
        detector_backend: args.detector_backend,
        timeout: Duration::from_millis(args.timeout_ms),
    });

    let result = detect_mood(payload, &analyzer).await;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
