//! Preview binary - runs one translation and prints the payload the host
//! would receive, without needing a Bob install.
//!
//! Usage:
//!   cargo run -- 你好                          # auto-detect, translate to zh-Hans
//!   cargo run -- --from en --to ja Hello       # explicit pair
//!   cargo run -- --list-languages              # print supported codes
//!
//! Required environment variables:
//! - ZHIPU_API_KEY
//!
//! Optional:
//! - ZHIPU_MODEL (defaults to glm-4-flash)
//! - ZHIPU_CUSTOM_PROMPT ({text}/{from}/{to} placeholders)
//! - ZHIPU_TEMPERATURE (defaults to 0.1)
//! - ZHIPU_TIMEOUT_SECS (defaults to 10)
//! - ZHIPU_API_BASE_URL (defaults to the public endpoint)

use anyhow::{Context, Result};
use tracing::info;

use bob_zhipu_translator::{support_languages, translate, PluginConfig, TranslationRequest};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bob_zhipu_translator=info".parse()?),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--list-languages") {
        for code in support_languages() {
            println!("{}", code);
        }
        return Ok(());
    }

    let mut from = "auto".to_string();
    let mut to = "zh-Hans".to_string();
    let mut text_parts: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--from" => {
                i += 1;
                from = args
                    .get(i)
                    .cloned()
                    .context("--from requires a language code")?;
            }
            "--to" => {
                i += 1;
                to = args
                    .get(i)
                    .cloned()
                    .context("--to requires a language code")?;
            }
            other => text_parts.push(other.to_string()),
        }
        i += 1;
    }

    let text = text_parts.join(" ");
    if text.is_empty() {
        anyhow::bail!("no text given; usage: bob-zhipu-translator [--from CODE] [--to CODE] TEXT");
    }

    let config = PluginConfig::from_env();
    let client = reqwest::Client::new();

    let request = TranslationRequest { text, from, to };
    info!(
        "Translating {} chars ({} -> {}) with {}",
        request.text.chars().count(),
        request.from,
        request.to,
        config.model
    );

    match translate(&client, &config, &request).await {
        Ok(result) => {
            println!();
            println!("--- Result Payload ---");
            println!();
            println!("{}", serde_json::to_string_pretty(&result)?);
            println!();
            info!("Translation complete");
            Ok(())
        }
        Err(err) => {
            println!();
            println!("--- Error Payload ---");
            println!();
            println!("{}", serde_json::to_string_pretty(&err.to_payload())?);
            println!();
            anyhow::bail!("translation failed");
        }
    }
}
