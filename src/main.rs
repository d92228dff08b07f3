use anyhow::Result;
use std::path::PathBuf;
use ticker_digest::config::Config;
use ticker_digest::pipeline;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config.toml";

/// `--config <path>` or `--config=<path>`, else `config.toml`.
fn config_path(args: &[String]) -> PathBuf {
    args.iter()
        .enumerate()
        .find_map(|(i, arg)| {
            if arg == "--config" {
                args.get(i + 1).cloned()
            } else {
                arg.strip_prefix("--config=").map(str::to_string)
            }
        })
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ticker_digest=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load_or_default(&config_path(&args))?;

    // Load saved keys from .env (real env vars take precedence)
    Config::load_env_file();
    let creds = Config::quote_credentials();

    pipeline::run(&creds, &config).await?;

    Ok(())
}
