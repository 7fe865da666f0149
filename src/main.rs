//! nano-banana gateway binary

#![allow(missing_docs)]

use clap::Parser;
use nano_banana::server::{self, builder::DEFAULT_CONFIG_PATH};
use nano_banana::utils::logging::{LogFormat, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "nano-banana", version, about = "AI image editing gateway")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Emit JSON logs instead of plain text
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Before clap and logging, so .env can supply RUST_LOG and GATEWAY_CONFIG
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::from_env()
    };
    init_logging(format);

    match server::run_server(&cli.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
