//! craft-genie - craft video script generator
//!
//! Reads a comma-separated list of craft ideas and prints one short video
//! script per idea.

#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use craft_genie::config::OutputFormat;
use craft_genie::core::providers::gemini::create_gemini_provider;
use craft_genie::core::script::{RunEvent, ScriptGenerator};
use craft_genie::render::{render, write_output};
use craft_genie::{Config, GenieError, build_info, init_logging};
use once_cell::sync::Lazy;
use tokio::io::AsyncReadExt;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::debug;

static LONG_VERSION: Lazy<String> = Lazy::new(|| build_info().long_version());

const BUSY_MESSAGE: &str = "Crafting your video script(s)...";

#[derive(Debug, Parser)]
#[command(name = "craft-genie", version, long_version = LONG_VERSION.as_str())]
#[command(about = "Generate short craft video scripts with Gemini")]
struct Args {
    /// Craft ideas, comma-separated (e.g. "macrame plant hanger, paper lanterns").
    /// Separate words are joined with spaces, so only commas split ideas.
    #[arg(value_name = "IDEAS", conflicts_with = "stdin")]
    ideas: Vec<String>,

    /// Read the craft ideas from stdin
    #[arg(long)]
    stdin: bool,

    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Gemini model name
    #[arg(long)]
    model: Option<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the Gemini base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Output format: markdown or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = load_config(&args).await?;
    init_logging(&config.logging)?;
    debug!(model = %config.gemini.model, "Configuration loaded");

    let input = read_input(&args).await?;

    let provider = create_gemini_provider(config.gemini.clone())?;
    let generator = ScriptGenerator::new(Arc::new(provider));
    let progress = spawn_progress_printer(generator.subscribe());

    let result = generator.run(&input).await;
    // The printer stops on Completed or Rejected
    let _ = progress.await;

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(GenieError::EmptyInput) => {
            eprintln!("{}", GenieError::EmptyInput);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(message) = &outcome.error_message {
        eprintln!("{}", message);
    }

    let rendered = render(&outcome, config.output.format)?;
    write_output(&rendered, config.output.path.as_deref()).await?;
    if let Some(path) = &config.output.path {
        eprintln!("Saved {} script(s) to {}", outcome.scripts.len(), path.display());
    }

    if outcome.scripts.is_empty() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// File, then environment, then command-line flags
async fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    config = config.merge(Config::from_env()?);

    if let Some(model) = &args.model {
        config.gemini.model = model.clone();
    }
    if let Some(api_key) = &args.api_key {
        config.gemini.api_key = Some(api_key.clone());
    }
    if let Some(base_url) = &args.base_url {
        config.gemini.base_url = base_url.clone();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(path) = &args.output {
        config.output.path = Some(path.clone());
    }
    match args.verbose {
        0 => {}
        1 => config.logging.level = "debug".to_string(),
        _ => config.logging.level = "trace".to_string(),
    }

    config.validate()?;
    Ok(config)
}

async fn read_input(args: &Args) -> anyhow::Result<String> {
    if args.stdin {
        let mut input = String::new();
        tokio::io::stdin()
            .read_to_string(&mut input)
            .await
            .context("reading craft ideas from stdin")?;
        return Ok(input);
    }
    Ok(args.ideas.join(" "))
}

fn spawn_progress_printer(mut events: broadcast::Receiver<RunEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut total = 0;
        loop {
            match events.recv().await {
                Ok(RunEvent::Started { total: n }) => {
                    total = n;
                    eprintln!("{}", BUSY_MESSAGE);
                }
                Ok(RunEvent::ItemSucceeded { index, script }) => {
                    eprintln!("  [{}/{}] done: {}", index + 1, total, script.craft_type);
                }
                Ok(RunEvent::ItemFailed { index, failure }) => {
                    eprintln!("  [{}/{}] failed: {}", index + 1, total, failure.craft_type);
                }
                Ok(RunEvent::Completed) | Ok(RunEvent::Rejected { .. }) => break,
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    })
}
