use std::process::ExitCode;

use aakeedo_client::{KanjiApiClient, WaniKaniClient};
use aakeedo_config::Config;
use aakeedo_tools::{ToolCatalog, ToolContext, ToolError, WANIKANI_API_TOKEN, definitions};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aakeedo")]
#[command(about = "Kanji lookup and WaniKani profile tools")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every tool with its input schema
    Tools,

    /// Invoke a tool by name
    Call {
        name: String,

        /// Tool argument, repeatable (e.g. --arg kanji_char=水)
        #[arg(long = "arg", value_parser = parse_key_value)]
        args: Vec<(String, String)>,

        /// WaniKani personal access token
        #[arg(long, env = "WANIKANI_API_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so a token in .env is visible to clap
    let config = Config::load();
    let cli = Cli::parse();

    init_logging(cli.json_logs);

    match run(cli.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("aakeedo error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> anyhow::Result<ExitCode> {
    match command {
        Command::Tools => {
            let listing = serde_json::to_string_pretty(&definitions())
                .context("Failed to encode tool definitions")?;
            println!("{listing}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Call { name, args, token } => {
            let catalog = ToolCatalog::new(
                KanjiApiClient::from_config(config)?,
                WaniKaniClient::from_config(config)?,
            );

            let mut context = ToolContext::new();
            if let Some(token) = token {
                context = context.with_secret(WANIKANI_API_TOKEN, token);
            }

            let args: Map<String, Value> = args
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();

            match catalog.invoke(&name, &Value::Object(args), &context).await {
                Ok(payload) => {
                    println!("{payload}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(report(&e)),
            }
        }
    }
}

fn report(error: &ToolError) -> ExitCode {
    eprintln!("{error}");

    match error {
        ToolError::Retryable {
            developer_message,
            additional_prompt_content,
            ..
        } => {
            tracing::debug!("{developer_message}");
            eprintln!("{additional_prompt_content}");
            ExitCode::from(2)
        }
        ToolError::Execution { .. } => ExitCode::FAILURE,
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;

    if key.is_empty() {
        return Err(format!("missing argument name in '{raw}'"));
    }

    Ok((key.to_string(), value.to_string()))
}
