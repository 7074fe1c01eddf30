use anyhow::Context;
use clap::{Parser, Subcommand};
use e180r::config::{Config, API_URL_ENV};
use e180r::generate::GenerateClient;
use e180r::logging::{init_stderr_tracing, init_tui_tracing};
use e180r::shutdown::ShutdownHandle;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "e180r",
    version,
    about = "Draft professional replies to incoming email with a generation service"
)]
struct Cli {
    /// Base URL of the generation service (overrides E180R_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a reply without the interactive UI and print it to stdout
    Generate {
        /// Read the email from this file instead of stdin
        #[arg(long, short, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Command::Generate { file }) => {
            init_stderr_tracing();
            load_config(&cli).and_then(|config| run_headless(&config, file.as_deref()))
        }
        None => {
            init_tui_tracing();
            load_config(&cli).and_then(|config| run_interactive(&config))
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?
        .with_base_url_overrides(std::env::var(API_URL_ENV).ok(), cli.api_url.clone());
    config.validate()?;
    tracing::debug!(
        path = %path.display(),
        base_url = %config.api.base_url,
        "Configuration loaded"
    );
    Ok(config)
}

fn run_interactive(config: &Config) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let client = GenerateClient::new(&config.api).context("Failed to build HTTP client")?;
    let shutdown = ShutdownHandle::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;

    e180r::ui::runtime::run(runtime.handle(), client, shutdown)
        .context("Terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(ExitCode::SUCCESS)
}

fn run_headless(config: &Config, file: Option<&std::path::Path>) -> anyhow::Result<ExitCode> {
    let draft = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = GenerateClient::new(&config.api).context("Failed to build HTTP client")?;

    match runtime.block_on(client.generate(&draft)) {
        Ok(response) => {
            println!("{}", response);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::warn!(error = %err.details(), "Generation failed");
            eprintln!("{}", err.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
