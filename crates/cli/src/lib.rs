pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "beacon",
    about = "Beacon operator CLI",
    long_about = "Inspect configuration, list assistants, and run one-off assistant invocations.",
    after_help = "Examples:\n  beacon assistants\n  beacon invoke --assistant domain-analysis --payload '{\"domain\": \"example.com\"}'\n  beacon invoke --assistant content --sample\n  beacon config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List the registered assistants")]
    Assistants,
    #[command(about = "Run one assistant invocation and print the result envelope")]
    Invoke {
        #[arg(long, help = "Assistant slug (see `beacon assistants`)")]
        assistant: String,
        #[arg(long, help = "Inline JSON payload", conflicts_with_all = ["payload_file", "sample"])]
        payload: Option<String>,
        #[arg(long, help = "Path to a JSON payload file", conflicts_with = "sample")]
        payload_file: Option<PathBuf>,
        #[arg(long, help = "Use the assistant's built-in sample payload")]
        sample: bool,
    },
    #[command(about = "Print the effective configuration with secrets redacted")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Assistants => commands::assistants(),
        Command::Invoke { assistant, payload, payload_file, sample } => {
            commands::invoke(&assistant, payload.as_deref(), payload_file.as_deref(), sample)
        }
        Command::Config => commands::config(),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
