//! corpus-builder CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use corpus_builder::report::{
    format_generation_text, format_plan_text, format_verification_text, to_json,
};
use corpus_builder::runner::{run_generate, run_plan, run_verify};
use corpus_builder::{Cli, Commands, CorpusError, OutputFormat, VerificationReport};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err((output, e)) => {
            if let Some(output) = output {
                print!("{}", output);
            }
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr so stdout stays clean for summaries
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("corpus_builder={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Runs the selected command. On failure, returns any partial output worth
/// printing together with the error.
fn run(cli: &Cli) -> Result<String, (Option<String>, CorpusError)> {
    let config = cli.resolve_config().map_err(|e| (None, e))?;

    match &cli.command {
        Commands::Generate(_) => {
            let summary = run_generate(&config, cli.progress).map_err(|e| (None, e))?;
            match cli.format {
                OutputFormat::Text => Ok(format_generation_text(&summary)),
                OutputFormat::Json => to_json(&summary).map(with_newline).map_err(|e| (None, e)),
            }
        }
        Commands::Plan(_) => {
            let stats = run_plan(&config).map_err(|e| (None, e))?;
            match cli.format {
                OutputFormat::Text => Ok(format_plan_text(&stats)),
                OutputFormat::Json => to_json(&stats).map(with_newline).map_err(|e| (None, e)),
            }
        }
        Commands::Verify(_) => {
            let render = |report: &VerificationReport| match cli.format {
                OutputFormat::Text => Ok(format_verification_text(report)),
                OutputFormat::Json => to_json(report).map(with_newline),
            };
            match run_verify(&config) {
                Ok(report) => render(&report).map_err(|e| (None, e)),
                Err((report, err)) => Err((render(&report).ok(), err)),
            }
        }
    }
}

fn with_newline(mut s: String) -> String {
    s.push('\n');
    s
}
