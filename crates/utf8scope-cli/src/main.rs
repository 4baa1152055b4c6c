mod cli;
mod input;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::{Level, debug, warn};
use utf8scope::Analysis;

use crate::{
    cli::{Cli, Format},
    input::Source,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = cli.source();
    if source == Source::Stdin && io::stdin().is_terminal() {
        eprintln!("Enter a UTF-8 encoded string:");
    }
    let bytes = input::read(&source, cli.max_bytes)?;

    let options = cli.analysis_options();
    debug!(validation = ?options.codec.validation, "analyzing {} bytes", bytes.len());
    let analysis = Analysis::run(&bytes, &options);
    if analysis.codepoint_count.is_none() {
        warn!("input is not well-formed UTF-8; per-codepoint results skipped");
    }

    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Text => write!(stdout, "{analysis}")?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut stdout, &analysis)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
