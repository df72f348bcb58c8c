//! Command-line presentation layer.
//!
//! Parses arguments, runs the formatter, and renders the structured results
//! as status lines or JSON on stdout. Diagnostics go through `tracing`.

pub mod commands;

use std::fmt::Display;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DirArgs, FileArgs};
use ereflow::services::naming::OutputTarget;
use ereflow::services::{batch, pipeline};
use ereflow::Error;
use serde::Serialize;

/// Reflow plain-text books for a small e-reader display.
#[derive(Parser, Debug)]
#[command(name = "ereflow", version, about)]
pub struct Cli {
    /// What to format
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON instead of status lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Log per-file diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Dispatch to the selected command.
    pub fn run(self) -> Result<()> {
        let output = Output { json: self.json };
        match self.command {
            Commands::File(args) => run_file(args, output),
            Commands::Dir(args) => run_dir(args, output),
        }
    }
}

/// Renders results in the format picked on the command line.
#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize + Display>(self, value: &T) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{value}");
        }
        Ok(())
    }

    fn emit_error(self, error: &Error) -> Result<()> {
        if self.json {
            let body = serde_json::json!({ "status": "error", "message": error.to_string() });
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            println!("✗ Error: {error}");
        }
        Ok(())
    }
}

fn run_file(args: FileArgs, output: Output) -> Result<()> {
    let FileArgs { input, output: explicit, gutenberg, format } = args;
    let config = format.into_config(gutenberg, false);
    let wrapper = config.wrapper()?;

    let target = explicit.map_or(OutputTarget::Adjacent, OutputTarget::Explicit);
    let outcome = pipeline::process_file(&input, &target, &config, wrapper);
    output.emit(&outcome)
}

fn run_dir(args: DirArgs, output: Output) -> Result<()> {
    let DirArgs { input_dir, output_dir, gutenberg, parallel, format } = args;
    let config = format.into_config(gutenberg, parallel);

    tracing::debug!("Formatting {} into {}", input_dir.display(), output_dir.display());

    match batch::format_directory(&input_dir, &output_dir, &config) {
        Ok(report) => output.emit(&report),
        Err(e @ Error::Config { .. }) => Err(e.into()),
        Err(e) => output.emit_error(&e),
    }
}
