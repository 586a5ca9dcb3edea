mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, compile, layouts, new, ApplyArgs, CompileArgs, LayoutsArgs, NewArgs};
use tracing_subscriber::EnvFilter;

/// Mailgrid CLI - Grid-based email template builder
#[derive(Parser, Debug)]
#[command(name = "mailgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new template file
    New(NewArgs),

    /// Compile a template to HTML
    Compile(CompileArgs),

    /// Apply a list of mutation requests to a template
    Apply(ApplyArgs),

    /// List row layout presets
    Layouts(LayoutsArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::New(args) => new(args, &cwd),
                Command::Compile(args) => compile(args, &cwd),
                Command::Apply(args) => apply(args, &cwd),
                Command::Layouts(args) => layouts(args),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
