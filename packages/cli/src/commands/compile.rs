use super::{read_template, resolve};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mailgrid_compiler_html::compile_to_html;
use mailgrid_model::TreeStats;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Template file to compile
    pub file: String,

    /// Output file (defaults to the template name with `.html`)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Emit HTML without newlines or indentation
    #[arg(long)]
    pub compact: bool,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.file);
    let document = read_template(&input)?;

    let mut options = config.compile.clone();
    if args.compact {
        options.pretty = false;
    }

    let html = compile_to_html(&document, &options);

    if args.stdout {
        print!("{}", html);
        return Ok(());
    }

    let output_path = output_path(&args, &config, &input, cwd);
    debug!(path = %output_path.display(), bytes = html.len(), "Writing HTML");

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, &html)
        .with_context(|| format!("Cannot write {}", output_path.display()))?;

    let stats = TreeStats::of(&document);
    println!(
        "  {} {} → {} ({} sections, {} rows, {} components)",
        "✓".green(),
        args.file,
        output_path.display(),
        stats.sections,
        stats.rows,
        stats.components
    );

    Ok(())
}

fn output_path(args: &CompileArgs, config: &Config, input: &Path, cwd: &str) -> PathBuf {
    if let Some(output) = &args.output {
        return resolve(cwd, output);
    }

    let file_name = input.with_extension("html");
    let file_name = file_name.file_name().unwrap_or_default();

    match config.get_out_dir(cwd) {
        Some(dir) => dir.join(file_name),
        None => input.with_extension("html"),
    }
}
