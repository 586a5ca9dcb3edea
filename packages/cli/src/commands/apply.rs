use super::{read_template, resolve, write_template};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mailgrid_editor::{EditorError, EditorState, Mutation};
use std::fs;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Template file to edit
    pub file: String,

    /// JSON array of mutation requests
    pub mutations: String,

    /// Write the result here instead of overwriting the template
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.file);
    let document = read_template(&input)?;

    let requests_path = resolve(cwd, &args.mutations);
    let source = fs::read_to_string(&requests_path)
        .with_context(|| format!("Cannot read {}", requests_path.display()))?;
    let mutations: Vec<Mutation> = serde_json::from_str(&source)
        .with_context(|| format!("Invalid mutation list {}", requests_path.display()))?;

    println!(
        "{}",
        format!("✏️  Applying {} mutations...", mutations.len()).bright_blue().bold()
    );

    let mut state = EditorState::new(document, config.compile);
    if let Err(err) = state.apply_batch(&mutations) {
        if let EditorError::Batch { index, .. } = &err {
            eprintln!(
                "  {} #{} {}",
                "✗".red(),
                index,
                mutations[*index].name().bright_white()
            );
        }
        return Err(err.into());
    }

    for mutation in &mutations {
        println!("  {} {}", "✓".green(), mutation.name());
    }

    let output = match &args.output {
        Some(output) => resolve(cwd, output),
        None => input,
    };
    write_template(&output, state.document())?;

    println!();
    println!("{} Wrote {}", "✅".green(), output.display());
    Ok(())
}
