use super::{resolve, write_template};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailgrid_model::{Document, TreeStats};

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template file to create
    #[arg(default_value = "template.json")]
    pub file: String,

    /// Template name, used to seed node ids
    #[arg(short, long)]
    pub name: Option<String>,

    /// Start from an empty template instead of the starter layout
    #[arg(long)]
    pub blank: bool,

    /// Force overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let path = resolve(cwd, &args.file);

    if path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), args.file.bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let name = args.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_string())
    });

    let document = if args.blank {
        Document::new(&name)
    } else {
        Document::starter(&name)
    };

    write_template(&path, &document)?;

    let stats = TreeStats::of(&document);
    println!(
        "  {} Created {} ({} sections, {} components)",
        "✓".green(),
        args.file,
        stats.sections,
        stats.components
    );
    println!();
    println!("Next steps:");
    println!("  {} {}", "mailgrid compile".bright_cyan(), args.file);

    Ok(())
}
