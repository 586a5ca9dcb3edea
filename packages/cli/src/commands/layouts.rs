use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailgrid_model::{ComponentKind, PRESETS};

#[derive(Debug, Args)]
pub struct LayoutsArgs {
    /// Also list the component palette
    #[arg(long)]
    pub components: bool,
}

pub fn layouts(args: LayoutsArgs) -> Result<()> {
    println!("{}", "Row layouts".bright_blue().bold());
    for preset in PRESETS {
        let labels: Vec<_> = preset.columns.iter().map(|(_, label)| *label).collect();
        println!(
            "  {:<14} {}  {}",
            preset.name.bright_white(),
            preset.preview(),
            labels.join(" / ").dimmed()
        );
    }

    if args.components {
        println!();
        println!("{}", "Components".bright_blue().bold());
        for kind in ComponentKind::ALL.iter() {
            println!("  {:<14} {}", kind.name().bright_white(), kind.title());
        }
    }

    Ok(())
}
