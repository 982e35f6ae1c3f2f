use anyhow::Result;
use clap::{Parser, Subcommand};
use content::Catalog;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the built-in catalog for defects.
    Validate,
    /// Print the built-in catalog as JSON.
    Dump {
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::built_in();

    match cli.command {
        Command::Validate => {
            catalog.validate()?;
            println!(
                "catalog ok: {} case studies, {} decisions, {} skill categories, {} links",
                catalog.case_studies.len(),
                catalog.decisions.len(),
                catalog.skill_categories.len(),
                catalog.contact_links.len(),
            );
        }
        Command::Dump { compact } => {
            let json = if compact {
                serde_json::to_string(&catalog)?
            } else {
                serde_json::to_string_pretty(&catalog)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
