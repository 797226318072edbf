use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::registry::store::PersonRegistry;

#[derive(Args)]
pub struct RegistryArgs {
    #[command(subcommand)]
    pub command: RegistryCommands,
}

#[derive(Subcommand)]
pub enum RegistryCommands {
    /// List all persons in the dataset
    List {
        /// Filter by clan
        #[arg(long)]
        clan: Option<String>,
    },

    /// Show details of a specific person
    Show {
        /// Person identifier
        #[arg(required = true)]
        id: String,
    },

    /// Export the dataset to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,
    },
}

/// Execute registry subcommand
pub fn run(
    args: RegistryArgs,
    registry: &PersonRegistry,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match args.command {
        RegistryCommands::List { clan } => run_list(registry, clan.as_deref(), format, verbose),
        RegistryCommands::Show { id } => run_show(registry, &id, format),
        RegistryCommands::Export { output } => run_export(registry, &output),
    }
}

fn run_list(
    registry: &PersonRegistry,
    clan_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let filtered: Vec<_> = registry
        .persons
        .iter()
        .filter(|p| {
            if let Some(clan) = clan_filter {
                let person_clan = p.clan.as_deref().unwrap_or("").to_lowercase();
                if !person_clan.contains(&clan.to_lowercase()) {
                    return false;
                }
            }
            true
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let id_width = filtered
                .iter()
                .map(|p| p.id.as_str().len())
                .max()
                .unwrap_or(2)
                .max(2);
            let name_width = filtered
                .iter()
                .map(|p| p.display_name().len().min(35))
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Person Registry ({} persons)\n", filtered.len());
            println!(
                "{:<id_w$} {:<name_w$} {:<4} Clan",
                "ID",
                "Name",
                "Sexe",
                id_w = id_width,
                name_w = name_width
            );
            println!("{}", "-".repeat(id_width + name_width + 16));

            for p in &filtered {
                println!(
                    "{:<id_w$} {:<name_w$} {:<4} {}",
                    p.id.as_str(),
                    p.display_name(),
                    p.sexe,
                    p.clan.as_deref().unwrap_or("-"),
                    id_w = id_width,
                    name_w = name_width
                );
                if verbose {
                    let pere = p.pere_id.as_ref().map(|i| i.as_str()).unwrap_or("-");
                    let mere = p.mere_id.as_ref().map(|i| i.as_str()).unwrap_or("-");
                    println!("  └─ pere: {pere}  mere: {mere}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\tsexe\tclan\tpere_id\tmere_id");
            for p in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    p.id,
                    p.display_name(),
                    p.sexe,
                    p.clan.as_deref().unwrap_or(""),
                    p.pere_id.as_ref().map(|i| i.as_str()).unwrap_or(""),
                    p.mere_id.as_ref().map(|i| i.as_str()).unwrap_or(""),
                );
            }
        }
    }

    Ok(())
}

fn run_show(registry: &PersonRegistry, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let person = registry
        .resolve(id)
        .ok_or_else(|| anyhow::anyhow!("Person '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Person: {}\n", person.display_name());
            println!("ID:    {}", person.id);
            println!("Nom:   {}", person.nom);
            println!("Sexe:  {}", person.sexe);
            println!("Clan:  {}", person.clan.as_deref().unwrap_or("-"));
            println!(
                "Pere:  {}",
                person.pere_id.as_ref().map(|i| i.as_str()).unwrap_or("-")
            );
            println!(
                "Mere:  {}",
                person.mere_id.as_ref().map(|i| i.as_str()).unwrap_or("-")
            );
            if let Some(jumeau) = &person.jumeau_id {
                println!("Jumeau: {jumeau}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(person)?);
        }
        OutputFormat::Tsv => {
            println!("id\tnom\tsexe\tclan");
            println!(
                "{}\t{}\t{}\t{}",
                person.id,
                person.nom,
                person.sexe,
                person.clan.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

fn run_export(registry: &PersonRegistry, output: &PathBuf) -> anyhow::Result<()> {
    let json = registry.to_json()?;
    std::fs::write(output, json)?;

    println!("Exported {} persons to {}", registry.len(), output.display());

    Ok(())
}
