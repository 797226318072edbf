use clap::Args;

use crate::cli::OutputFormat;
use crate::registry::store::PersonRegistry;

#[derive(Args)]
pub struct ResolveArgs {
    /// Identifier to resolve (canonical id, legacy "p_" id, or a name)
    #[arg(required = true)]
    pub id: String,
}

/// Execute resolve subcommand
///
/// # Errors
///
/// Returns an error if the identifier doesn't resolve to any record.
pub fn run(args: &ResolveArgs, registry: &PersonRegistry, format: OutputFormat) -> anyhow::Result<()> {
    let person = registry
        .resolve(&args.id)
        .ok_or_else(|| anyhow::anyhow!("No person found for '{}'", args.id))?;

    match format {
        OutputFormat::Text => {
            println!("Person: {}\n", person.display_name());
            println!("ID:    {}", person.id);
            println!("Sexe:  {}", person.sexe);
            if let Some(clan) = &person.clan {
                println!("Clan:  {clan}");
            }
            if let Some(pere_id) = &person.pere_id {
                println!("Pere:  {pere_id}");
            }
            if let Some(mere_id) = &person.mere_id {
                println!("Mere:  {mere_id}");
            }
            if let Some(jumeau_id) = &person.jumeau_id {
                println!("Jumeau: {jumeau_id}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(person)?);
        }
        OutputFormat::Tsv => {
            println!("id\tnom\tsexe\tclan\tpere_id\tmere_id");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                person.id,
                person.display_name(),
                person.sexe,
                person.clan.as_deref().unwrap_or(""),
                person.pere_id.as_ref().map(|i| i.as_str()).unwrap_or(""),
                person.mere_id.as_ref().map(|i| i.as_str()).unwrap_or(""),
            );
        }
    }

    Ok(())
}
