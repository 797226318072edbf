use clap::Args;

use crate::cli::OutputFormat;
use crate::core::person::Person;
use crate::kinship::relations::FamilyAccessor;
use crate::registry::store::PersonRegistry;

#[derive(Args)]
pub struct RelativesArgs {
    /// Person identifier (canonical, legacy, or name)
    #[arg(required = true)]
    pub id: String,
}

/// Execute relatives subcommand
///
/// # Errors
///
/// Returns an error if the identifier doesn't resolve to any record.
pub fn run(args: &RelativesArgs, registry: &PersonRegistry, format: OutputFormat) -> anyhow::Result<()> {
    let accessor = FamilyAccessor::new(registry);
    let relatives = accessor
        .relatives(&args.id)
        .ok_or_else(|| anyhow::anyhow!("No person found for '{}'", args.id))?;

    match format {
        OutputFormat::Text => {
            println!("Person: {} ({})\n", relatives.person.display_name(), relatives.person.id);

            println!("Pere:  {}", describe(relatives.father.as_ref()));
            println!("Mere:  {}", describe(relatives.mother.as_ref()));

            if let Some(twin) = accessor.twin(args.id.as_str()) {
                println!("Jumeau: {} ({})", twin.display_name(), twin.id);
            }

            if relatives.unions.is_empty() {
                println!("\nNo recorded children.");
            }

            for union in &relatives.unions {
                println!("\nUnion with {}:", describe(union.partner.as_ref()));
                for child in &union.children {
                    println!("  - {} ({})", child.display_name(), child.id);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&relatives)?);
        }
        OutputFormat::Tsv => {
            println!("relation\tid\tname");
            if let Some(father) = &relatives.father {
                println!("pere\t{}\t{}", father.id, father.display_name());
            }
            if let Some(mother) = &relatives.mother {
                println!("mere\t{}\t{}", mother.id, mother.display_name());
            }
            for child in &relatives.children {
                println!("enfant\t{}\t{}", child.id, child.display_name());
            }
        }
    }

    Ok(())
}

fn describe(person: Option<&Person>) -> String {
    match person {
        Some(p) => format!("{} ({})", p.display_name(), p.id),
        None => "(inconnu)".to_string(),
    }
}
