use clap::Args;

use crate::cli::OutputFormat;
use crate::kinship::path::PathFinder;
use crate::kinship::pivot::PivotResolver;
use crate::registry::store::PersonRegistry;

#[derive(Args)]
pub struct PathArgs {
    /// Starting person (canonical id, legacy id, or name)
    #[arg(required = true)]
    pub from: String,

    /// Target person (canonical id, legacy id, or name)
    #[arg(required = true)]
    pub to: String,

    /// Also resolve the common-ancestor (pivot) structure
    #[arg(long)]
    pub pivot: bool,
}

/// Execute path subcommand
///
/// # Errors
///
/// Returns an error when no chain connects the two inputs (which covers
/// unresolvable inputs as well — the two cases are indistinguishable by
/// design).
pub fn run(
    args: &PathArgs,
    registry: &PersonRegistry,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let finder = PathFinder::new(registry);
    let path = finder
        .find_path(&args.from, &args.to)
        .ok_or_else(|| anyhow::anyhow!("No kinship chain between '{}' and '{}'", args.from, args.to))?;

    if verbose {
        eprintln!("Found chain of {} step(s)", path.len());
    }

    let pivot = if args.pivot {
        PivotResolver::new(registry).resolve(&path, &args.from)
    } else {
        None
    };

    match format {
        OutputFormat::Text => {
            if path.is_empty() {
                println!("Same person.");
                return Ok(());
            }

            for (i, step) in path.iter().enumerate() {
                let to = registry.get(&step.to_id);
                let name = to.map(|p| p.display_name()).unwrap_or_default();
                println!("{:>3}. {} -[{}]-> {} ({})", i + 1, step.from_id, step.kind, step.to_id, name);
            }

            if let Some(pivot) = &pivot {
                println!();
                if pivot.midpoint_fallback {
                    println!("No branching ancestor; midpoint pivot: {}", pivot.pivot_id);
                } else {
                    println!("Common ancestor: {}", pivot.pivot_id);
                }
                if let Some(partner) = &pivot.partner {
                    println!("Partner: {} ({})", partner.display_name(), partner.id);
                }
                println!("Branch toward {}: {}", args.from, join_ids(&pivot.chain_toward_from()));
                println!("Branch toward {}: {}", args.to, join_ids(&pivot.chain_toward_to()));
            }
        }
        OutputFormat::Json => {
            let output = match &pivot {
                Some(pivot) => serde_json::json!({ "steps": path, "pivot": pivot }),
                None => serde_json::json!({ "steps": path }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("from\tto\ttype");
            for step in &path {
                println!("{}\t{}\t{}", step.from_id, step.to_id, step.kind);
            }
        }
    }

    Ok(())
}

fn join_ids(ids: &[crate::core::types::PersonId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
