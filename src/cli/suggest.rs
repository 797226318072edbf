use clap::Args;

use crate::cli::OutputFormat;
use crate::registry::store::PersonRegistry;
use crate::suggest::engine::{PersonQuery, SuggestEngine, DEFAULT_SUGGEST_LIMIT};

#[derive(Args)]
pub struct SuggestArgs {
    /// Given name to match
    #[arg(long)]
    pub nom: Option<String>,

    /// Father's name to match
    #[arg(long = "pere")]
    pub nom_pere: Option<String>,

    /// Grandfather's name to match
    #[arg(long = "grand-pere")]
    pub nom_grand_pere: Option<String>,

    /// Number of suggestions to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_SUGGEST_LIMIT)]
    pub limit: usize,
}

/// Execute suggest subcommand
pub fn run(
    args: SuggestArgs,
    registry: &PersonRegistry,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let query = PersonQuery {
        nom: args.nom,
        nom_pere: args.nom_pere,
        nom_grand_pere: args.nom_grand_pere,
    };

    let engine = SuggestEngine::new(registry);
    let matches = engine.suggest(&query, args.limit);

    if verbose {
        eprintln!("{} match(es)", matches.len());
    }

    match format {
        OutputFormat::Text => {
            if matches.is_empty() {
                println!("No matches.");
                return Ok(());
            }

            println!("{:<20} {:<35} {:>6}", "ID", "Name", "Score");
            println!("{}", "-".repeat(64));
            for m in &matches {
                println!(
                    "{:<20} {:<35} {:>6}",
                    m.person.id,
                    m.person.display_name(),
                    m.score
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\tscore");
            for m in &matches {
                println!("{}\t{}\t{}", m.person.id, m.person.display_name(), m.score);
            }
        }
    }

    Ok(())
}
