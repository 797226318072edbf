use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod kinship;
mod registry;
mod suggest;
mod utils;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("lignage=debug,info")
    } else {
        EnvFilter::new("lignage=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Serve(args) => {
            web::server::run(args, cli.dataset)?;
        }
        command => {
            let registry = cli::load_registry(cli.dataset.as_ref(), cli.verbose)?;
            match command {
                cli::Commands::Resolve(args) => {
                    cli::resolve::run(&args, &registry, cli.format)?;
                }
                cli::Commands::Suggest(args) => {
                    cli::suggest::run(args, &registry, cli.format, cli.verbose)?;
                }
                cli::Commands::Relatives(args) => {
                    cli::relatives::run(&args, &registry, cli.format)?;
                }
                cli::Commands::Path(args) => {
                    cli::path::run(&args, &registry, cli.format, cli.verbose)?;
                }
                cli::Commands::Registry(args) => {
                    cli::registry::run(args, &registry, cli.format, cli.verbose)?;
                }
                cli::Commands::Serve(_) => unreachable!("handled above"),
            }
        }
    }

    Ok(())
}
