use ai_terminal_rs::*;

use clap::Parser;
use cli::{Cli, Commands};
use config::ConfigStore;
use error::AiTermError;
use ollama::{ModelCatalog, OllamaClient};
use tokio::runtime::Runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();

    // Without a home directory there is nowhere to keep the config, so
    // this is the one failure that aborts before dispatch.
    let store = ConfigStore::new().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let colored = true;

    let rt = Runtime::new()?;
    let result = rt.block_on(dispatch(&cli, &store, colored));

    if let Err(e) = result {
        match e {
            AiTermError::UserCancelled => {
                ui::warning("Cancelled.", colored);
                std::process::exit(0);
            }
            _ => {
                ui::error(&e.to_string(), colored);
                if let Some(suggestion) = e.suggestion() {
                    println!();
                    ui::info(suggestion, colored);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn dispatch(cli: &Cli, store: &ConfigStore, colored: bool) -> error::Result<()> {
    match &cli.command {
        Commands::Init => commands::init::run(store, colored),
        Commands::Set { key, value } => commands::config::set(store, key, value, colored),
        Commands::Get { key } => commands::config::get(store, key, colored),
        Commands::SetHost { host } => commands::config::set_host(store, host.as_deref(), colored),
        Commands::SetModel => {
            let client = OllamaClient::from_store(store)?;
            commands::config::set_model(store, &client, colored).await
        }
        Commands::List { what } => match what.as_deref() {
            Some("available") => {
                let catalog = ModelCatalog::new()?;
                commands::list::run_available(&catalog, colored).await
            }
            Some(other) => Err(AiTermError::InvalidInput(format!(
                "unknown list target '{}'; did you mean 'available'?",
                other
            ))),
            None => {
                let client = OllamaClient::from_store(store)?;
                commands::list::run(&client, colored).await
            }
        },
        Commands::Commit { yes, dry_run } => {
            let options = commands::CommitOptions {
                yes: *yes,
                dry_run: *dry_run,
            };
            commands::commit::run(store, options, colored).await
        }
        Commands::Review => commands::review::run(store, colored).await,
        Commands::Component { name, path } => {
            commands::component::run(store, name, path.as_deref(), colored).await
        }
        Commands::Hooks { name } => commands::hooks::run(store, name, colored).await,
    }
}
