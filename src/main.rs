use anyhow::Context;
use clap::Parser;
use flatwiki::application::{init::init, view_entry, EntryView};
use flatwiki::cli::{format_title_list, Cli, Commands};
use flatwiki::domain::matching_titles;
use flatwiki::error::WikiError;
use flatwiki::infrastructure::{Config, EntryStore, WikiRepository};
use flatwiki::web::{self, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let result = init_logging().and_then(|()| run(cli));

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => match e.downcast_ref::<WikiError>() {
            Some(err) => {
                eprintln!("Error: {}", err.display_with_suggestions());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
    }
}

fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("flatwiki=info".parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init { path, entries_dir } => {
            let config = Config {
                entries_dir,
                ..Config::default()
            };
            init(&path, &config)?;
            Ok(())
        }
        Commands::Serve { bind } => {
            let repo = WikiRepository::discover()?;
            let config = repo.load_config()?;
            let addr: SocketAddr = match bind {
                Some(addr) => addr,
                None => config.bind.parse::<SocketAddr>().map_err(|e| {
                    WikiError::Config(format!("Invalid bind address '{}': {}", config.bind, e))
                })?,
            };

            let store = repo.store(&config);
            tracing::info!(
                "Serving wiki at {} from {}",
                repo.root().display(),
                store.dir().display()
            );
            let state = AppState::new(Arc::new(store), &config);

            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime
                .block_on(web::serve(state, addr))
                .with_context(|| format!("Server on {} stopped", addr))?;
            Ok(())
        }
        Commands::List { query } => {
            let repo = WikiRepository::discover()?;
            let store = repo.store(&repo.load_config()?);
            let titles = store.list_entries()?;
            let titles = match query {
                Some(q) => matching_titles(&titles, &q),
                None => titles,
            };
            println!("{}", format_title_list(&titles).trim_end());
            Ok(())
        }
        Commands::Render { title } => {
            let repo = WikiRepository::discover()?;
            let store = repo.store(&repo.load_config()?);
            match view_entry(&store, &title)? {
                EntryView::Found { html, .. } => {
                    print!("{}", html);
                    Ok(())
                }
                EntryView::Missing { title } => Err(WikiError::EntryNotFound(title).into()),
            }
        }
    }
}
