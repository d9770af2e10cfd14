use clap::Parser;
use contas::args::{Args, Command};
use contas::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().home().path();

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Init => commands::init(home).await?.print(),

        Command::Add(add_args) => {
            let config = Config::load(home).await?;
            commands::add(config, add_args.clone()).await?.print()
        }

        Command::List(list_args) => {
            let config = Config::load(home).await?;
            commands::list(config, list_args.clone()).await?.print()
        }

        Command::Stats(stats_args) => {
            let config = Config::load(home).await?;
            commands::stats(config, stats_args.clone()).await?.print()
        }

        Command::Chart(chart_args) => {
            let config = Config::load(home).await?;
            commands::chart(config, chart_args.clone()).await?.print()
        }

        Command::Remove(remove_args) => {
            let config = Config::load(home).await?;
            commands::remove(config, remove_args.clone()).await?.print()
        }

        Command::Clear(clear_args) => {
            let config = Config::load(home).await?;
            commands::clear(config, clear_args.clone()).await?.print()
        }

        Command::Categories => commands::categories().await?.print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
