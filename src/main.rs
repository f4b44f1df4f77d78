use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use lcm_inventory::Inventory;
use lcm_k8s::KubeClusterSource;

mod config;
mod output;

use config::{Args, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match Settings::load(args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(settings.verbosity.level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Running version {}", env!("CARGO_PKG_VERSION"));

    match run(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: Settings) -> Result<()> {
    let source = KubeClusterSource::connect(&settings.connection).await?;
    let inventory = Inventory::new(source);

    let report = inventory.collect(&settings.namespaces).await?;
    println!("{}", output::render(&report, settings.output)?);

    Ok(())
}
