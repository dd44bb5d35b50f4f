mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "funcpack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Discover { app_root, model } => {
            cli::discover(&app_root, &model).await?;
        }
        Commands::Inject {
            app_root,
            output_path,
            model,
            module_kind,
        } => {
            cli::inject(&output_path, &app_root, &model, &module_kind).await?;
        }
    }

    Ok(())
}
