use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::AppConfig;

pub mod event;
pub mod params;

use params::ParamsArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build notification params and print their JSON form
    Params {
        #[command(flatten)]
        args: ParamsArgs,
    },
    /// Print the event an experience's listeners would receive
    Event {
        /// Read the params as JSON from this file instead of flags
        #[arg(
            long,
            conflicts_with_all = [
                "experience_id",
                "body",
                "remote",
                "from_background",
                "action_id",
                "user_text",
            ]
        )]
        input: Option<PathBuf>,

        #[command(flatten)]
        args: ParamsArgs,
    },
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // Logs go to stderr so stdout only carries JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Handle each sub command
    match args.command {
        Some(Command::Params { args }) => {
            tracing::info!("Building notification params");
            params::run(args, &config).await?;
        }
        Some(Command::Event { input, args }) => {
            tracing::info!("Rendering notification event");
            event::run(input, args, &config).await?;
        }
        None => {}
    }

    Ok(())
}
