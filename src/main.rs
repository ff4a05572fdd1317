//! Glimt CLI entry point.

use anyhow::Result;
use clap::Parser;
use glimt::cli::{commands, Cli, Commands};
use glimt::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("glimt={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Upload { url, collection } => {
            commands::run_upload(url, collection.clone(), settings).await?;
        }

        Commands::Ask {
            question,
            video,
            max_results,
            model,
            url,
        } => {
            commands::run_ask(
                question,
                video,
                *max_results,
                model.clone(),
                url.clone(),
                settings,
            )
            .await?;
        }

        Commands::Search {
            query,
            video,
            limit,
            url,
        } => {
            commands::run_search(query, video, *limit, url.clone(), settings).await?;
        }

        Commands::Quiz {
            topic,
            video,
            questions,
        } => {
            commands::run_quiz(topic, video, *questions, settings).await?;
        }

        Commands::Reel { topics, video, url } => {
            commands::run_reel(topics, video, url.clone(), settings).await?;
        }

        Commands::Transcript { video, output } => {
            commands::run_transcript(video, output.clone(), settings).await?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host, *port, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
