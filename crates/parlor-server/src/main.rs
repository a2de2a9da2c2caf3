use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use parlor_core::{list_sessions, project, snapshot, EndedSessions};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod render;

use config::{Config, RenderFormat};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("parlor=info")),
        )
        .init();

    let args = cli::Args::parse();
    let mut config = Config::load(&args.config)?;
    args.apply(&mut config);

    let ended = EndedSessions::new(config.listing.ended_games.iter().cloned());
    tracing::info!(
        snapshot = %config.source.snapshot_path,
        admin_override = config.listing.admin_override,
        ended_games = config.listing.ended_games.len(),
        "lobby configured"
    );

    let interval_secs = config.source.refresh_interval_secs;
    if interval_secs == 0 {
        return render_lobby(&config, &ended).await;
    }

    // Every tick recomputes the whole listing from a fresh snapshot.
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down (ctrl-c)...");
                break;
            }
            _ = ticker.tick() => {
                if let Err(e) = render_lobby(&config, &ended).await {
                    tracing::error!("lobby refresh failed: {e:#}");
                }
            }
        }
    }
    Ok(())
}

async fn render_lobby(config: &Config, ended: &EndedSessions) -> Result<()> {
    let sessions = snapshot::load_snapshot(&config.source.snapshot_path).await?;
    let rows: Vec<_> = list_sessions(&sessions, config.listing.admin_override, ended)
        .into_iter()
        .map(project)
        .collect();

    let output = match config.render.format {
        RenderFormat::Text => render::text(&rows),
        RenderFormat::Json => render::json(sessions.len(), &rows, chrono::Utc::now())?,
    };
    println!("{output}");
    Ok(())
}
