use clap::Parser;

use crate::config::{Config, RenderFormat};

#[derive(Parser, Debug)]
#[command(name = "parlor-server", about = "Parlor public lobby listing")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/parlor.toml")]
    pub config: String,

    /// Session snapshot to read (overrides config)
    #[arg(short, long)]
    pub snapshot: Option<String>,

    /// Include private games in the listing
    #[arg(long)]
    pub admin: bool,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<RenderFormat>,

    /// Session id to treat as finished; may be repeated
    #[arg(long = "ended")]
    pub ended: Vec<String>,

    /// Re-read the snapshot every N seconds (overrides config, 0 renders once)
    #[arg(long)]
    pub watch: Option<u64>,
}

impl Args {
    /// Layer command-line values over the loaded configuration.
    pub fn apply(self, config: &mut Config) {
        if let Some(path) = self.snapshot {
            config.source.snapshot_path = path;
        }
        if self.admin {
            config.listing.admin_override = true;
        }
        if let Some(format) = self.format {
            config.render.format = format;
        }
        config.listing.ended_games.extend(self.ended);
        if let Some(secs) = self.watch {
            config.source.refresh_interval_secs = secs;
        }
    }
}
