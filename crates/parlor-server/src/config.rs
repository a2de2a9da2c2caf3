use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Seconds between snapshot reloads. 0 renders once and exits.
    #[serde(default)]
    pub refresh_interval_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            refresh_interval_secs: 0,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Show private games too (the `?admin=true` view).
    #[serde(default)]
    pub admin_override: bool,
    /// Session ids reported as finished by the game-over check.
    #[serde(default)]
    pub ended_games: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: RenderFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
}

fn default_snapshot_path() -> String {
    "./data/games.json".into()
}

fn generate_config_template(config: &Config) -> String {
    format!(
        r#"# Parlor Lobby Configuration
# Generated automatically on first run. Edit as needed.

[source]
# JSON snapshot of all game sessions (array or id-keyed object).
snapshot_path = "{snapshot_path}"
# Reload the snapshot every N seconds. 0 renders once and exits.
refresh_interval_secs = {refresh_interval_secs}

[listing]
# Also list private games.
admin_override = {admin_override}
# Games to treat as finished.
ended_games = []

[render]
# "text" or "json"
format = "{format}"
"#,
        snapshot_path = config.source.snapshot_path,
        refresh_interval_secs = config.source.refresh_interval_secs,
        admin_override = config.listing.admin_override,
        format = match config.render.format {
            RenderFormat::Text => "text",
            RenderFormat::Json => "json",
        },
    )
}

// ── Config Loading ───────────────────────────────────────────────────────────

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if std::path::Path::new(path).exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            tracing::info!(
                "Config file not found at '{}', generating defaults...",
                path
            );
            let config = Config::default();

            if let Some(parent) = std::path::Path::new(path).parent() {
                fs::create_dir_all(parent)?;
            }

            fs::write(path, generate_config_template(&config))?;
            tracing::info!("Generated default config at '{}'", path);
            config
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Environment variable overrides. `lookup` is `std::env::var` outside tests.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("PARLOR_SNAPSHOT_PATH") {
            self.source.snapshot_path = value;
        }
        if let Some(value) = lookup("PARLOR_REFRESH_INTERVAL_SECS") {
            match value.parse::<u64>() {
                Ok(parsed) => self.source.refresh_interval_secs = parsed,
                Err(_) => tracing::warn!(
                    "Ignoring invalid PARLOR_REFRESH_INTERVAL_SECS value '{}'",
                    value
                ),
            }
        }
        if let Some(value) = lookup("PARLOR_ADMIN") {
            // Same rule as the `admin` query parameter: only the literal "true" enables it.
            self.listing.admin_override = value == "true";
        }
        if let Some(value) = lookup("PARLOR_RENDER_FORMAT") {
            match value.trim().to_ascii_lowercase().as_str() {
                "text" => self.render.format = RenderFormat::Text,
                "json" => self.render.format = RenderFormat::Json,
                _ => tracing::warn!(
                    "Ignoring invalid PARLOR_RENDER_FORMAT value '{}'; expected text or json",
                    value
                ),
            }
        }
    }
}
