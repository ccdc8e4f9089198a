//! Command line surface. With no flags the job runs on `./maps.db` and
//! `./maps/`, exactly like the one-off generator it replaces.

use std::path::PathBuf;

use clap::Parser;
use mapscore_core::config::{Durability, MapscoreConfig, OnAssetError, DEFAULT_CONFIG_FILE};
use mapscore_core::errors::ConfigError;

#[derive(Debug, Parser)]
#[command(name = "mapscore-rescore")]
#[command(about = "Recompute double-time performance points for every map in the store")]
#[command(version)]
pub struct Cli {
    /// Config file (TOML). Defaults to ./mapscore.toml when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database holding the `map` table.
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Directory containing one `<id>.osu` file per map.
    #[arg(long, value_name = "DIR")]
    pub maps_dir: Option<String>,

    /// Scoring command invoked once per map.
    #[arg(long, value_name = "CMD")]
    pub oracle: Option<String>,

    /// Durability trade-off for the run: relaxed or safe.
    #[arg(long, value_name = "MODE")]
    pub durability: Option<Durability>,

    /// What to do when a map cannot be scored: skip or abort.
    #[arg(long, value_name = "POLICY")]
    pub on_asset_error: Option<OnAssetError>,
}

impl Cli {
    /// Load the config file, then apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<MapscoreConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => MapscoreConfig::load(path)?,
            None => MapscoreConfig::load_optional(&PathBuf::from(DEFAULT_CONFIG_FILE))?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut MapscoreConfig) {
        if let Some(db) = &self.db {
            config.store.path = db.clone();
        }
        if let Some(dir) = &self.maps_dir {
            config.assets.dir = dir.clone();
        }
        if let Some(oracle) = &self.oracle {
            config.oracle.command = oracle.clone();
        }
        if let Some(durability) = self.durability {
            config.store.durability = durability;
        }
        if let Some(policy) = self.on_asset_error {
            config.rescore.on_asset_error = policy;
        }
    }
}
