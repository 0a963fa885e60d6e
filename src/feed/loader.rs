//! Feed file loading
//!
//! The feed path comes from the first command line argument. Without one the
//! platform config directory is checked:
//! - macOS: ~/Library/Application Support/satglobe/satellites.json
//! - Linux: ~/.config/satglobe/satellites.json
//! - Windows: %APPDATA%\satglobe\config\satellites.json

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::feed::mock_data::demo_feed;
use crate::feed::types::{FeedFile, SatelliteFeed};

const FEED_FILE_NAME: &str = "satellites.json";

/// Where the current feed was loaded from; `None` means the built-in demo list
#[derive(Resource, Debug, Clone, Default)]
pub struct FeedSource {
    pub path: Option<PathBuf>,
}

/// Parse a feed file from disk
pub fn load_feed(path: &Path) -> anyhow::Result<SatelliteFeed> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read feed file {}", path.display()))?;
    let file: FeedFile = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse feed file {}", path.display()))?;
    Ok(file.into())
}

/// Pick the feed path: explicit argument first, then the config directory if the file exists
pub fn resolve_feed_path(arg: Option<PathBuf>) -> Option<PathBuf> {
    if arg.is_some() {
        return arg;
    }
    let proj_dirs = ProjectDirs::from("", "", "satglobe")?;
    let candidate = proj_dirs.config_dir().join(FEED_FILE_NAME);
    candidate.exists().then_some(candidate)
}

/// Load the initial feed, falling back to the demo satellites when no file is usable
pub fn initial_feed(source: &FeedSource) -> SatelliteFeed {
    let Some(path) = &source.path else {
        info!("No feed file found, showing demo satellites");
        return demo_feed();
    };
    match load_feed(path) {
        Ok(feed) => {
            info!(
                "Loaded {} satellites from {}",
                feed.satellites.len(),
                path.display()
            );
            feed
        }
        Err(err) => {
            warn!("{:#}; showing demo satellites", err);
            demo_feed()
        }
    }
}
