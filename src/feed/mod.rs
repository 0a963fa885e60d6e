//! Satellite feed module
//!
//! This module holds the input records of the view, loads them from a JSON
//! feed file and provides the keyboard controls of the demo host.

use bevy::prelude::*;
use std::path::PathBuf;

pub mod loader;
pub mod mock_data;
pub mod systems;
pub mod types;

pub use loader::FeedSource;
pub use types::{SatelliteFeed, SatelliteInfo, SatelliteKind};

/// Plugin providing the satellite feed and the host controls
pub struct FeedPlugin {
    pub feed_path: Option<PathBuf>,
}

impl Plugin for FeedPlugin {
    fn build(&self, app: &mut App) {
        let source = FeedSource {
            path: loader::resolve_feed_path(self.feed_path.clone()),
        };
        let feed = loader::initial_feed(&source);

        app.insert_resource(source)
            .insert_resource(feed)
            .add_systems(
                Update,
                (
                    systems::selection_keys_system,
                    systems::reload_feed_system,
                    systems::toggle_mount_system,
                ),
            );
    }
}
