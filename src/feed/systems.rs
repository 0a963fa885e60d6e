//! Keyboard host controls
//!
//! Stand-in for a host application: cycles the selection, reloads the feed
//! file and mounts or unmounts the view.

use bevy::prelude::*;

use crate::core::lifecycle::ViewState;
use crate::feed::loader::{FeedSource, load_feed};
use crate::feed::types::{SatelliteFeed, SatelliteInfo};

/// Id of the satellite after `current` in list order, wrapping around
///
/// Starts at the first satellite when nothing (or an unknown id) is selected.
pub fn next_selection(satellites: &[SatelliteInfo], current: Option<&str>) -> Option<String> {
    if satellites.is_empty() {
        return None;
    }
    let next = current
        .and_then(|id| satellites.iter().position(|s| s.id == id))
        .map(|index| (index + 1) % satellites.len())
        .unwrap_or(0);
    Some(satellites[next].id.clone())
}

/// Tab selects the next satellite, Escape clears the selection
pub fn selection_keys_system(input: Res<ButtonInput<KeyCode>>, mut feed: ResMut<SatelliteFeed>) {
    if input.just_pressed(KeyCode::Tab) {
        let next = next_selection(&feed.satellites, feed.selected.as_deref());
        info!("Selected satellite: {}", next.as_deref().unwrap_or("none"));
        feed.selected = next;
    } else if input.just_pressed(KeyCode::Escape) && feed.selected.is_some() {
        info!("Selection cleared");
        feed.selected = None;
    }
}

/// F5 reloads the feed file, keeping the current feed on failure
pub fn reload_feed_system(
    input: Res<ButtonInput<KeyCode>>,
    source: Res<FeedSource>,
    mut feed: ResMut<SatelliteFeed>,
) {
    if !input.just_pressed(KeyCode::F5) {
        return;
    }
    let Some(path) = &source.path else {
        info!("Showing demo satellites, nothing to reload");
        return;
    };
    match load_feed(path) {
        Ok(loaded) => {
            info!("Reloaded {} satellites", loaded.satellites.len());
            *feed = loaded;
        }
        Err(err) => warn!("{:#}", err),
    }
}

/// F1 toggles between the mounted and unmounted view
pub fn toggle_mount_system(
    input: Res<ButtonInput<KeyCode>>,
    state: Res<State<ViewState>>,
    mut next: ResMut<NextState<ViewState>>,
) {
    if !input.just_pressed(KeyCode::F1) {
        return;
    }
    let target = match state.get() {
        ViewState::Mounted => ViewState::Unmounted,
        ViewState::Unmounted => ViewState::Mounted,
    };
    info!("View {:?} -> {:?}", state.get(), target);
    next.set(target);
}
