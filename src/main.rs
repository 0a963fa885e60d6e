use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use std::path::PathBuf;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod animation;
mod core;
mod feed;
mod satellite;
mod visualization;

#[cfg(test)]
mod test_support;

use animation::AnimationPlugin;
use crate::core::lifecycle::LifecyclePlugin;
use feed::FeedPlugin;
use satellite::SatellitePlugin;
use visualization::VisualizationPlugin;

fn main() {
    // Optional feed file path as the first argument
    let feed_path = std::env::args_os().nth(1).map(PathBuf::from);

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Satellite Visualisation".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins((
        LifecyclePlugin,
        VisualizationPlugin,
        AnimationPlugin,
        SatellitePlugin,
        FeedPlugin { feed_path },
    ));

    app.run();
}
