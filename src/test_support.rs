//! Headless app setup shared by the ECS tests

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::animation::AnimationPlugin;
use crate::core::lifecycle::{LifecyclePlugin, ViewState};
use crate::feed::{SatelliteFeed, SatelliteInfo, SatelliteKind};
use crate::satellite::{OrbitRng, SatellitePlugin};
use crate::visualization::VisualizationPlugin;

/// The view plugins on top of a window-less, render-less app
pub fn headless_app(feed: SatelliteFeed) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin));
    app.init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_asset::<Image>();
    app.insert_resource(OrbitRng::seeded(42));
    app.insert_resource(feed);
    app.add_plugins((
        LifecyclePlugin,
        VisualizationPlugin,
        AnimationPlugin,
        SatellitePlugin,
    ));
    app
}

pub fn satellite(id: &str, kind: SatelliteKind, reverse: bool) -> SatelliteInfo {
    SatelliteInfo::new(id, id, 15.0, kind, reverse)
}

pub fn count<F: QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).count()
}

pub fn set_view_state(app: &mut App, state: ViewState) {
    app.world_mut()
        .resource_mut::<NextState<ViewState>>()
        .set(state);
    app.update();
}
