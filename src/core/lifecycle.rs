//! Mount / unmount lifecycle of the view

use bevy::prelude::*;

/// Whether the visualization currently owns a scene
///
/// Entering `Mounted` bootstraps the scene, leaving it tears everything down.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Mounted,
    Unmounted,
}

/// Marker for top-level entities owned by a mount (camera, light, globe)
///
/// Despawning these recursively removes every satellite group as well.
#[derive(Component)]
pub struct SceneEntity;

/// Despawn everything a mount created
pub fn despawn_scene_entities(mut commands: Commands, query: Query<Entity, With<SceneEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Despawned {} scene entities", count);
}

/// Plugin registering the view state
pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<ViewState>();
    }
}
