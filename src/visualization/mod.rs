//! Visualization module
//!
//! This module builds the static part of the scene (globe, light, camera),
//! the shared meshes, materials and icon textures, and keeps markers facing
//! the camera.

use bevy::prelude::*;

pub mod assets;
pub mod billboard;
pub mod camera;
pub mod config;
pub mod earth;
pub mod icons;
pub mod lighting;
pub mod orbit_path;
pub mod scene;

pub use assets::SceneAssets;
pub use billboard::{Billboard, face_camera_system};
pub use camera::MainCamera;
pub use config::VisualizationConfig;
pub use earth::Earth;
pub use icons::IconTextures;
pub use orbit_path::OrbitPath;

use crate::animation::FrameSystems;
use crate::core::lifecycle::{ViewState, despawn_scene_entities};

/// Plugin for the scene bootstrap and teardown
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VisualizationConfig>()
            .add_systems(OnEnter(ViewState::Mounted), scene::bootstrap_scene)
            .add_systems(
                OnExit(ViewState::Mounted),
                (despawn_scene_entities, scene::release_scene_assets),
            )
            .add_systems(Update, face_camera_system.in_set(FrameSystems::Present));
    }
}
