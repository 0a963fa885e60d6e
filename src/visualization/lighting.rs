//! Scene lighting

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::core::lifecycle::SceneEntity;
use crate::visualization::config::VisualizationConfig;

/// Marker component for the key directional light
#[derive(Component)]
pub struct KeyLight;

/// Spawn the directional light in front of the globe, pointing at the origin
pub fn spawn_lights(commands: &mut Commands, config: &VisualizationConfig) -> Entity {
    // Keeps the far side of the wireframe readable
    commands.insert_resource(GlobalAmbientLight {
        brightness: config.ambient_brightness,
        ..default()
    });

    commands
        .spawn((
            DirectionalLight {
                color: config.light_color,
                illuminance: config.light_illuminance,
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, config.light_distance).looking_at(Vec3::ZERO, Vec3::Y),
            KeyLight,
            SceneEntity,
            Name::new("Key Light"),
        ))
        .id()
}
