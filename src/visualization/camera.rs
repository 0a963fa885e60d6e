//! Fixed perspective camera

use bevy::prelude::*;

use crate::core::lifecycle::SceneEntity;
use crate::visualization::config::VisualizationConfig;

/// Marker component for the camera the scene is drawn through
#[derive(Component)]
pub struct MainCamera;

pub fn spawn_camera(commands: &mut Commands, config: &VisualizationConfig) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: config.camera_fov_deg.to_radians(),
                near: config.camera_near,
                far: config.camera_far,
                ..default()
            }),
            // Looking down -Z at the globe, rolled about the viewing axis
            Transform::from_xyz(0.0, 0.0, config.camera_distance)
                .with_rotation(Quat::from_rotation_z(config.camera_roll)),
            MainCamera,
            SceneEntity,
            Name::new("Camera"),
        ))
        .id()
}
