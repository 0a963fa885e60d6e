//! Per-frame scene updates

use bevy::prelude::*;

use crate::animation::driver::FrameLoop;
use crate::core::coordinates::Spherical;
use crate::satellite::{MarkerRef, OrbitSpeed, SatelliteGroup, SatelliteMarker};
use crate::visualization::VisualizationConfig;
use crate::visualization::earth::Earth;

/// Globe rotation about +Y after `elapsed_ms`
pub fn earth_spin(elapsed_ms: f32, rate: f32) -> f32 {
    elapsed_ms * rate
}

/// Marker position in its group's frame: on the group's equator, advanced by speed and time
pub fn marker_position(radius: f32, speed: f32, elapsed_ms: f32, rate: f32) -> Vec3 {
    Spherical::equatorial(radius, speed * elapsed_ms * rate).into()
}

pub fn tick_frame_loop_system(time: Res<Time>, mut frame_loop: ResMut<FrameLoop>) {
    frame_loop.tick(time.elapsed());
}

pub fn spin_earth_system(
    frame_loop: Res<FrameLoop>,
    config: Res<VisualizationConfig>,
    mut earth: Query<&mut Transform, With<Earth>>,
) {
    let angle = earth_spin(frame_loop.elapsed_ms(), config.earth_spin_rate);
    for mut transform in &mut earth {
        transform.rotation = Quat::from_rotation_y(angle);
    }
}

pub fn advance_markers_system(
    frame_loop: Res<FrameLoop>,
    config: Res<VisualizationConfig>,
    groups: Query<(&OrbitSpeed, &MarkerRef), With<SatelliteGroup>>,
    mut markers: Query<&mut Transform, With<SatelliteMarker>>,
) {
    let elapsed_ms = frame_loop.elapsed_ms();
    for (speed, marker) in &groups {
        if let Ok(mut transform) = markers.get_mut(marker.0) {
            transform.translation =
                marker_position(config.orbit_radius, speed.0, elapsed_ms, config.orbit_rate);
        }
    }
}
