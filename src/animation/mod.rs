//! Animation module
//!
//! Drives the per-frame updates of a mounted scene: elapsed time, viewport
//! resizing, globe spin and marker motion. Bevy's render stage draws the
//! scene through the camera once these systems have run.

use bevy::prelude::*;

pub mod driver;
pub mod systems;
pub mod viewport;

pub use driver::{FrameLoop, LoopState, frame_loop_running};
pub use systems::{advance_markers_system, spin_earth_system, tick_frame_loop_system};
pub use viewport::{ViewportTracker, track_viewport_size_system};

use crate::core::lifecycle::ViewState;

/// Ordering of the per-frame work of a mounted view
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSystems {
    /// Rebuild satellite groups from the feed
    Sync,
    /// Advance time and move things
    Animate,
    /// Camera-dependent adjustments right before drawing
    Present,
}

/// Plugin for the per-frame animation loop
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportTracker>()
            .configure_sets(
                Update,
                (FrameSystems::Sync, FrameSystems::Animate, FrameSystems::Present)
                    .chain()
                    .run_if(in_state(ViewState::Mounted)),
            )
            .configure_sets(Update, FrameSystems::Animate.run_if(frame_loop_running))
            .configure_sets(Update, FrameSystems::Present.run_if(frame_loop_running))
            .add_systems(
                Update,
                (
                    tick_frame_loop_system,
                    track_viewport_size_system,
                    spin_earth_system,
                    advance_markers_system,
                )
                    .chain()
                    .in_set(FrameSystems::Animate),
            )
            .add_systems(OnExit(ViewState::Mounted), stop_frame_loop);
    }
}

fn stop_frame_loop(mut frame_loop: Option<ResMut<FrameLoop>>, mut tracker: ResMut<ViewportTracker>) {
    if let Some(frame_loop) = frame_loop.as_mut() {
        let previous = frame_loop.state();
        frame_loop.stop();
        info!(
            "Frame loop stopped after {} frames (was {:?})",
            frame_loop.frames(),
            previous
        );
    }
    tracker.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::systems::{earth_spin, marker_position};
    use crate::feed::{SatelliteFeed, SatelliteKind};
    use crate::satellite::{MarkerRef, OrbitSpeed, SatelliteGroup};
    use crate::test_support::{headless_app, satellite};
    use crate::visualization::{Earth, MainCamera, VisualizationConfig};
    use bevy::time::TimeUpdateStrategy;
    use bevy::window::PrimaryWindow;
    use std::time::Duration;

    fn animated_app() -> App {
        let mut app = headless_app(SatelliteFeed {
            satellites: vec![
                satellite("fwd", SatelliteKind::Science, false),
                satellite("rev", SatelliteKind::Military, true),
            ],
            selected: None,
        });
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            250,
        )));
        for _ in 0..5 {
            app.update();
        }
        app
    }

    #[test]
    fn test_earth_spins_with_elapsed_time() {
        let mut app = animated_app();
        let elapsed_ms = app.world().resource::<FrameLoop>().elapsed_ms();
        assert!(elapsed_ms > 0.0, "elapsed time must be positive");

        let rate = app.world().resource::<VisualizationConfig>().earth_spin_rate;
        let mut query = app
            .world_mut()
            .query_filtered::<&Transform, With<Earth>>();
        let rotation = query.single(app.world()).expect("one earth").rotation;
        let expected = Quat::from_rotation_y(earth_spin(elapsed_ms, rate));
        assert!(rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_markers_follow_their_direction() {
        let mut app = animated_app();
        let elapsed_ms = app.world().resource::<FrameLoop>().elapsed_ms();
        let config = app.world().resource::<VisualizationConfig>().clone();

        let mut groups = app
            .world_mut()
            .query::<(&SatelliteGroup, &OrbitSpeed, &MarkerRef)>();
        let markers: Vec<(String, f32, Entity)> = groups
            .iter(app.world())
            .map(|(group, speed, marker)| (group.id.clone(), speed.0, marker.0))
            .collect();
        assert_eq!(markers.len(), 2);

        for (id, speed, marker) in markers {
            let translation = app
                .world()
                .get::<Transform>(marker)
                .expect("marker transform")
                .translation;
            let expected =
                marker_position(config.orbit_radius, speed, elapsed_ms, config.orbit_rate);
            assert!(translation.distance(expected) < 1e-5, "marker of {}", id);
            let sign = if id == "rev" { -1.0 } else { 1.0 };
            assert_eq!(speed, sign);
        }
    }

    fn camera_aspect(app: &mut App) -> f32 {
        let mut query = app
            .world_mut()
            .query_filtered::<&Projection, With<MainCamera>>();
        match query.single(app.world()).expect("one camera") {
            Projection::Perspective(perspective) => perspective.aspect_ratio,
            other => panic!("unexpected projection {:?}", other),
        }
    }

    #[test]
    fn test_window_resize_updates_camera_aspect_once() {
        let mut app = animated_app();
        let mut window = Window::default();
        window.resolution.set_physical_resolution(800, 600);
        let window = app.world_mut().spawn((window, PrimaryWindow)).id();
        app.update();

        assert!((camera_aspect(&mut app) - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(app.world().resource::<ViewportTracker>().resize_count(), 1);

        app.world_mut()
            .get_mut::<Window>(window)
            .expect("window")
            .resolution
            .set_physical_resolution(1024, 512);
        app.update();
        app.update();

        assert!((camera_aspect(&mut app) - 2.0).abs() < 1e-6);
        assert_eq!(app.world().resource::<ViewportTracker>().resize_count(), 2);

        // unchanged size: the camera is left alone
        let mut query = app
            .world_mut()
            .query_filtered::<&mut Projection, With<MainCamera>>();
        if let Projection::Perspective(perspective) = query
            .single_mut(app.world_mut())
            .expect("one camera")
            .into_inner()
        {
            perspective.aspect_ratio = 1.0;
        }
        app.update();
        assert_eq!(camera_aspect(&mut app), 1.0);
        assert_eq!(app.world().resource::<ViewportTracker>().resize_count(), 2);
        assert_eq!(
            app.world().resource::<ViewportTracker>().last(),
            Some(viewport::Dimensions::new(1024, 512))
        );
    }

    #[test]
    fn test_stopped_loop_freezes_scene() {
        let mut app = animated_app();
        app.world_mut().resource_mut::<FrameLoop>().stop();
        let frames = app.world().resource::<FrameLoop>().frames();
        let elapsed_ms = app.world().resource::<FrameLoop>().elapsed_ms();

        app.update();
        app.update();

        let frame_loop = app.world().resource::<FrameLoop>();
        assert_eq!(frame_loop.frames(), frames);
        assert_eq!(frame_loop.elapsed_ms(), elapsed_ms);
    }
}
