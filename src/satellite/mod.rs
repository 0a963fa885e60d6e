//! Satellite management module
//!
//! This module turns the satellite feed into visual groups under the globe:
//! one group per satellite, each holding a marker and a dashed orbit path,
//! rebuilt from scratch whenever the feed or the selection changes.

use bevy::prelude::*;

pub mod components;
pub mod error;
pub mod resources;
pub mod systems;

pub use components::{MarkerRef, OrbitSpeed, SatelliteGroup, SatelliteMarker};
pub use error::SyncError;
pub use resources::{OrbitAngles, OrbitRng, SyncReport};
pub use systems::{forget_orbit_angles, synchronize_satellites_system};

use crate::animation::FrameSystems;
use crate::core::lifecycle::ViewState;

/// Plugin for satellite group synchronization
pub struct SatellitePlugin;

impl Plugin for SatellitePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitAngles>()
            .init_resource::<OrbitRng>()
            .init_resource::<SyncReport>()
            .add_systems(
                Update,
                synchronize_satellites_system.in_set(FrameSystems::Sync),
            )
            .add_systems(OnExit(ViewState::Mounted), forget_orbit_angles);
    }
}
