//! Satellite components for the Bevy ECS system

use bevy::prelude::*;

/// Root of one satellite's visual group; child of the Earth entity
#[derive(Component, Debug, Clone)]
pub struct SatelliteGroup {
    pub id: String,
}

/// Direction the marker travels along its orbit: +1 or -1
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpeed(pub f32);

impl OrbitSpeed {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse { Self(-1.0) } else { Self(1.0) }
    }
}

/// Back-reference from a group to its marker entity
#[derive(Component, Debug, Clone, Copy)]
pub struct MarkerRef(pub Entity);

/// Camera-facing icon of a satellite
#[derive(Component, Debug)]
pub struct SatelliteMarker;
