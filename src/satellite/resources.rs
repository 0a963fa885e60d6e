//! Satellite resources: persistent orbit planes and synchronization state

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::f32::consts::TAU;

use crate::satellite::error::SyncError;

/// Randomly chosen orientation of one satellite's orbital plane, in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAngle {
    pub longitude: f32,
    pub latitude: f32,
}

impl OrbitAngle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            longitude: rng.random_range(0.0..TAU),
            latitude: rng.random_range(0.0..TAU),
        }
    }
}

/// Orbit plane per satellite id, kept for the lifetime of a mount
///
/// Entries are only ever added, so an id keeps its plane even when it drops
/// out of the feed and comes back later.
#[derive(Resource, Debug, Default)]
pub struct OrbitAngles {
    by_id: HashMap<String, OrbitAngle>,
}

impl OrbitAngles {
    /// Return the assignment for `id`, drawing a new one from `rng` if absent
    pub fn get_or_insert<R: Rng>(&mut self, id: &str, rng: &mut R) -> OrbitAngle {
        if let Some(angle) = self.get(id) {
            return angle;
        }
        let angle = OrbitAngle::random(rng);
        self.by_id.insert(id.to_string(), angle);
        angle
    }

    pub fn get(&self, id: &str) -> Option<OrbitAngle> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
    }
}

/// Random source for new orbit planes
#[derive(Resource, Deref, DerefMut)]
pub struct OrbitRng(pub StdRng);

impl Default for OrbitRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl OrbitRng {
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Outcome of the latest synchronization
#[derive(Resource, Debug, Default)]
pub struct SyncReport {
    /// Successful rebuilds since startup
    pub generation: u64,
    pub group_count: usize,
    pub last_error: Option<SyncError>,
}
