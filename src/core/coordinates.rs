//! Spherical coordinate and orientation helpers
//!
//! Angles follow the Y-up convention used by the scene: `phi` is the polar
//! angle measured from +Y, `theta` the azimuth measured from +Z towards +X.

use bevy::math::{EulerRot, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Polar angle of the equatorial plane
pub const EQUATORIAL_PHI: f32 = FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Point on the equator of a sphere of `radius` at azimuth `theta`
    pub fn equatorial(radius: f32, theta: f32) -> Self {
        Self::new(radius, EQUATORIAL_PHI, theta)
    }

    pub fn to_cartesian(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}

impl From<Spherical> for Vec3 {
    fn from(value: Spherical) -> Self {
        value.to_cartesian()
    }
}

/// Orientation of an orbital plane from intrinsic X, Y, Z rotations
pub fn orbital_plane_rotation(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, x, y, z)
}
