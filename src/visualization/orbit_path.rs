//! Dashed orbit path geometry

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use std::f32::consts::TAU;

const DASH_EPSILON: f32 = 1e-6;

/// Marker component for a group's dashed orbit path
#[derive(Component)]
pub struct OrbitPath;

/// Sample a closed circle of `radius` in the XZ plane
///
/// Returns `divisions + 1` points; the last one repeats the first so the
/// polyline closes.
pub fn circle_points(radius: f32, divisions: u32) -> Vec<Vec3> {
    let divisions = divisions.max(3);
    (0..=divisions)
        .map(|i| {
            let t = i as f32 / divisions as f32 * TAU;
            Vec3::new(radius * t.cos(), 0.0, radius * t.sin())
        })
        .collect()
}

/// Split a polyline into dash segments following its running length
///
/// A point at distance `d` along the polyline is drawn when
/// `d mod (dash + gap) <= dash`.
pub fn dash_polyline(points: &[Vec3], dash: f32, gap: f32) -> Vec<(Vec3, Vec3)> {
    let mut segments = Vec::new();
    if points.len() < 2 || dash <= 0.0 {
        return segments;
    }
    if gap <= 0.0 {
        return points.windows(2).map(|w| (w[0], w[1])).collect();
    }

    let period = dash + gap;
    let mut travelled = 0.0_f32;
    for window in points.windows(2) {
        let (start, end) = (window[0], window[1]);
        let length = start.distance(end);
        if length <= f32::EPSILON {
            continue;
        }
        let mut local = 0.0_f32;
        while local < length {
            let phase = (travelled + local) % period;
            if phase < dash - DASH_EPSILON {
                let until = (local + dash - phase).min(length);
                segments.push((
                    start.lerp(end, local / length),
                    start.lerp(end, until / length),
                ));
                local = until;
            } else {
                // always make progress, rounding can leave us just short of the next dash
                local = (local + (period - phase).max(DASH_EPSILON)).min(length);
            }
        }
        travelled += length;
    }
    segments
}

/// Build the shared dashed-circle mesh used by every satellite group
pub fn generate_orbit_path(radius: f32, divisions: u32, dash: f32, gap: f32) -> Mesh {
    let points = circle_points(radius, divisions);
    let segments = dash_polyline(&points, dash, gap);

    let mut positions = Vec::with_capacity(segments.len() * 2);
    for (a, b) in segments {
        positions.extend_from_slice(&[a, b]);
    }
    let normals = vec![Vec3::Y; positions.len()];

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh
}
