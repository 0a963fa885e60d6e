use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use std::collections::HashSet;
use std::f32::consts::PI;

/// Marker component for the globe; satellite groups are its children
#[derive(Component)]
pub struct Earth;

/// Build a line-list mesh with every edge of a triangulated UV sphere
///
/// Vertices follow the usual UV sphere layout: `width_segments + 1` columns
/// by `height_segments + 1` rows, with the first and last rows collapsed onto
/// the poles. Edges that coincide in space (shared by two triangles, on the
/// texture seam or fanning out of a pole) appear once and zero-length edges
/// are dropped.
pub fn generate_wireframe_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let (positions, normals) = wireframe_sphere_lines(radius, width_segments, height_segments);

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh
}

/// Line-list vertex positions and outward normals for a wireframe sphere
pub fn wireframe_sphere_lines(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> (Vec<Vec3>, Vec<Vec3>) {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);

    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(height_segments as usize + 1);
    let mut vertices = Vec::new();
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let mut row = Vec::with_capacity(width_segments as usize + 1);
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            vertices.push(Vec3::new(
                -radius * (u * 2.0 * PI).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * 2.0 * PI).sin() * (v * PI).sin(),
            ));
            row.push(vertices.len() as u32 - 1);
        }
        grid.push(row);
    }

    // Same triangle split as a solid sphere, so the wireframe shows the diagonals too
    let mut triangles: Vec<[u32; 3]> = Vec::new();
    for iy in 0..height_segments as usize {
        for ix in 0..width_segments as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                triangles.push([a, b, d]);
            }
            if iy != height_segments as usize - 1 {
                triangles.push([b, c, d]);
            }
        }
    }

    let mut seen: HashSet<([i32; 3], [i32; 3])> = HashSet::new();
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    for triangle in &triangles {
        for (i0, i1) in [
            (triangle[0], triangle[1]),
            (triangle[1], triangle[2]),
            (triangle[2], triangle[0]),
        ] {
            let p0 = vertices[i0 as usize];
            let p1 = vertices[i1 as usize];
            let (k0, k1) = (quantize(p0, radius), quantize(p1, radius));
            if k0 == k1 {
                continue;
            }
            let key = if k0 < k1 { (k0, k1) } else { (k1, k0) };
            if !seen.insert(key) {
                continue;
            }
            positions.extend_from_slice(&[p0, p1]);
            normals.extend_from_slice(&[p0.normalize_or_zero(), p1.normalize_or_zero()]);
        }
    }

    (positions, normals)
}

fn quantize(p: Vec3, radius: f32) -> [i32; 3] {
    (p / radius.max(f32::EPSILON) * 1e4).round().as_ivec3().to_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_vertex_on_sphere() {
        let (positions, normals) = wireframe_sphere_lines(1.08, 16, 12);
        assert_eq!(positions.len(), normals.len());
        assert_eq!(positions.len() % 2, 0, "line list must hold whole segments");
        for p in &positions {
            assert!((p.length() - 1.08).abs() < 1e-4, "vertex off sphere: {:?}", p);
        }
    }

    #[test]
    fn test_no_degenerate_or_duplicate_segments() {
        let (positions, _) = wireframe_sphere_lines(1.0, 16, 12);
        let mut keys = HashSet::new();
        for segment in positions.chunks(2) {
            assert!(segment[0].distance(segment[1]) > 1e-4);
            let a = quantize(segment[0], 1.0);
            let b = quantize(segment[1], 1.0);
            let key = if a < b { (a, b) } else { (b, a) };
            assert!(keys.insert(key), "duplicate edge");
        }
    }

    #[test]
    fn test_segment_count_grows_with_subdivision() {
        let (coarse, _) = wireframe_sphere_lines(1.0, 8, 6);
        let (fine, _) = wireframe_sphere_lines(1.0, 16, 12);
        assert!(fine.len() > coarse.len());
    }

    #[test]
    fn test_mesh_is_line_list() {
        let mesh = generate_wireframe_sphere(1.08, 16, 12);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_POSITION).is_some());
    }
}
