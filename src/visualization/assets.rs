//! Meshes and materials shared by every satellite group of a mount

use bevy::prelude::*;

use crate::feed::SatelliteKind;
use crate::visualization::config::VisualizationConfig;
use crate::visualization::earth::generate_wireframe_sphere;
use crate::visualization::icons::IconTextures;
use crate::visualization::orbit_path::generate_orbit_path;

/// Handles created once on mount and reused by every synchronization
///
/// Rebuilding the groups only clones these handles, so replacing groups
/// never allocates new GPU assets. Removing this resource on unmount drops
/// the last strong handles and lets the asset server free them.
#[derive(Resource, Debug, Clone)]
pub struct SceneAssets {
    pub earth_mesh: Handle<Mesh>,
    pub earth_material: Handle<StandardMaterial>,
    pub marker_mesh: Handle<Mesh>,
    pub orbit_path_mesh: Handle<Mesh>,
    /// Indexed by [`SatelliteKind::index`], then neutral / selected
    marker_materials: [[Handle<StandardMaterial>; 2]; 3],
    /// Neutral / selected
    path_materials: [Handle<StandardMaterial>; 2],
}

impl SceneAssets {
    pub fn build(
        config: &VisualizationConfig,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        icons: &IconTextures,
    ) -> Self {
        let earth_mesh = meshes.add(generate_wireframe_sphere(
            config.earth_radius,
            config.earth_width_segments,
            config.earth_height_segments,
        ));
        let earth_material = materials.add(StandardMaterial {
            base_color: config.earth_color,
            perceptual_roughness: 0.6,
            ..default()
        });

        let marker_mesh = meshes.add(Rectangle::new(1.0, 1.0));
        let orbit_path_mesh = meshes.add(generate_orbit_path(
            config.orbit_radius,
            config.orbit_divisions,
            config.dash_size,
            config.gap_size,
        ));

        let mut marker_material = |kind: SatelliteKind, selected: bool| {
            materials.add(StandardMaterial {
                base_color: config.marker_color_for(selected),
                base_color_texture: icons.get(kind).cloned(),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                cull_mode: None,
                ..default()
            })
        };
        let marker_materials = SatelliteKind::ALL.map(|kind| {
            [marker_material(kind, false), marker_material(kind, true)]
        });

        let mut path_material = |selected: bool| {
            materials.add(StandardMaterial {
                base_color: config.path_color_for(selected),
                unlit: true,
                ..default()
            })
        };
        let path_materials = [path_material(false), path_material(true)];

        Self {
            earth_mesh,
            earth_material,
            marker_mesh,
            orbit_path_mesh,
            marker_materials,
            path_materials,
        }
    }

    pub fn marker_material(&self, kind: SatelliteKind, selected: bool) -> Handle<StandardMaterial> {
        self.marker_materials[kind.index()][selected as usize].clone()
    }

    pub fn path_material(&self, selected: bool) -> Handle<StandardMaterial> {
        self.path_materials[selected as usize].clone()
    }
}
