//! Scene bootstrap and release

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::animation::FrameLoop;
use crate::core::lifecycle::SceneEntity;
use crate::visualization::assets::SceneAssets;
use crate::visualization::camera::spawn_camera;
use crate::visualization::config::VisualizationConfig;
use crate::visualization::earth::Earth;
use crate::visualization::icons::IconTextures;
use crate::visualization::lighting::spawn_lights;

/// Build the scene for a new mount and start its frame loop
pub fn bootstrap_scene(
    mut commands: Commands,
    config: Res<VisualizationConfig>,
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    commands.insert_resource(ClearColor(config.clear_color));
    spawn_lights(&mut commands, &config);
    spawn_camera(&mut commands, &config);

    let icons = IconTextures::rasterize_all(&mut images, config.icon_size);
    let assets = SceneAssets::build(&config, &mut meshes, &mut materials, &icons);

    commands.spawn((
        Mesh3d(assets.earth_mesh.clone()),
        MeshMaterial3d(assets.earth_material.clone()),
        Transform::IDENTITY,
        Visibility::Visible,
        Earth,
        SceneEntity,
        Name::new("Earth"),
    ));

    commands.insert_resource(icons);
    commands.insert_resource(assets);
    commands.insert_resource(FrameLoop::running_since(time.elapsed()));
    info!("Scene mounted");
}

/// Drop the shared handles of the mount so meshes, materials and icons are freed
///
/// Clear color and ambient light are app-wide resources the renderer always
/// reads, so they go back to their defaults instead of being removed.
pub fn release_scene_assets(mut commands: Commands) {
    commands.remove_resource::<SceneAssets>();
    commands.remove_resource::<IconTextures>();
    commands.insert_resource(ClearColor::default());
    commands.insert_resource(GlobalAmbientLight::default());
    info!("Scene unmounted");
}
