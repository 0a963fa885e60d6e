//! Camera-facing quads

use bevy::prelude::*;

use crate::visualization::camera::MainCamera;

/// Keeps the entity's quad facing the main camera
#[derive(Component)]
pub struct Billboard;

/// World rotation of `entity` composed from the local transforms of its ancestors
///
/// Groups spawned by a synchronization earlier in the frame have no
/// propagated `GlobalTransform` yet, so the chain of local rotations is used.
fn world_rotation(
    entity: Entity,
    ancestors: &Query<(&Transform, Option<&ChildOf>), Without<Billboard>>,
) -> Quat {
    let mut rotation = Quat::IDENTITY;
    let mut current = Some(entity);
    while let Some(entity) = current {
        let Ok((transform, child_of)) = ancestors.get(entity) else {
            break;
        };
        rotation = transform.rotation * rotation;
        current = child_of.map(ChildOf::parent);
    }
    rotation
}

/// Counter-rotate billboards so their world rotation matches the camera's
pub fn face_camera_system(
    camera: Query<&Transform, (With<MainCamera>, Without<Billboard>)>,
    ancestors: Query<(&Transform, Option<&ChildOf>), Without<Billboard>>,
    mut billboards: Query<(&mut Transform, Option<&ChildOf>), With<Billboard>>,
) {
    let Ok(camera) = camera.single() else {
        return;
    };

    for (mut transform, child_of) in &mut billboards {
        let parent_rotation = child_of
            .map(|child_of| world_rotation(child_of.parent(), &ancestors))
            .unwrap_or(Quat::IDENTITY);
        transform.rotation = parent_rotation.inverse() * camera.rotation;
    }
}
