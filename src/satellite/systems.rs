//! Satellite synchronization: rebuilds every satellite group from the feed

use bevy::prelude::*;
use rand::Rng;

use crate::animation::FrameLoop;
use crate::animation::systems::marker_position;
use crate::core::coordinates::orbital_plane_rotation;
use crate::feed::{SatelliteFeed, SatelliteKind};
use crate::satellite::components::{MarkerRef, OrbitSpeed, SatelliteGroup, SatelliteMarker};
use crate::satellite::error::SyncError;
use crate::satellite::resources::{OrbitAngles, OrbitRng, SyncReport};
use crate::visualization::{Billboard, Earth, OrbitPath, SceneAssets, VisualizationConfig};

/// Everything needed to spawn one satellite group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPlan {
    pub id: String,
    pub name: String,
    pub kind: SatelliteKind,
    pub rotation: Quat,
    pub speed: OrbitSpeed,
    pub selected: bool,
}

/// Turn the feed into one group plan per satellite, in feed order
///
/// All types are validated before any orbit plane is assigned, so a rejected
/// feed leaves `angles` untouched.
pub fn plan_groups<R: Rng>(
    feed: &SatelliteFeed,
    angles: &mut OrbitAngles,
    rng: &mut R,
) -> Result<Vec<GroupPlan>, SyncError> {
    let kinds = feed
        .satellites
        .iter()
        .map(|sat| sat.parsed_kind())
        .collect::<Result<Vec<_>, _>>()?;

    let plans = feed
        .satellites
        .iter()
        .zip(kinds)
        .map(|(sat, kind)| {
            let plane = angles.get_or_insert(&sat.id, rng);
            GroupPlan {
                id: sat.id.clone(),
                name: sat.name.clone(),
                kind,
                rotation: orbital_plane_rotation(
                    plane.longitude,
                    plane.latitude,
                    sat.angle.to_radians(),
                ),
                speed: OrbitSpeed::from_reverse(sat.reverse),
                selected: feed.is_selected(&sat.id),
            }
        })
        .collect();
    Ok(plans)
}

/// Replace all satellite groups when the feed changed or the scene was just mounted
#[allow(clippy::too_many_arguments)]
pub fn synchronize_satellites_system(
    mut commands: Commands,
    feed: Res<SatelliteFeed>,
    scene: Option<Res<SceneAssets>>,
    config: Res<VisualizationConfig>,
    frame_loop: Option<Res<FrameLoop>>,
    mut angles: ResMut<OrbitAngles>,
    mut rng: ResMut<OrbitRng>,
    mut report: ResMut<SyncReport>,
    earth: Query<Entity, With<Earth>>,
    groups: Query<Entity, With<SatelliteGroup>>,
) {
    let Some(scene) = scene else {
        return;
    };
    if !feed.is_changed() && !scene.is_added() {
        return;
    }
    let Ok(earth) = earth.single() else {
        warn!("synchronize_satellites_system: earth entity not found");
        return;
    };

    let plans = match plan_groups(&feed, &mut angles, &mut rng.0) {
        Ok(plans) => plans,
        Err(err) => {
            // one log line per distinct failure, not per feed edit
            if report.last_error.as_ref() != Some(&err) {
                error!("Satellite synchronization rejected: {}", err);
            }
            report.last_error = Some(err);
            return;
        }
    };

    for entity in &groups {
        commands.entity(entity).despawn();
    }

    let elapsed_ms = frame_loop.map(|l| l.elapsed_ms()).unwrap_or(0.0);
    for plan in &plans {
        spawn_group(&mut commands, earth, plan, &scene, &config, elapsed_ms);
    }

    report.generation += 1;
    report.group_count = plans.len();
    report.last_error = None;
    debug!(
        "Synchronized {} satellites (generation {})",
        report.group_count,
        report.generation
    );
}

/// Spawn a group under `earth` with its marker and orbit path
fn spawn_group(
    commands: &mut Commands,
    earth: Entity,
    plan: &GroupPlan,
    scene: &SceneAssets,
    config: &VisualizationConfig,
    elapsed_ms: f32,
) -> Entity {
    let group = commands
        .spawn((
            SatelliteGroup {
                id: plan.id.clone(),
            },
            plan.speed,
            Transform::from_rotation(plan.rotation),
            Visibility::Inherited,
            ChildOf(earth),
            Name::new(plan.name.clone()),
        ))
        .id();

    let marker = commands
        .spawn((
            Mesh3d(scene.marker_mesh.clone()),
            MeshMaterial3d(scene.marker_material(plan.kind, plan.selected)),
            Transform::from_translation(marker_position(
                config.orbit_radius,
                plan.speed.0,
                elapsed_ms,
                config.orbit_rate,
            ))
            .with_scale(Vec3::splat(config.marker_scale)),
            SatelliteMarker,
            Billboard,
            ChildOf(group),
        ))
        .id();

    commands.spawn((
        Mesh3d(scene.orbit_path_mesh.clone()),
        MeshMaterial3d(scene.path_material(plan.selected)),
        Transform::IDENTITY,
        OrbitPath,
        ChildOf(group),
    ));

    commands.entity(group).insert(MarkerRef(marker));
    group
}

/// Orbit planes live as long as one mount
pub fn forget_orbit_angles(mut angles: ResMut<OrbitAngles>) {
    if angles.is_empty() {
        return;
    }
    debug!("Forgetting {} orbit planes", angles.len());
    angles.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::SatelliteInfo;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sat(id: &str, kind: SatelliteKind, reverse: bool) -> SatelliteInfo {
        SatelliteInfo::new(id, id, 30.0, kind, reverse)
    }

    fn feed(sats: Vec<SatelliteInfo>, selected: Option<&str>) -> SatelliteFeed {
        SatelliteFeed {
            satellites: sats,
            selected: selected.map(str::to_string),
        }
    }

    #[test]
    fn test_one_plan_per_satellite() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut angles = OrbitAngles::default();
        let f = feed(
            vec![
                sat("a", SatelliteKind::Science, false),
                sat("b", SatelliteKind::Military, true),
                sat("c", SatelliteKind::Communication, false),
            ],
            None,
        );
        let plans = plan_groups(&f, &mut angles, &mut rng).expect("valid feed");
        assert_eq!(plans.len(), 3);
        assert_eq!(
            plans.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
        assert_eq!(plans[0].speed, OrbitSpeed(1.0));
        assert_eq!(plans[1].speed, OrbitSpeed(-1.0));
    }

    #[test]
    fn test_planes_stable_across_resync_and_reorder() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut angles = OrbitAngles::default();
        let first = plan_groups(
            &feed(
                vec![
                    sat("a", SatelliteKind::Science, false),
                    sat("b", SatelliteKind::Science, false),
                ],
                None,
            ),
            &mut angles,
            &mut rng,
        )
        .expect("valid feed");

        let reordered = plan_groups(
            &feed(
                vec![
                    sat("b", SatelliteKind::Science, false),
                    sat("a", SatelliteKind::Science, false),
                ],
                Some("a"),
            ),
            &mut angles,
            &mut rng,
        )
        .expect("valid feed");

        assert_eq!(first[0].rotation, reordered[1].rotation);
        assert_eq!(first[1].rotation, reordered[0].rotation);
    }

    #[test]
    fn test_plane_survives_absence() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut angles = OrbitAngles::default();
        let with_a = feed(vec![sat("a", SatelliteKind::Science, false)], None);
        let without_a = feed(vec![sat("b", SatelliteKind::Science, false)], None);

        let before = plan_groups(&with_a, &mut angles, &mut rng).expect("valid feed");
        plan_groups(&without_a, &mut angles, &mut rng).expect("valid feed");
        let after = plan_groups(&with_a, &mut angles, &mut rng).expect("valid feed");
        assert_eq!(before[0].rotation, after[0].rotation);
    }

    #[test]
    fn test_selection_marks_exactly_one() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut angles = OrbitAngles::default();
        let sats = vec![
            sat("a", SatelliteKind::Science, false),
            sat("b", SatelliteKind::Science, false),
            sat("c", SatelliteKind::Science, false),
        ];

        let plans =
            plan_groups(&feed(sats.clone(), Some("b")), &mut angles, &mut rng).expect("valid");
        let selected: Vec<_> = plans.iter().filter(|p| p.selected).map(|p| &p.id).collect();
        assert_eq!(selected, ["b"]);

        let plans = plan_groups(&feed(sats, Some("zzz")), &mut angles, &mut rng).expect("valid");
        assert!(plans.iter().all(|p| !p.selected));
    }

    #[test]
    fn test_inclination_is_third_rotation() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut angles = OrbitAngles::default();
        let mut s = sat("a", SatelliteKind::Science, false);
        s.angle = 90.0;
        let plans = plan_groups(&feed(vec![s], None), &mut angles, &mut rng).expect("valid");

        let plane = angles.get("a").expect("plane assigned");
        let expected = orbital_plane_rotation(
            plane.longitude,
            plane.latitude,
            std::f32::consts::FRAC_PI_2,
        );
        assert!(plans[0].rotation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_unknown_type_rejects_whole_feed() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut angles = OrbitAngles::default();
        let mut bad = sat("bad", SatelliteKind::Science, false);
        bad.kind = "weather".to_string();

        let err = plan_groups(
            &feed(vec![sat("good", SatelliteKind::Science, false), bad], None),
            &mut angles,
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SyncError::UnknownSatelliteType {
                id: "bad".to_string(),
                kind: "weather".to_string()
            }
        );
        assert!(angles.is_empty(), "rejected feed must not assign planes");
    }

    #[test]
    fn test_empty_feed() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut angles = OrbitAngles::default();
        let plans = plan_groups(&feed(vec![], Some("a")), &mut angles, &mut rng).expect("valid");
        assert!(plans.is_empty());
    }
}
