use bevy::app::AppExit;
use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;

use constants::scene::GRID_STEP;

use super::box_group::{BoxGroupAssets, spawn_box_group};
use super::rng::{SceneRng, random_depth};
use crate::engine::loading::settings_loader::ViewerSettings;
use crate::tools::picker::registry::PickableRegistry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid width must be a positive integer, got {0}")]
    InvalidWidth(i32),
}

/// Cell centres of a width×width grid on the x/y plane.
///
/// bound = width/2 · step; coordinates start at -bound, advance in steps of
/// `GRID_STEP`, and stay strictly below +bound. Odd widths therefore sit half
/// a step off true centring; that asymmetry is the intended layout.
pub fn grid_positions(width: i32) -> Result<Vec<Vec2>, GridError> {
    if width <= 0 {
        return Err(GridError::InvalidWidth(width));
    }

    let bound = width as f32 / 2.0 * GRID_STEP;
    let mut cells = Vec::with_capacity((width * width) as usize);
    for ix in 0..width {
        let x = -bound + ix as f32 * GRID_STEP;
        for iy in 0..width {
            let y = -bound + iy as f32 * GRID_STEP;
            cells.push(Vec2::new(x, y));
        }
    }

    Ok(cells)
}

/// Fill the scene with box groups and register every marker for picking.
///
/// Validation happens before any spawn or asset insertion, so an invalid
/// width leaves scene and registry untouched.
pub fn populate_grid<R: Rng>(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut PickableRegistry,
    rng: &mut R,
    width: i32,
) -> Result<usize, GridError> {
    let cells = grid_positions(width)?;

    let assets = BoxGroupAssets::create(meshes, materials);
    for cell in &cells {
        let position = cell.extend(random_depth(rng));
        let spawned = spawn_box_group(commands, &assets, materials, rng, position);
        debug!(
            "box group {:?} (cube {:?}) at {position}",
            spawned.group, spawned.cube
        );
        for marker in spawned.markers {
            registry.register(marker);
        }
    }

    Ok(cells.len())
}

/// Build the grid once settings are in. An invalid width is a configuration
/// error: report it and shut the app down rather than run an empty scene.
pub fn spawn_box_grid(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<PickableRegistry>,
    mut rng: ResMut<SceneRng>,
    settings: Res<ViewerSettings>,
    mut exit: EventWriter<AppExit>,
) {
    match populate_grid(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut registry,
        &mut rng.0,
        settings.grid_width,
    ) {
        Ok(count) => info!(
            "populated {count} box groups ({} pickable markers)",
            registry.len()
        ),
        Err(e) => {
            error!("cannot build box grid: {e}");
            exit.write(AppExit::error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::box_group::{BoxGroup, CornerMarker, CubeFrame};
    use bevy::ecs::world::CommandQueue;
    use bevy::pbr::wireframe::WireframeColor;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn cell_count_is_width_squared() {
        for width in [1, 2, 3, 4] {
            let cells = grid_positions(width).unwrap();
            assert_eq!(cells.len(), (width * width) as usize);
        }
    }

    #[test]
    fn cells_stay_strictly_below_the_positive_bound() {
        for width in [1, 2, 3, 4, 7] {
            let bound = width as f32 / 2.0 * GRID_STEP;
            for cell in grid_positions(width).unwrap() {
                assert!(cell.x >= -bound && cell.x < bound);
                assert!(cell.y >= -bound && cell.y < bound);
            }
        }
    }

    #[test]
    fn even_widths_are_symmetric_about_origin() {
        let cells = grid_positions(4).unwrap();
        let min = cells.iter().map(|c| c.x).fold(f32::INFINITY, f32::min);
        let max = cells.iter().map(|c| c.x).fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(min, -200.0);
        assert_eq!(max, 100.0);
        // -200, -100, 0, 100: symmetric cell walls, centres offset by one step
        assert_eq!(min + max, -GRID_STEP);
    }

    #[test]
    fn adjacent_cells_are_one_step_apart() {
        let cells = grid_positions(2).unwrap();
        assert_eq!(
            cells,
            vec![
                Vec2::new(-100.0, -100.0),
                Vec2::new(-100.0, 0.0),
                Vec2::new(0.0, -100.0),
                Vec2::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn non_positive_widths_fail() {
        assert_eq!(grid_positions(0), Err(GridError::InvalidWidth(0)));
        assert_eq!(grid_positions(-3), Err(GridError::InvalidWidth(-3)));
    }

    struct TestScene {
        world: World,
        meshes: Assets<Mesh>,
        materials: Assets<StandardMaterial>,
        registry: PickableRegistry,
    }

    // Drive populate_grid against a bare world, outside the app schedule
    fn populate_test_scene(width: i32, seed: u64) -> Result<(TestScene, usize), GridError> {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut meshes = Assets::<Mesh>::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let mut registry = PickableRegistry::default();
        let mut rng = StdRng::seed_from_u64(seed);

        let result = {
            let mut commands = Commands::new(&mut queue, &world);
            populate_grid(
                &mut commands,
                &mut meshes,
                &mut materials,
                &mut registry,
                &mut rng,
                width,
            )
        };
        queue.apply(&mut world);

        result.map(|count| {
            (
                TestScene {
                    world,
                    meshes,
                    materials,
                    registry,
                },
                count,
            )
        })
    }

    #[test]
    fn invalid_width_mutates_nothing() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut meshes = Assets::<Mesh>::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let mut registry = PickableRegistry::default();
        let mut rng = StdRng::seed_from_u64(7);

        let err = {
            let mut commands = Commands::new(&mut queue, &world);
            populate_grid(
                &mut commands,
                &mut meshes,
                &mut materials,
                &mut registry,
                &mut rng,
                0,
            )
            .unwrap_err()
        };

        assert_eq!(err, GridError::InvalidWidth(0));
        assert!(registry.is_empty());
        assert!(meshes.is_empty());
        assert!(materials.is_empty());
        queue.apply(&mut world);
        assert_eq!(world.entities().len(), 0);
    }

    #[test]
    fn populate_registers_eight_markers_per_group() {
        let (mut scene, count) = populate_test_scene(3, 7).unwrap();

        assert_eq!(count, 9);
        assert_eq!(scene.registry.len(), 72);

        let mut marker_query = scene.world.query::<&CornerMarker>();
        assert_eq!(marker_query.iter(&scene.world).count(), 72);

        // Every group's cube field resolves to a recolourable wireframe frame
        let mut group_query = scene.world.query::<&BoxGroup>();
        let cubes: Vec<Entity> = group_query
            .iter(&scene.world)
            .map(|group| group.cube)
            .collect();
        assert_eq!(cubes.len(), 9);
        for cube in cubes {
            assert!(scene.world.get::<CubeFrame>(cube).is_some());
            assert!(scene.world.get::<WireframeColor>(cube).is_some());
        }
    }

    #[test]
    fn markers_sit_on_cube_corners() {
        let (mut scene, _) = populate_test_scene(1, 11).unwrap();

        let mut query = scene.world.query::<(&CornerMarker, &Transform)>();
        let mut seen = 0;
        for (_, transform) in query.iter(&scene.world) {
            let p = transform.translation;
            assert_eq!(p.x.abs(), 20.0);
            assert_eq!(p.y.abs(), 20.0);
            assert_eq!(p.z.abs(), 20.0);
            seen += 1;
        }
        assert_eq!(seen, 8);
    }

    #[test]
    fn every_marker_material_is_distinct() {
        let (scene, _) = populate_test_scene(2, 3).unwrap();
        // one shared frame material + 8 per-marker materials per group
        assert_eq!(scene.materials.len(), 1 + 4 * 8);
        assert_eq!(scene.meshes.len(), 2);
    }
}
