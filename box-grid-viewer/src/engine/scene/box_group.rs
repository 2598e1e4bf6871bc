use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::prelude::*;
use rand::Rng;

use constants::scene::{CUBE_SIZE, MARKER_RADIUS, MARKERS_PER_GROUP};

use super::rng::{random_color, random_rotation};

/// A cube-plus-markers group. `cube` names the recolour target directly, so
/// picking never depends on child ordering.
#[derive(Component)]
pub struct BoxGroup {
    pub cube: Entity,
}

/// The wireframe cube frame of a box group.
#[derive(Component)]
pub struct CubeFrame;

/// A pickable corner sphere. World radius equals local radius: groups rotate
/// but never scale.
#[derive(Component)]
pub struct CornerMarker {
    pub radius: f32,
}

/// Mesh and material handles shared by every box group.
pub struct BoxGroupAssets {
    pub cube_mesh: Handle<Mesh>,
    pub marker_mesh: Handle<Mesh>,
    pub frame_material: Handle<StandardMaterial>,
}

impl BoxGroupAssets {
    pub fn create(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        // Invisible base material; the frame itself is drawn by the wireframe pass
        let frame_material = materials.add(StandardMaterial {
            base_color: Color::srgba(0.0, 0.0, 0.0, 0.0),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });

        Self {
            cube_mesh: meshes.add(Cuboid::from_size(Vec3::splat(CUBE_SIZE))),
            marker_mesh: meshes.add(Sphere::new(MARKER_RADIUS).mesh().uv(32, 18)),
            frame_material,
        }
    }
}

pub struct SpawnedBoxGroup {
    pub group: Entity,
    pub cube: Entity,
    pub markers: [Entity; MARKERS_PER_GROUP],
}

/// The eight cube corner offsets, ±half the edge length on each axis.
/// Fixed enumeration order: x varies slowest, z fastest.
pub fn corner_offsets(size: f32) -> [Vec3; MARKERS_PER_GROUP] {
    let half = size * 0.5;
    let mut offsets = [Vec3::ZERO; MARKERS_PER_GROUP];
    let mut i = 0;
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                offsets[i] = Vec3::new(sx * half, sy * half, sz * half);
                i += 1;
            }
        }
    }
    offsets
}

/// Spawn one box group at `position`: a black wireframe cube frame plus eight
/// independently coloured corner markers, the whole group under a one-shot
/// random rotation.
///
/// Registering the markers for picking is the caller's job; the factory never
/// touches the registry.
pub fn spawn_box_group<R: Rng>(
    commands: &mut Commands,
    assets: &BoxGroupAssets,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut R,
    position: Vec3,
) -> SpawnedBoxGroup {
    let group = commands
        .spawn((
            Transform::from_translation(position).with_rotation(random_rotation(rng)),
            Visibility::default(),
            Name::new("box_group"),
        ))
        .id();

    let cube = commands
        .spawn((
            Mesh3d(assets.cube_mesh.clone()),
            MeshMaterial3d(assets.frame_material.clone()),
            Transform::default(),
            Wireframe,
            WireframeColor {
                color: Color::BLACK,
            },
            CubeFrame,
            ChildOf(group),
            Name::new("cube_frame"),
        ))
        .id();

    let mut markers = [Entity::PLACEHOLDER; MARKERS_PER_GROUP];
    for (slot, offset) in markers.iter_mut().zip(corner_offsets(CUBE_SIZE)) {
        let marker_material = materials.add(StandardMaterial {
            base_color: random_color(rng),
            unlit: true,
            ..default()
        });

        *slot = commands
            .spawn((
                Mesh3d(assets.marker_mesh.clone()),
                MeshMaterial3d(marker_material),
                Transform::from_translation(offset),
                CornerMarker {
                    radius: MARKER_RADIUS,
                },
                ChildOf(group),
                Name::new("corner_marker"),
            ))
            .id();
    }

    commands.entity(group).insert(BoxGroup { cube });

    SpawnedBoxGroup {
        group,
        cube,
        markers,
    }
}
