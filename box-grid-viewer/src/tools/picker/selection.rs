use bevy::pbr::wireframe::WireframeColor;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::ray::ray_sphere_hit_t;
use super::registry::PickableRegistry;
use crate::engine::scene::box_group::{BoxGroup, CornerMarker};

/// Fired after a successful pick, once the cube frame colour is written.
#[derive(Event)]
pub struct MarkerPicked {
    pub marker: Entity,
    pub group: Entity,
    pub color: Color,
}

/// Nearest candidate by ray distance. Ties keep the earliest entry, so
/// feeding candidates in registry order makes first-registered win.
pub fn nearest<T: Copy>(candidates: impl IntoIterator<Item = (T, f32)>) -> Option<(T, f32)> {
    let mut best: Option<(T, f32)> = None;
    for (item, t) in candidates {
        if best.is_none() || t < best.unwrap().1 {
            best = Some((item, t));
        }
    }
    best
}

/// Resolve a pick ray against markers given as (world centre, radius) in
/// registry order; returns the winning marker's index.
pub fn resolve_pick(
    ray_origin: Vec3,
    ray_direction: Vec3,
    markers: &[(Vec3, f32)],
) -> Option<usize> {
    nearest(
        markers
            .iter()
            .enumerate()
            .filter_map(|(index, (center, radius))| {
                ray_sphere_hit_t(ray_origin, ray_direction, *center, *radius).map(|t| (index, t))
            }),
    )
    .map(|(index, _)| index)
}

/// Recolours a clicked marker's cube frame with that marker's colour.
///
/// A click that hits no marker is a no-op; a hit mutates exactly one
/// `WireframeColor` and nothing else, so repeat clicks are idempotent.
pub fn recolor_cube_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    registry: Res<PickableRegistry>,
    markers: Query<(
        &GlobalTransform,
        &CornerMarker,
        &MeshMaterial3d<StandardMaterial>,
        &ChildOf,
    )>,
    groups: Query<&BoxGroup>,
    mut frames: Query<&mut WireframeColor>,
    materials: Res<Assets<StandardMaterial>>,
    mut picked: EventWriter<MarkerPicked>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if registry.is_empty() {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };

    // Pixel coordinates -> NDC -> world-space ray, courtesy of the camera
    let Ok(ray) = camera.viewport_to_world(cam_xf, cursor_pos) else {
        return;
    };
    let origin = ray.origin;
    let dir = ray.direction.as_vec3();

    // Snapshot the registry in order; the index into `spheres` maps straight
    // back to the entity list, so tie-breaks stay in registration order
    let mut entities = Vec::with_capacity(registry.len());
    let mut spheres = Vec::with_capacity(registry.len());
    for &entity in registry.all() {
        if let Ok((xf, marker, _, _)) = markers.get(entity) {
            entities.push(entity);
            spheres.push((xf.translation(), marker.radius));
        }
    }

    let Some(index) = resolve_pick(origin, dir, &spheres) else {
        return;
    };
    let hit_entity = entities[index];

    let Ok((_, _, material_handle, child_of)) = markers.get(hit_entity) else {
        return;
    };
    let Some(material) = materials.get(&material_handle.0) else {
        return;
    };
    let color = material.base_color;

    // The owning group names its cube frame directly
    let group = child_of.parent();
    let Ok(box_group) = groups.get(group) else {
        return;
    };
    let Ok(mut frame) = frames.get_mut(box_group.cube) else {
        return;
    };

    frame.color = color;
    picked.write(MarkerPicked {
        marker: hit_entity,
        group,
        color,
    });
}
