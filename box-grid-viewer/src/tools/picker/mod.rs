//! Pointer picking for corner markers.
//!
//! The grid populator registers every marker sphere in the
//! [`registry::PickableRegistry`]. On left click the picker turns the cursor
//! position into a world-space ray through the camera, tests it against every
//! registered marker, and recolours the nearest hit's cube frame with the
//! marker's colour. Exact distance ties go to the earlier-registered marker.

/// Ray intersection test for marker spheres.
pub mod ray;

/// Append-only index of pickable marker entities.
pub mod registry;

/// Click handling: ray resolution and the cube frame recolour.
pub mod selection;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use registry::PickableRegistry;
use selection::{MarkerPicked, recolor_cube_on_click};

// Registers the pick registry, event, and click handler.
pub struct PickerPlugin;

impl Plugin for PickerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickableRegistry>()
            .add_event::<MarkerPicked>()
            .add_systems(
                Update,
                recolor_cube_on_click.run_if(in_state(AppState::Running)),
            );
    }
}
