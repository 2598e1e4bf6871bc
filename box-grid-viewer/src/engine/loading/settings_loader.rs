use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::Deserialize;

use constants::camera::START_DISTANCE;
use constants::scene::DEFAULT_GRID_WIDTH;

use crate::engine::camera::orbit_camera::OrbitCamera;
use crate::engine::core::app_state::AppState;
use crate::engine::scene::rng::SceneRng;

const SETTINGS_PATH: &str = "viewer_settings.json";

/// Viewer configuration, loaded from `assets/viewer_settings.json`.
///
/// Every field has a default so a partial file is fine; a missing or
/// malformed file falls back to defaults entirely.
#[derive(Asset, TypePath, Resource, Clone, Debug, Deserialize)]
pub struct ViewerSettings {
    /// Box groups along each grid axis
    #[serde(default = "default_grid_width")]
    pub grid_width: i32,
    /// Scene RNG seed; omit for a fresh layout every launch
    #[serde(default)]
    pub seed: Option<u64>,
    /// Initial orbit distance from the grid centre
    #[serde(default = "default_camera_distance")]
    pub camera_distance: f32,
}

fn default_grid_width() -> i32 {
    DEFAULT_GRID_WIDTH
}

fn default_camera_distance() -> f32 {
    START_DISTANCE
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            grid_width: default_grid_width(),
            seed: None,
            camera_distance: default_camera_distance(),
        }
    }
}

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<ViewerSettings>>,
}

// Start the settings load
pub fn start_loading(mut loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(SETTINGS_PATH));
}

/// Poll the settings handle each frame of the loading state. Once settled —
/// loaded or failed — install the settings and the seeded RNG, then hand over
/// to the runtime state.
pub fn poll_settings(
    loader: Res<SettingsLoader>,
    settings_assets: Res<Assets<ViewerSettings>>,
    asset_server: Res<AssetServer>,
    mut orbit: ResMut<OrbitCamera>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = loader.handle else {
        return;
    };

    let settings = if let Some(loaded) = settings_assets.get(handle) {
        info!("viewer settings loaded from {SETTINGS_PATH}");
        loaded.clone()
    } else {
        match asset_server.load_state(handle) {
            LoadState::Failed(_) => {
                warn!("could not load {SETTINGS_PATH}, falling back to defaults");
                ViewerSettings::default()
            }
            // Still loading
            _ => return,
        }
    };

    orbit.distance = settings.camera_distance;
    commands.insert_resource(SceneRng::from_seed(settings.seed));
    commands.insert_resource(settings);
    next_state.set(AppState::Running);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_settings_file_deserialises() {
        let settings: ViewerSettings =
            serde_json::from_str(r#"{ "grid_width": 4, "seed": 7, "camera_distance": 250.0 }"#)
                .unwrap();
        assert_eq!(settings.grid_width, 4);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.camera_distance, 250.0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: ViewerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.grid_width, DEFAULT_GRID_WIDTH);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.camera_distance, START_DISTANCE);
    }

    #[test]
    fn fractional_grid_width_is_rejected() {
        let result = serde_json::from_str::<ViewerSettings>(r#"{ "grid_width": 2.5 }"#);
        assert!(result.is_err());
    }
}
