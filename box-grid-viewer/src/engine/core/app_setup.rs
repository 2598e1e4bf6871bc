use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::camera::{FAR_PLANE, FOV_DEGREES, NEAR_PLANE, START_DISTANCE};
use constants::scene::{AMBIENT_COLOR, CLEAR_COLOR, LIGHT_POSITION};

use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::camera::viewport::sync_projection_on_resize;
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::settings_loader::{
    SettingsLoader, ViewerSettings, poll_settings, start_loading,
};
use crate::engine::scene::grid::spawn_box_grid;
use crate::engine::systems::hud::{fps_text_update_system, pick_readout_update, spawn_hud};
use crate::tools::picker::PickerPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(WireframePlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ViewerSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerSettings>::new(&["json"]))
        .add_plugins(PickerPlugin)
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::BLACK,
        })
        .insert_resource(ClearColor(Color::srgb(
            CLEAR_COLOR[0],
            CLEAR_COLOR[1],
            CLEAR_COLOR[2],
        )))
        .insert_resource(AmbientLight {
            color: Color::srgb(AMBIENT_COLOR[0], AMBIENT_COLOR[1], AMBIENT_COLOR[2]),
            brightness: 300.0,
            ..default()
        })
        .init_state::<AppState>()
        .init_resource::<SettingsLoader>()
        .init_resource::<OrbitCamera>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(Update, poll_settings.run_if(in_state(AppState::Loading)))
        .add_systems(OnEnter(AppState::Running), spawn_box_grid)
        .add_systems(
            Update,
            (
                camera_controller,
                sync_projection_on_resize,
                fps_text_update_system,
                pick_readout_update,
            )
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

// Startup system: lighting, camera, and HUD; the grid itself waits for settings
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_camera(&mut commands);
    spawn_hud(&mut commands);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        SpotLight {
            range: 5_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, START_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
