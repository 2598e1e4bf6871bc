//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, the loading/running
//! state transition, and plugin initialisation.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the wireframe pass, settings loading, lighting,
/// camera, HUD, and the picker plugin.
pub mod app_setup;

/// Application state machine: settings loading, then runtime.
pub mod app_state;

/// Window configuration: title and vsync settings.
pub mod window_config;
