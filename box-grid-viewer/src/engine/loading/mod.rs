//! Startup asset loading.

/// JSON viewer settings asset and its handle-polling loader.
pub mod settings_loader;
