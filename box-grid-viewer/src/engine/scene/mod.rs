//! Scene composition: procedurally generated box groups on a jittered grid.

/// Box group factory: one wireframe cube frame plus eight coloured corner
/// markers under a shared one-shot rotation.
pub mod box_group;

/// Grid populator: validated width, cell layout, depth jitter, and marker
/// registration.
pub mod grid;

/// Seedable scene randomness and the sampling helpers built on it.
pub mod rng;
