use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use constants::scene::DEPTH_JITTER;

/// Scene randomness source. Seeded runs reproduce the exact same layout,
/// colours and rotations included.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Random marker colour: three channels drawn independently from [0, 1).
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::srgb(
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
    )
}

/// One-shot group orientation: Euler angles independently uniform in [0, 2π).
pub fn random_rotation<R: Rng>(rng: &mut R) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
    )
}

/// Per-group depth, uniform in [-DEPTH_JITTER, DEPTH_JITTER).
pub fn random_depth<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(-DEPTH_JITTER..DEPTH_JITTER)
}
