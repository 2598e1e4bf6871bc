/// Vertical field of view in degrees
pub const FOV_DEGREES: f32 = 70.0;

/// Near clip plane distance
pub const NEAR_PLANE: f32 = 1.0;

/// Far clip plane distance
pub const FAR_PLANE: f32 = 100_000.0;

/// Initial orbit distance from the grid centre when no settings file overrides it
pub const START_DISTANCE: f32 = 400.0;

/// Orbit sensitivity, radians per pixel of mouse motion
pub const YAW_SENSITIVITY: f32 = 0.0035;
pub const PITCH_SENSITIVITY: f32 = 0.0030;

/// Pitch clamp keeps the camera off the poles
pub const PITCH_LIMIT: f32 = 1.55;

/// Dolly distance clamp (world units)
pub const MIN_DISTANCE: f32 = 60.0;
pub const MAX_DISTANCE: f32 = 20_000.0;
