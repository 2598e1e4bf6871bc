use bevy::math::Vec3;

/// Edge length of each wireframe cube frame (world units)
pub const CUBE_SIZE: f32 = 40.0;

/// Radius of the corner marker spheres
pub const MARKER_RADIUS: f32 = 3.0;

/// Corner markers per box group (one per cube vertex)
pub const MARKERS_PER_GROUP: usize = 8;

/// Spacing between box group centres on the grid
pub const GRID_STEP: f32 = 100.0;

/// Depth jitter half-range; each group's z is sampled from [-DEPTH_JITTER, DEPTH_JITTER)
pub const DEPTH_JITTER: f32 = 250.0;

/// Grid width used when no settings file overrides it
pub const DEFAULT_GRID_WIDTH: i32 = 10;

/// Spot light position, above and in front of the grid
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 500.0, 2000.0);

/// Background clear colour components (light grey, 0xf0f0f0)
pub const CLEAR_COLOR: [f32; 3] = [0.94, 0.94, 0.94];

/// Ambient fill colour components (0x505050)
pub const AMBIENT_COLOR: [f32; 3] = [0.314, 0.314, 0.314];
