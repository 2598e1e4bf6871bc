/// Camera frustum and orbit controller tuning.
pub mod camera;

/// Box grid geometry and lighting constants.
pub mod scene;
