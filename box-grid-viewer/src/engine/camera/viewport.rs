use bevy::prelude::*;
use bevy::window::WindowResized;

/// Aspect ratio for a viewport size.
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    width / height
}

/// Refresh the perspective projection when the window is resized. The
/// renderer resizes its own surface; only the projection needs a nudge here.
/// Idempotent under repeated events with identical dimensions.
pub fn sync_projection_on_resize(
    mut resize_events: EventReader<WindowResized>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(size) = resize_events.read().last().map(|e| (e.width, e.height)) else {
        return;
    };

    for mut projection in &mut projections {
        if let Projection::Perspective(ref mut perspective) = *projection {
            perspective.aspect_ratio = aspect_ratio(size.0, size.1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(aspect_ratio(1920.0, 1080.0), 1920.0 / 1080.0);
        assert_eq!(aspect_ratio(800.0, 800.0), 1.0);
    }

    #[test]
    fn aspect_is_idempotent() {
        let first = aspect_ratio(1024.0, 768.0);
        let second = aspect_ratio(1024.0, 768.0);
        assert_eq!(first, second);
    }
}
