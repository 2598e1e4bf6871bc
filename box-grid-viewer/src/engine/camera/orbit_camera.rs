use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::camera::{
    MAX_DISTANCE, MIN_DISTANCE, PITCH_LIMIT, PITCH_SENSITIVITY, START_DISTANCE, YAW_SENSITIVITY,
};

/// Orbit state around the grid centre. The camera transform chases this each
/// frame, so input only ever mutates the orbit parameters.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: START_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Camera pose for the current orbit state: positioned behind the focus
    /// point along the rotated +Z axis, facing it.
    pub fn target_pose(&self) -> (Vec3, Quat) {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let position = self.focus_point + rotation * (Vec3::Z * self.distance);
        (position, rotation)
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Read mouse motion
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse motion with right click orbits around the focus point
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        orbit.yaw += -mouse_delta.x * YAW_SENSITIVITY;
        orbit.pitch += -mouse_delta.y * PITCH_SENSITIVITY;
        orbit.pitch = orbit.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    // Mouse wheel scroll accumulation (line and pixel scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Dolly towards or away from the focus point
    if scroll_accum.abs() > f32::EPSILON {
        let dolly_speed = (orbit.distance * 0.15).clamp(5.0, 800.0);
        orbit.distance =
            (orbit.distance - scroll_accum * dolly_speed).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    let (target_pos, target_rot) = orbit.target_pose();
    let lerp_speed = 12.0 * time.delta_secs();
    camera_transform.translation = camera_transform
        .translation
        .lerp(target_pos, lerp_speed.min(1.0));
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(target_rot, lerp_speed.min(1.0));
}
