//! Orbit camera controller.
//!
//! Left-click drag orbits around a fixed focus point; scroll wheel zooms.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

/// Orbit camera component: spherical coordinates around a focus point.
#[derive(Component)]
pub struct OrbitCamera {
	/// Point the camera orbits and looks at.
	pub focus: Vec3,
	/// Distance from the focus.
	pub radius: f32,
	/// Current yaw (horizontal rotation) in radians.
	pub yaw: f32,
	/// Current pitch (vertical rotation) in radians.
	pub pitch: f32,
	/// Mouse sensitivity in radians per pixel.
	pub sensitivity: f32,
}

impl OrbitCamera {
	/// Orbit `focus`, starting from `position`.
	pub fn looking_from(position: Vec3, focus: Vec3) -> Self {
		let offset = position - focus;
		let radius = offset.length().max(0.01);
		Self {
			focus,
			radius,
			yaw: offset.x.atan2(offset.z),
			pitch: -(offset.y / radius).asin(),
			sensitivity: 0.005,
		}
	}
}

fn orbit_transform(orbit: &OrbitCamera) -> Transform {
	let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
	let position = orbit.focus + rotation * Vec3::new(0.0, 0.0, orbit.radius);
	Transform::from_translation(position).looking_at(orbit.focus, Vec3::Y)
}

/// System to update the orbit camera based on input.
pub fn orbit_camera(
	mouse_button: Res<ButtonInput<MouseButton>>,
	mouse_motion: Res<AccumulatedMouseMotion>,
	mouse_scroll: Res<AccumulatedMouseScroll>,
	mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
	let Ok((mut orbit, mut transform)) = query.single_mut() else {
		return;
	};

	// Mouse orbit (left-click drag)
	if mouse_button.pressed(MouseButton::Left) {
		let delta = mouse_motion.delta;
		orbit.yaw -= delta.x * orbit.sensitivity;
		orbit.pitch -= delta.y * orbit.sensitivity;
		// Clamp pitch to prevent gimbal lock
		orbit.pitch = orbit.pitch.clamp(-1.5, 1.5);
	}

	// Zoom proportional to distance
	let scroll = mouse_scroll.delta.y;
	if scroll != 0.0 {
		orbit.radius -= scroll * orbit.radius * 0.1;
		orbit.radius = orbit.radius.clamp(5.0, 200.0);
	}

	*transform = orbit_transform(&orbit);
}
