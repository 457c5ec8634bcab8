//! Bevy presentation layer for fractal_plugin.
//!
//! This crate bridges the engine-independent subdivision core with Bevy:
//! asset-backed cube resources, an entity index for identifier lookups, and
//! the per-frame drive system that ticks the rebuild controller.

pub mod components;
pub mod resources;
pub mod scene;
pub mod systems;


use bevy::prelude::*;
pub use components::*;
pub use resources::*;
pub use scene::{BevyScene, CubeVisual};

/// Bevy plugin for fractal cube rendering.
pub struct FractalBevyPlugin;

impl Plugin for FractalBevyPlugin {
	fn build(&self, app: &mut App) {
		app.init_resource::<FractalParams>()
			.init_resource::<CubeEntityIndex>()
			.init_resource::<FractalState>()
			.add_systems(Startup, systems::setup_fractal_root)
			.add_systems(Update, systems::drive_fractal);
	}
}
