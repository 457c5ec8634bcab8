//! Startup and per-frame systems.

use bevy::prelude::*;

use crate::components::FractalRoot;
use crate::resources::{CubeEntityIndex, FractalParams, FractalState};
use crate::scene::BevyScene;

/// Spawn the fixed root cube.
///
/// Created once, outside the registry, with the reference's uncolored
/// material; rebuilds never touch it.
pub fn setup_fractal_root(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  state: Res<FractalState>,
) {
  let config = &state.world.config;
  let size = config.cube_size;

  commands.spawn((
    Mesh3d(meshes.add(Cuboid::new(size, size, size))),
    MeshMaterial3d(materials.add(StandardMaterial::default())),
    Transform::from_translation(config.root_position),
    Name::new("fractal root"),
    FractalRoot,
  ));
}

/// Per-frame tick of the rebuild controller.
///
/// Syncs the size parameter into the config (effective at the next
/// rebuild), then hands the controller a scene over this frame's borrows.
pub fn drive_fractal(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  mut index: ResMut<CubeEntityIndex>,
  params: Res<FractalParams>,
  mut state: ResMut<FractalState>,
) {
  state.world.config.cube_size = params.cube_size;

  let mut scene = BevyScene {
    commands: &mut commands,
    meshes: &mut meshes,
    materials: &mut materials,
    index: &mut index,
  };

  if let Some(stats) = state.world.tick(params.iterations, &mut scene) {
    info!(
      "[Fractal] rebuilt at depth {}: {} disposed, {} created in {:?}",
      stats.depth, stats.cubes_disposed, stats.cubes_created, stats.duration
    );
  }
}
