//! Recursive burst generation.
//!
//! One call produces the whole tree below a parent as a side effect on the
//! registry and the scene; nothing is returned. No parent/child links are
//! stored - child positions come from offset arithmetic alone.

use crate::scene::SceneBackend;

use super::config::FractalConfig;
use super::cube::Cube;
use super::registry::CubeRegistry;

/// Generate the full subdivision tree below `parent`.
///
/// Base case `remaining_depth == 0`: nothing is produced. Otherwise exactly
/// 8 children are created in octant order 0..7; each child is created,
/// inserted into the scene, registered, and then recursed into before its
/// next sibling (pre-order).
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "subdivision::generate"))]
pub fn generate<S: SceneBackend>(
  parent: &Cube,
  remaining_depth: u32,
  config: &FractalConfig,
  registry: &mut CubeRegistry<S::Handle>,
  scene: &mut S,
) {
  if remaining_depth == 0 {
    return;
  }

  for octant in 0u8..8 {
    let child = parent.child(octant, remaining_depth, config.offset);

    let handle = scene.create_cube_resource(config.cube_size, child.color_intensity());
    scene.insert_into_scene(&handle, child.position, &child.id);
    registry.insert(child.clone(), handle);

    generate(&child, remaining_depth - 1, config, registry, scene);
  }
}

/// Total cube count of a full burst at `depth`: `8 + 8^2 + ... + 8^depth`.
///
/// `depth` is expected to be clamped (`FractalConfig::clamp_depth`) before
/// the count can overflow.
pub fn burst_size(depth: u32) -> usize {
  (1..=depth).map(|level| 8usize.pow(level)).sum()
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
