//! FractalConfig - generation constants and the depth clamp.

use glam::Vec3;

/// Configuration for subdivision generation.
///
/// The cube set is a strict function of `root_position` and the current
/// depth parameter; everything here is fixed for the lifetime of a world
/// except `cube_size`, which hosts may retune between rebuilds.
#[derive(Clone, Debug)]
pub struct FractalConfig {
  /// Edge length passed to cube resource creation.
  pub cube_size: f32,

  /// Half-spacing between a parent's center and each child's center.
  /// Children sit at the corners of a cube of side `2 * offset`.
  pub offset: f32,

  /// World-space position of the fixed root cube.
  pub root_position: Vec3,

  /// Upper bound for the depth parameter. 8^depth cubes per level keeps
  /// this small (8^5 = 32768).
  pub max_depth: u32,
}

impl FractalConfig {
  /// Clamp a requested depth into `[0, max_depth]`.
  ///
  /// Silent recovery: out-of-range values come from unconstrained hosts and
  /// are not an error.
  #[inline]
  pub fn clamp_depth(&self, requested: u32) -> u32 {
    requested.min(self.max_depth)
  }
}

impl Default for FractalConfig {
  fn default() -> Self {
    Self {
      cube_size: 1.0,
      offset: 1.5,
      root_position: Vec3::ZERO,
      max_depth: 5,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
