use glam::Vec3;

use super::*;

/// Defaults match the reference arrangement: unit cubes spaced 1.5 apart
/// around a root at the origin, at most 5 levels.
#[test]
fn test_default_config() {
  let config = FractalConfig::default();

  assert_eq!(config.cube_size, 1.0);
  assert_eq!(config.offset, 1.5);
  assert_eq!(config.root_position, Vec3::ZERO);
  assert_eq!(config.max_depth, 5);
}

/// In-range depths pass through untouched.
#[test]
fn test_clamp_depth_in_range() {
  let config = FractalConfig::default();

  for depth in 0..=5 {
    assert_eq!(config.clamp_depth(depth), depth);
  }
}

/// Out-of-range depths clamp to the bound instead of erroring.
#[test]
fn test_clamp_depth_over_max() {
  let config = FractalConfig::default();

  assert_eq!(config.clamp_depth(6), 5);
  assert_eq!(config.clamp_depth(u32::MAX), 5);

  let tight = FractalConfig {
    max_depth: 2,
    ..FractalConfig::default()
  };
  assert_eq!(tight.clamp_depth(5), 2);
}
