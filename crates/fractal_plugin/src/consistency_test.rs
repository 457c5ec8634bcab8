//! End-to-end consistency tests for the rebuild controller.
//!
//! These drive `FractalWorld::tick` against the recording scene the way a
//! render loop would: many frames, occasional depth-parameter changes, and
//! assert the two load-bearing contracts at every step:
//!
//! - the registry always holds exactly one depth's worth of cubes, never a
//!   mix of two bursts
//! - every resource ever created is disposed exactly once when its burst is
//!   torn down (no leaks, no double-disposal)

use crate::subdivision::burst_size;
use crate::test_support::RecordingScene;
use crate::{FractalConfig, FractalWorld};

/// The reference scenario: depth 0 -> 2 -> 0.
///
/// Depth 0 leaves the registry empty (root only). Depth 2 fills it with 72
/// cubes. Back at depth 0 the registry empties again and all 72 resources
/// report disposed exactly once.
#[test]
fn end_to_end_depth_0_2_0() {
  let mut world: FractalWorld<u64> = FractalWorld::new(FractalConfig::default());
  let mut scene = RecordingScene::new();

  let stats = world.tick(0, &mut scene).expect("startup burst");
  assert_eq!(stats.cubes_created, 0);
  assert!(world.registry().is_empty());

  let stats = world.tick(2, &mut scene).expect("rebuild at 2");
  assert_eq!(stats.cubes_created, 72);
  assert_eq!(world.registry().len(), 72);
  assert_eq!(scene.live_count(), 72);

  let stats = world.tick(0, &mut scene).expect("rebuild at 0");
  assert_eq!(stats.cubes_disposed, 72);
  assert!(world.registry().is_empty());
  assert_eq!(scene.live_count(), 0);

  assert_eq!(scene.created.len(), 72);
  assert!(
    scene.all_created_disposed_exactly_once(),
    "each of the 72 resources must be disposed exactly once"
  );
}

/// The first tick applies the initial parameter value as a real burst.
#[test]
fn startup_burst_uses_initial_depth() {
  let mut world: FractalWorld<u64> = FractalWorld::new(FractalConfig::default());
  let mut scene = RecordingScene::new();

  let stats = world.tick(3, &mut scene).expect("startup burst");
  assert_eq!(stats.depth, 3);
  assert_eq!(stats.cubes_disposed, 0);
  assert_eq!(stats.cubes_created, 584);
  assert_eq!(world.registry().len(), burst_size(3));
}

/// Across an arbitrary change sequence the registry tracks exactly the
/// current depth's series sum, and stable frames in between change nothing.
#[test]
fn registry_never_mixes_bursts() {
  let mut world: FractalWorld<u64> = FractalWorld::new(FractalConfig::default());
  let mut scene = RecordingScene::new();

  for &depth in &[1u32, 3, 0, 2, 4, 1] {
    world.tick(depth, &mut scene).expect("depth changed");
    assert_eq!(world.registry().len(), burst_size(depth), "depth {}", depth);
    assert_eq!(scene.live_count(), burst_size(depth), "depth {}", depth);

    // Stable frames: no generation, no disposal, registry untouched.
    let created = scene.created.len();
    let disposals = scene.total_disposals();
    for _ in 0..3 {
      assert!(world.tick(depth, &mut scene).is_none());
    }
    assert_eq!(scene.created.len(), created);
    assert_eq!(scene.total_disposals(), disposals);
  }
}

/// Resources never leak and are never double-disposed, whatever the change
/// history. Ending at depth 0 means everything ever created must have been
/// disposed exactly once.
#[test]
fn every_resource_disposed_exactly_once_over_history() {
  let mut world: FractalWorld<u64> = FractalWorld::new(FractalConfig::default());
  let mut scene = RecordingScene::new();

  for &depth in &[2u32, 1, 3, 2, 0] {
    world.tick(depth, &mut scene);
  }

  let total_created: usize = [2u32, 1, 3, 2].iter().map(|&d| burst_size(d)).sum();
  assert_eq!(scene.created.len(), total_created);
  assert!(scene.all_created_disposed_exactly_once());
}
