//! FractalWorld - the live rebuild controller.
//!
//! Owns the registry and the applied-depth state. One `tick` per frame:
//! when the desired depth differs from what was last applied, every live
//! cube is disposed and the whole tree is regenerated from the fixed root.
//! A depth change always means full teardown and regeneration; there is no
//! incremental update, and a rebuild is never observably partial.

use std::time::Duration;

use web_time::Instant;

use crate::scene::SceneBackend;
use crate::subdivision::{generate, Cube, CubeRegistry, FractalConfig};

/// Counters for one rebuild, returned so hosts can log it.
#[derive(Clone, Copy, Debug)]
pub struct RebuildStats {
  /// Depth the rebuild was applied at (post-clamp).
  pub depth: u32,
  /// Cubes disposed from the previous burst.
  pub cubes_disposed: usize,
  /// Cubes created by the new burst.
  pub cubes_created: usize,
  /// Wall time of teardown + generation.
  pub duration: Duration,
}

/// Per-world rebuild state, generic over the scene handle type.
///
/// The world never holds the scene itself; hosts pass their backend into
/// `tick` each frame (engine bridges typically reconstruct it per frame
/// from borrowed engine state).
pub struct FractalWorld<H> {
  /// Generation constants. `cube_size` may be retuned between rebuilds;
  /// it takes effect at the next depth change.
  pub config: FractalConfig,

  /// Live cubes of the current burst, keyed by identifier.
  registry: CubeRegistry<H>,

  /// Depth of the last applied burst. Starts unset so the first tick always
  /// generates, even at depth 0.
  applied_depth: Option<u32>,
}

impl<H> FractalWorld<H> {
  pub fn new(config: FractalConfig) -> Self {
    Self {
      config,
      registry: CubeRegistry::new(),
      applied_depth: None,
    }
  }

  /// Live cube registry (one burst's worth at all times).
  pub fn registry(&self) -> &CubeRegistry<H> {
    &self.registry
  }

  /// Depth of the last applied burst, `None` before the first tick.
  pub fn applied_depth(&self) -> Option<u32> {
    self.applied_depth
  }

  /// Per-frame entry point.
  ///
  /// Clamps `desired_depth` to the configured range, then rebuilds only on
  /// a mismatch with the last applied depth. Returns `None` when stable
  /// (the overwhelmingly common case), `Some(stats)` after a rebuild.
  pub fn tick<S: SceneBackend<Handle = H>>(
    &mut self,
    desired_depth: u32,
    scene: &mut S,
  ) -> Option<RebuildStats> {
    let depth = self.config.clamp_depth(desired_depth);
    if self.applied_depth == Some(depth) {
      return None;
    }
    Some(self.rebuild(depth, scene))
  }

  /// Dispose every live cube, then regenerate the full tree at `depth`.
  ///
  /// Teardown per cube: locate by identifier, release resources, detach.
  /// A cube the scene no longer knows is skipped (already removed; not an
  /// error). Disposal happens in the same step that empties the registry.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "world::rebuild"))]
  fn rebuild<S: SceneBackend<Handle = H>>(&mut self, depth: u32, scene: &mut S) -> RebuildStats {
    let started = Instant::now();

    let mut cubes_disposed = 0;
    for (id, _entry) in self.registry.drain() {
      if let Some(live) = scene.find_in_scene(&id) {
        scene.dispose_resource(live);
        scene.remove_from_scene(&id);
        cubes_disposed += 1;
      }
    }

    self.applied_depth = Some(depth);

    let root = Cube::root(self.config.root_position, depth);
    generate(&root, depth, &self.config, &mut self.registry, scene);

    RebuildStats {
      depth,
      cubes_disposed,
      cubes_created: self.registry.len(),
      duration: started.elapsed(),
    }
  }
}
