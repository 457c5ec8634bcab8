//! CubeRegistry - the owned identifier-to-handle map behind bulk disposal.
//!
//! Replaces a flat global array + name-based scene lookup: the registry is
//! scoped to its controller and owns the scene handle of every live cube.

use std::collections::HashMap;

use super::cube::{Cube, CubeId};

/// A live cube together with the scene resource handle it owns.
#[derive(Clone, Debug)]
pub struct RegisteredCube<H> {
  pub cube: Cube,
  pub handle: H,
}

/// Owned mapping from identifier to live cube + handle.
///
/// Holds exactly one burst's worth of cubes at any time: filled by
/// generation, emptied in full by the next rebuild's teardown.
#[derive(Debug)]
pub struct CubeRegistry<H> {
  cubes: HashMap<CubeId, RegisteredCube<H>>,
}

impl<H> CubeRegistry<H> {
  pub fn new() -> Self {
    Self {
      cubes: HashMap::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.cubes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cubes.is_empty()
  }

  pub fn contains(&self, id: &CubeId) -> bool {
    self.cubes.contains_key(id)
  }

  pub fn get(&self, id: &CubeId) -> Option<&RegisteredCube<H>> {
    self.cubes.get(id)
  }

  /// Register a cube. Returns the displaced entry if the identifier was
  /// already present (an invariant violation generation never produces).
  pub fn insert(&mut self, cube: Cube, handle: H) -> Option<RegisteredCube<H>> {
    self.cubes.insert(cube.id.clone(), RegisteredCube { cube, handle })
  }

  /// Drain every entry, leaving the registry empty.
  pub fn drain(&mut self) -> impl Iterator<Item = (CubeId, RegisteredCube<H>)> + '_ {
    self.cubes.drain()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&CubeId, &RegisteredCube<H>)> {
    self.cubes.iter()
  }
}

impl<H> Default for CubeRegistry<H> {
  fn default() -> Self {
    Self::new()
  }
}
