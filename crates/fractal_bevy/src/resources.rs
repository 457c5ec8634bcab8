//! Bevy resources for fractal cube management.

use std::collections::HashMap;

use bevy::prelude::*;
use fractal_plugin::{CubeId, FractalConfig, FractalWorld};

use crate::scene::CubeVisual;

/// User-facing parameters, written by UI, read by the drive system each
/// frame.
///
/// `iterations` is diffed against the controller's applied depth inside
/// `tick`; `cube_size` feeds the config and takes effect at the next
/// rebuild (changing size alone never triggers one).
#[derive(Resource)]
pub struct FractalParams {
  /// Desired recursion depth. Clamped to the config's `max_depth`.
  pub iterations: u32,
  /// Edge length for newly created cubes.
  pub cube_size: f32,
}

impl Default for FractalParams {
  fn default() -> Self {
    Self {
      iterations: 0,
      cube_size: 1.0,
    }
  }
}

/// A cube's scene-side records: the entity plus the asset handles it holds.
pub struct IndexedCube {
  pub entity: Entity,
  pub visual: CubeVisual,
}

/// Resource mapping cube identifiers to their entities and asset handles.
#[derive(Resource, Default)]
pub struct CubeEntityIndex {
  pub map: HashMap<CubeId, IndexedCube>,
}

impl CubeEntityIndex {
  pub fn insert(&mut self, id: CubeId, entity: Entity, visual: CubeVisual) {
    self.map.insert(id, IndexedCube { entity, visual });
  }

  pub fn remove(&mut self, id: &CubeId) -> Option<IndexedCube> {
    self.map.remove(id)
  }

  pub fn get(&self, id: &CubeId) -> Option<&IndexedCube> {
    self.map.get(id)
  }

  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }
}

/// Resource holding the rebuild controller.
#[derive(Resource)]
pub struct FractalState {
  pub world: FractalWorld<CubeVisual>,
}

impl Default for FractalState {
  fn default() -> Self {
    Self {
      world: FractalWorld::new(FractalConfig::default()),
    }
  }
}
