//! Test scene backends.
//!
//! `RecordingScene` is an in-memory SceneBackend that records every call so
//! tests can assert on creation order, live contents, and disposal counts.

use std::collections::HashMap;

use glam::Vec3;

use crate::scene::SceneBackend;
use crate::subdivision::CubeId;

/// One `create_cube_resource` call.
#[derive(Clone, Debug)]
pub struct CreatedResource {
  pub handle: u64,
  pub size: f32,
  pub color_intensity: f32,
}

/// One `insert_into_scene` call, in call order.
#[derive(Clone, Debug)]
pub struct InsertedCube {
  pub handle: u64,
  pub position: Vec3,
  pub id: CubeId,
}

/// Mock scene: sequential u64 handles, full call history.
#[derive(Default)]
pub struct RecordingScene {
  next_handle: u64,
  live: HashMap<CubeId, u64>,
  pub created: Vec<CreatedResource>,
  pub inserted: Vec<InsertedCube>,
  pub removed: Vec<CubeId>,
  pub dispose_counts: HashMap<u64, usize>,
}

impl RecordingScene {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of cubes currently attached to the scene.
  pub fn live_count(&self) -> usize {
    self.live.len()
  }

  /// Total dispose calls across all handles.
  pub fn total_disposals(&self) -> usize {
    self.dispose_counts.values().sum()
  }

  /// True if every handle ever created has been disposed exactly once.
  pub fn all_created_disposed_exactly_once(&self) -> bool {
    self.created.len() == self.dispose_counts.len()
      && self
        .created
        .iter()
        .all(|c| self.dispose_counts.get(&c.handle) == Some(&1))
  }

  /// Detach a cube behind the core's back, so later lookups miss.
  pub fn evict(&mut self, id: &CubeId) -> Option<u64> {
    self.live.remove(id)
  }
}

impl SceneBackend for RecordingScene {
  type Handle = u64;

  fn create_cube_resource(&mut self, size: f32, color_intensity: f32) -> u64 {
    self.next_handle += 1;
    let handle = self.next_handle;
    self.created.push(CreatedResource {
      handle,
      size,
      color_intensity,
    });
    handle
  }

  fn insert_into_scene(&mut self, handle: &u64, position: Vec3, id: &CubeId) {
    self.live.insert(id.clone(), *handle);
    self.inserted.push(InsertedCube {
      handle: *handle,
      position,
      id: id.clone(),
    });
  }

  fn find_in_scene(&self, id: &CubeId) -> Option<u64> {
    self.live.get(id).copied()
  }

  fn remove_from_scene(&mut self, id: &CubeId) {
    if self.live.remove(id).is_some() {
      self.removed.push(id.clone());
    }
  }

  fn dispose_resource(&mut self, handle: u64) {
    *self.dispose_counts.entry(handle).or_insert(0) += 1;
  }
}
