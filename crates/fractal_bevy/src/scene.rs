//! BevyScene - SceneBackend over Bevy ECS and asset storage.

use bevy::prelude::*;
use fractal_plugin::{CubeId, SceneBackend};

use crate::components::FractalCube;
use crate::resources::CubeEntityIndex;

/// Per-cube graphics resources: one cuboid mesh and one material asset.
///
/// One bundle per cube, as in the reference arrangement. The rebuild
/// controller owns these through the registry; disposal removes both assets
/// explicitly instead of waiting for handle drops.
#[derive(Clone)]
pub struct CubeVisual {
  pub mesh: Handle<Mesh>,
  pub material: Handle<StandardMaterial>,
}

/// Scene backend over borrowed engine state.
///
/// Rebuilt by the drive system every frame from its system params; holds no
/// state of its own beyond the borrows.
pub struct BevyScene<'w, 's, 'a> {
  pub commands: &'a mut Commands<'w, 's>,
  pub meshes: &'a mut Assets<Mesh>,
  pub materials: &'a mut Assets<StandardMaterial>,
  pub index: &'a mut CubeEntityIndex,
}

impl SceneBackend for BevyScene<'_, '_, '_> {
  type Handle = CubeVisual;

  fn create_cube_resource(&mut self, size: f32, color_intensity: f32) -> CubeVisual {
    let mesh = self.meshes.add(Cuboid::new(size, size, size));
    // Blue channel carries the raw depth count; the 0-1 color space
    // saturates it at 1.0 for any depth >= 1 (reference behavior, kept).
    let material = self.materials.add(StandardMaterial {
      base_color: Color::srgb(0.0, 0.0, color_intensity.min(1.0)),
      ..default()
    });
    CubeVisual { mesh, material }
  }

  fn insert_into_scene(&mut self, handle: &CubeVisual, position: Vec3, id: &CubeId) {
    let entity = self
      .commands
      .spawn((
        Mesh3d(handle.mesh.clone()),
        MeshMaterial3d(handle.material.clone()),
        Transform::from_translation(position),
        Name::new(format!("cube {id}")),
        FractalCube { id: id.clone() },
      ))
      .id();
    self.index.insert(id.clone(), entity, handle.clone());
  }

  fn find_in_scene(&self, id: &CubeId) -> Option<CubeVisual> {
    self.index.get(id).map(|indexed| indexed.visual.clone())
  }

  fn remove_from_scene(&mut self, id: &CubeId) {
    if let Some(indexed) = self.index.remove(id) {
      self.commands.entity(indexed.entity).despawn();
    }
  }

  fn dispose_resource(&mut self, handle: CubeVisual) {
    self.meshes.remove(&handle.mesh);
    self.materials.remove(&handle.material);
  }
}
