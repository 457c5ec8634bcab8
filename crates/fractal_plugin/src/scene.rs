//! SceneBackend - the rendering-collaborator seam.
//!
//! The core drives a rendering engine through this trait and stays
//! engine-independent. Everything runs on the render thread; implementations
//! take `&mut self` and need no `Send`/`Sync`.
//!
//! Ownership: the core owns every generated cube's graphics resources from
//! `create_cube_resource` until `dispose_resource` during the next rebuild.
//! The scene holds a non-owning reference for drawing only.

use glam::Vec3;

use crate::subdivision::CubeId;

/// Rendering collaborator the subdivision core calls into.
pub trait SceneBackend {
  /// Opaque geometry+material bundle handle.
  type Handle: Clone;

  /// Allocate the graphics resources for one cube.
  ///
  /// `color_intensity` is the raw depth count; a 0-1 color space saturates
  /// it at 1.0 (reference behavior, kept).
  fn create_cube_resource(&mut self, size: f32, color_intensity: f32) -> Self::Handle;

  /// Attach a created resource to the scene graph at `position`, addressable
  /// by `id` for later lookup.
  fn insert_into_scene(&mut self, handle: &Self::Handle, position: Vec3, id: &CubeId);

  /// Look a cube up by identifier. `None` means already removed or never
  /// inserted; callers treat that as a no-op, not an error.
  fn find_in_scene(&self, id: &CubeId) -> Option<Self::Handle>;

  /// Detach a cube from the scene graph. Missing identifiers are a no-op.
  fn remove_from_scene(&mut self, id: &CubeId);

  /// Release the graphics resources owned by `handle`.
  fn dispose_resource(&mut self, handle: Self::Handle);
}
