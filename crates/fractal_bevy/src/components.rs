//! Bevy components for fractal cube rendering.

use bevy::prelude::*;
use fractal_plugin::CubeId;

/// Component for entities representing generated cubes.
///
/// Carries the identifier the rebuild controller uses for scene lookups;
/// the entity's `Name` renders the same identifier for inspectors.
#[derive(Component)]
pub struct FractalCube {
  /// Identifier within the current burst.
  pub id: CubeId,
}

/// Marker for the root cube entity.
///
/// Spawned once at startup, never part of the registry, never despawned.
#[derive(Component, Default)]
pub struct FractalRoot;
