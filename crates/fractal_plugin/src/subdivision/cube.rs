//! Cube and CubeId - value types for nodes of the subdivision tree.
//!
//! A cube is identified by the octant path taken from the root, not by a
//! stored parent/child link. Positions are recomputed from offset arithmetic
//! at generation time and never traversed as a graph.

use std::fmt;

use glam::Vec3;
use smallvec::SmallVec;

/// Compute a child's offset from its parent's center.
///
/// Octant: 0-7 where bits select the sign per axis:
/// - bit 0: X (set = `+offset`, clear = `-offset`)
/// - bit 1: Y
/// - bit 2: Z
///
/// The 8 octants are the corners of a cube of side `2 * offset` centered on
/// the parent.
#[inline]
pub fn octant_offset(octant: u8, offset: f32) -> Vec3 {
  let x = if octant & 1 != 0 { offset } else { -offset };
  let y = if (octant >> 1) & 1 != 0 { offset } else { -offset };
  let z = if (octant >> 2) & 1 != 0 { offset } else { -offset };
  Vec3::new(x, y, z)
}

/// Identifier of a generated cube, unique across the live cube set.
///
/// Keyed by the depth of the burst that produced it plus the full octant
/// path from the root. The path is what keeps identifiers distinct across
/// sibling subtrees; a bare `depth-childIndex` pair repeats once two parents
/// at the same level both subdivide.
///
/// Scene names render one `remainingDepth-childIndex` segment per path
/// element, `/`-separated: a root child of a depth-3 burst is `"3-5"`, its
/// sixth grandchild `"3-5/2-5"`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CubeId {
  /// Depth of the burst this cube belongs to.
  burst_depth: u32,
  /// Octant indices (0-7), one per level walked down from the root.
  path: SmallVec<[u8; 8]>,
}

impl CubeId {
  /// Identifier seed for the root cube of a burst (empty path).
  ///
  /// The root itself is never registered; this exists so child identifiers
  /// can be derived uniformly.
  pub fn root(burst_depth: u32) -> Self {
    Self {
      burst_depth,
      path: SmallVec::new(),
    }
  }

  /// Derive the identifier of the child at `octant` (0-7).
  pub fn child(&self, octant: u8) -> Self {
    let mut path = self.path.clone();
    path.push(octant);
    Self {
      burst_depth: self.burst_depth,
      path,
    }
  }

  /// Depth of the burst this identifier belongs to.
  #[inline]
  pub fn burst_depth(&self) -> u32 {
    self.burst_depth
  }

  /// Number of levels below the root (0 for the root seed).
  #[inline]
  pub fn level(&self) -> usize {
    self.path.len()
  }
}

impl fmt::Display for CubeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.path.is_empty() {
      return write!(f, "root");
    }
    for (level, octant) in self.path.iter().enumerate() {
      if level > 0 {
        write!(f, "/")?;
      }
      // Segment k was created with remaining depth = burst_depth - k.
      write!(f, "{}-{}", self.burst_depth - level as u32, octant)?;
    }
    Ok(())
  }
}

/// A node in the implicit 8-ary subdivision tree; also the renderable unit.
#[derive(Clone, PartialEq, Debug)]
pub struct Cube {
  /// Unique identifier within the current cube set.
  pub id: CubeId,
  /// Center of the cube in world space.
  pub position: Vec3,
  /// Recursion level at which it was created (root = iteration count,
  /// decreasing toward 0 at the leaves).
  pub depth: u32,
}

impl Cube {
  /// The fixed root cube a burst grows from.
  pub fn root(position: Vec3, burst_depth: u32) -> Self {
    Self {
      id: CubeId::root(burst_depth),
      position,
      depth: burst_depth,
    }
  }

  /// Construct the child at `octant` (0-7), offset from this cube's center.
  ///
  /// `remaining_depth` is the generation level the child is created at; it
  /// becomes the child's depth tag and color intensity.
  pub fn child(&self, octant: u8, remaining_depth: u32, offset: f32) -> Self {
    Self {
      id: self.id.child(octant),
      position: self.position + octant_offset(octant, offset),
      depth: remaining_depth,
    }
  }

  /// Presentational color intensity: the raw depth count.
  ///
  /// Deliberately not normalized - in a 0-1 color space this saturates at
  /// 1.0 for any depth >= 1, reproducing the reference behavior.
  #[inline]
  pub fn color_intensity(&self) -> f32 {
    self.depth as f32
  }
}

#[cfg(test)]
#[path = "cube_test.rs"]
mod cube_test;
