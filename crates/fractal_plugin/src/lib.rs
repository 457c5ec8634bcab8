//! fractal_plugin - engine-independent fractal cube subdivision.
//!
//! A root cube spawns eight children at each recursion level, up to a
//! host-controlled depth; changing the depth at runtime tears the whole set
//! down and regenerates it. This crate holds the two cooperating pieces -
//! the recursive subdivision generator and the live rebuild controller -
//! behind a small scene-backend trait, so rendering engines only supply
//! resource creation, scene insertion/removal, and disposal.
//!
//! # Example
//!
//! ```ignore
//! use fractal_plugin::{FractalConfig, FractalWorld};
//!
//! let mut world = FractalWorld::new(FractalConfig::default());
//!
//! // Once per frame, with whatever depth the user currently wants:
//! if let Some(stats) = world.tick(depth, &mut scene) {
//!     println!("rebuilt at depth {}: {} cubes", stats.depth, stats.cubes_created);
//! }
//! ```

pub mod subdivision;
pub use subdivision::{burst_size, Cube, CubeId, CubeRegistry, FractalConfig};

// Scene collaborator seam
pub mod scene;
pub use scene::SceneBackend;

// Live rebuild controller
pub mod world;
pub use world::{FractalWorld, RebuildStats};

// Test utilities
#[cfg(test)]
pub mod test_support;

// Consistency tests
#[cfg(test)]
mod consistency_test;
