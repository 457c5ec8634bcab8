//! Subdivision module - recursive 8-ary cube generation.
//!
//! A parent cube spawns 8 children at the corners of a cube of side
//! `2 * offset` centered on it; each child recurses until the remaining
//! depth reaches zero. The tree is implicit: no parent/child links are
//! stored, positions come from offset arithmetic at generation time.
//!
//! # Octant Convention
//!
//! Child index bits select the sign per axis:
//!
//! ```text
//! bit 0 -> X, bit 1 -> Y, bit 2 -> Z; set = +offset, clear = -offset
//! ```
//!
//! # Module Structure
//!
//! - [`cube`]: `Cube` / `CubeId` - value types and the octant offset math
//! - [`config`]: `FractalConfig` - generation constants and the depth clamp
//! - [`registry`]: `CubeRegistry` - owned identifier-to-handle map
//! - [`generate`]: the recursive burst

pub mod config;
pub mod cube;
pub mod generate;
pub mod registry;

// Re-exports
pub use config::FractalConfig;
pub use cube::{octant_offset, Cube, CubeId};
pub use generate::{burst_size, generate};
pub use registry::{CubeRegistry, RegisteredCube};
