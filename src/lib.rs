//! Sparse octree over points in 3D space with insertion, epsilon based removal
//! and a single-path nearest neighbour query.

pub mod config;
pub mod octree;

pub use config::{ConfigError, OctreeConfig};
pub use octree::{Cube, NodeId, Octree, OctreeError, OctreeNode, Positioned};
