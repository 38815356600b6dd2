mod bbs;
mod error;
mod iter_node;
mod node;
mod octant;
mod point;
mod tree;

pub use bbs::Cube;
pub use error::OctreeError;
pub use iter_node::OctreeElementIterator;
pub use iter_node::OctreeNodeIterator;
pub use node::NodeId;
pub use node::OctreeNode;
pub use octant::Octant;
pub use point::DEFAULT_EPSILON;
pub use point::Positioned;
pub use tree::Octree;
