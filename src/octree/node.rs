use std::fmt::{self, Display};

use super::{Cube, Octant};

/// Index of a node inside the octree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) u32);

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub struct OctreeNode<T> {
    pub(super) cube: Cube,
    pub(super) elements: Vec<T>,
    pub(super) children: Option<[NodeId; 8]>,
}

impl<T> OctreeNode<T> {
    pub fn new(cube: Cube) -> Self {
        Self {
            cube,
            elements: Vec::new(),
            children: None,
        }
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn has_elements(&self) -> bool {
        !self.elements.is_empty()
    }

    pub fn children(&self) -> Option<&[NodeId; 8]> {
        self.children.as_ref()
    }

    pub fn child(&self, octant: Octant) -> Option<NodeId> {
        self.children.map(|children| children[octant.index()])
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// A leaf that holds nothing. New elements can be stored here without splitting.
    pub fn is_vacant(&self) -> bool {
        self.is_leaf() && self.elements.is_empty()
    }
}

impl<T> Display for OctreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "elements: {} origin: ({}, {}, {}) size: {}",
            self.elements.len(),
            self.cube.origin.x,
            self.cube.origin.y,
            self.cube.origin.z,
            self.cube.size
        )
    }
}
