use glam::Vec3;
use log::{debug, trace, warn};

use super::{
    Cube, DEFAULT_EPSILON, NodeId, Octant, OctreeElementIterator, OctreeError,
    OctreeNodeIterator, Positioned, node::OctreeNode,
};
use crate::config::OctreeConfig;

const ROOT: NodeId = NodeId(0);

pub struct Octree<T> {
    // Edge length of the root cube. The root origin is always (0,0,0)
    bounding_box_size: f32,
    // Nodes are never split into children smaller than this
    minimum_box_size: f32,
    // Maximum distance for two positions to count as the same element
    epsilon: f32,
    // Arena of all nodes, slot 0 is the root. Children are appended in
    // groups of eight and live until the tree is cleared.
    pub(super) nodes: Vec<OctreeNode<T>>,
    len: usize,
}

impl<T> Octree<T> {
    pub fn new(bounding_box_size: f32, minimum_box_size: f32) -> Self {
        Self::with_epsilon(bounding_box_size, minimum_box_size, DEFAULT_EPSILON)
    }

    pub fn with_config(config: &OctreeConfig) -> Self {
        Self::with_epsilon(
            config.bounding_box_size,
            config.minimum_box_size,
            config.epsilon,
        )
    }

    fn with_epsilon(bounding_box_size: f32, minimum_box_size: f32, epsilon: f32) -> Self {
        let root = OctreeNode::new(Cube::new(Vec3::ZERO, bounding_box_size));
        Self {
            bounding_box_size,
            minimum_box_size,
            epsilon,
            nodes: vec![root],
            len: 0,
        }
    }

    pub fn bounding_box_size(&self) -> f32 {
        self.bounding_box_size
    }

    pub fn minimum_box_size(&self) -> f32 {
        self.minimum_box_size
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    pub fn root_id(&self) -> NodeId {
        ROOT
    }

    pub fn root(&self) -> &OctreeNode<T> {
        self.at(ROOT)
    }

    pub fn node(&self, id: NodeId) -> Option<&OctreeNode<T>> {
        self.nodes.get(usize::from(id))
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Deepest level that has an allocated node. The root is level 0.
    pub fn depth(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| (self.bounding_box_size / node.cube.size).log2().round() as usize)
            .max()
            .unwrap_or(0)
    }

    pub fn iter_nodes(&self) -> OctreeNodeIterator<'_, T> {
        OctreeNodeIterator::new(self)
    }

    pub fn iter(&self) -> OctreeElementIterator<'_, T> {
        OctreeElementIterator::new(self)
    }

    /// Drops every element and node except for an empty root.
    pub fn remove_all(&mut self) {
        self.nodes.truncate(1);
        let root = self.at_mut(ROOT);
        root.elements.clear();
        root.children = None;
        debug!("Cleared octree, dropped {} elements", self.len);
        self.len = 0;
    }

    fn at(&self, id: NodeId) -> &OctreeNode<T> {
        &self.nodes[usize::from(id)]
    }

    fn at_mut(&mut self, id: NodeId) -> &mut OctreeNode<T> {
        &mut self.nodes[usize::from(id)]
    }

    // Returns false if the children would be smaller than the minimum box size
    fn subdivide(&mut self, id: NodeId) -> bool {
        let cube = self.at(id).cube;
        let half = cube.size / 2.0;
        if half < self.minimum_box_size {
            debug!("Node {id} of size {} is at the bottom of the tree", cube.size);
            return false;
        }
        let first = self.nodes.len() as u32;
        self.nodes.extend(
            Octant::ALL
                .iter()
                .map(|octant| OctreeNode::new(cube.child(*octant))),
        );
        self.at_mut(id).children = Some(std::array::from_fn(|i| NodeId(first + i as u32)));
        trace!("Subdivided node {id} into children of size {half}");
        true
    }
}

impl<T> Octree<T>
where
    T: Positioned,
{
    /// Inserts an element and returns the node that ends up holding it.
    /// Elements outside of the root cube are rejected without touching the tree.
    pub fn add(&mut self, element: T) -> Result<NodeId, OctreeError> {
        let position = element.position();
        if !self.root().cube.contains(position) {
            warn!("Position {position} does not fit in octree bounds");
            return Err(OctreeError::OutOfBounds {
                position,
                bounding_box_size: self.bounding_box_size,
            });
        }

        self.len += 1;
        if self.root().is_leaf() && !self.subdivide(ROOT) {
            // The whole tree is a single bucket
            self.at_mut(ROOT).elements.push(element);
            return Ok(ROOT);
        }
        Ok(self.insert_into(ROOT, element))
    }

    // `parent` always has children and contains the element position
    fn insert_into(&mut self, parent: NodeId, element: T) -> NodeId {
        let position = element.position();
        let node = self.at(parent);
        assert!(
            node.cube.contains(position),
            "Node {parent} ({node}) does not contain {position}"
        );
        let Some(child) = node.child(node.cube.octant_of(position)) else {
            panic!("Node {parent} ({node}) has no children to place {position} in");
        };

        if self.at(child).is_vacant() {
            self.at_mut(child).elements.push(element);
            return child;
        }

        if self.at(child).is_leaf() && !self.subdivide(child) {
            // Only leaves at the bottom of the tree hold more than one element
            self.at_mut(child).elements.push(element);
            return child;
        }

        // A leaf that was just split still holds its single element. Push it down.
        let spare = std::mem::take(&mut self.at_mut(child).elements);
        for spare_element in spare {
            self.insert_into(child, spare_element);
        }
        self.insert_into(child, element)
    }

    /// Removes one element within epsilon of `probe`. Returns false if none was
    /// found on the path `probe` routes to.
    pub fn remove<P: Positioned + ?Sized>(&mut self, probe: &P) -> bool {
        self.take(probe).is_some()
    }

    /// Like [`Octree::remove`] but hands back the removed element.
    pub fn take<P: Positioned + ?Sized>(&mut self, probe: &P) -> Option<T> {
        let position = probe.position();
        let mut id = ROOT;
        loop {
            let node = self.at(id);
            let found = node
                .elements
                .iter()
                .position(|element| element.is_equal(probe, self.epsilon));
            if let Some(index) = found {
                let element = self.at_mut(id).elements.remove(index);
                self.len -= 1;
                debug!("Removed element at {} from node {id}", element.position());
                return Some(element);
            }
            id = node.child(node.cube.octant_of(position))?;
        }
    }

    /// Approximate nearest neighbour. Only the single path of occupied nodes that
    /// `probe` routes to is searched; sibling octants are never visited.
    pub fn closest<P: Positioned + ?Sized>(&self, probe: &P) -> Option<&T> {
        let position = probe.position();
        let mut closest: Option<(&T, f32)> = None;
        let mut node = self.root();
        loop {
            for element in &node.elements {
                let distance = element.position().distance(position);
                if distance < closest.map_or(f32::MAX, |(_, shortest)| shortest) {
                    closest = Some((element, distance));
                }
            }

            if !node.cube.contains(position) {
                break;
            }
            let Some(child) = node.child(node.cube.octant_of(position)) else {
                break;
            };
            let child = self.at(child);
            if child.is_vacant() {
                break;
            }
            node = child;
        }
        closest.map(|(element, _)| element)
    }
}
