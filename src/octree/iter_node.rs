use super::{NodeId, Octree, OctreeNode};

/// Depth-first walk over every allocated node, parents before children.
pub struct OctreeNodeIterator<'a, T> {
    stack: Vec<NodeId>,
    octree: &'a Octree<T>,
}

impl<'a, T> OctreeNodeIterator<'a, T> {
    pub(super) fn new(octree: &'a Octree<T>) -> OctreeNodeIterator<'a, T> {
        OctreeNodeIterator {
            stack: vec![octree.root_id()],
            octree,
        }
    }
}

impl<'a, T> Iterator for OctreeNodeIterator<'a, T> {
    type Item = (NodeId, &'a OctreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.octree.nodes[usize::from(id)];
        if let Some(children) = node.children.as_ref() {
            // Reversed so that octant 0 is visited first
            self.stack.extend(children.iter().rev());
        }
        Some((id, node))
    }
}

/// Every stored element, in the order the node walk reaches them.
pub struct OctreeElementIterator<'a, T> {
    nodes: OctreeNodeIterator<'a, T>,
    current: std::slice::Iter<'a, T>,
}

impl<'a, T> OctreeElementIterator<'a, T> {
    pub(super) fn new(octree: &'a Octree<T>) -> OctreeElementIterator<'a, T> {
        OctreeElementIterator {
            nodes: OctreeNodeIterator::new(octree),
            current: Default::default(),
        }
    }
}

impl<'a, T> Iterator for OctreeElementIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.next() {
                return Some(element);
            }
            let (_, node) = self.nodes.next()?;
            self.current = node.elements.iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::octree::Octree;

    #[test]
    fn test_empty_tree_yields_root_only() {
        let tree: Octree<Vec3> = Octree::new(8.0, 1.0);
        let nodes: Vec<_> = tree.iter_nodes().collect();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].0, tree.root_id());
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn test_nodes_after_single_insert() {
        let mut tree: Octree<Vec3> = Octree::new(8.0, 1.0);
        tree.add(Vec3::ONE).unwrap();
        // Root plus its eight children, exactly one of them occupied
        assert_eq!(tree.iter_nodes().count(), 9);
        let occupied: Vec<_> = tree.iter_nodes().filter(|(_, n)| n.has_elements()).collect();
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[0].1.cube().size, 4.0);
    }

    #[test]
    fn test_parents_visited_before_children() {
        let mut tree: Octree<Vec3> = Octree::new(8.0, 1.0);
        tree.add(Vec3::new(1.0, 1.0, 1.0)).unwrap();
        tree.add(Vec3::new(3.0, 3.0, 3.0)).unwrap();
        let sizes: Vec<f32> = tree.iter_nodes().map(|(_, n)| n.cube().size).collect();
        assert_eq!(sizes[0], 8.0);
        assert_eq!(sizes[1], 4.0);
        assert_eq!(sizes[2], 2.0, "Subdivided first octant should be walked before its siblings");
        assert_eq!(sizes.len(), 17);
    }

    #[test]
    fn test_element_iterator_visits_all() {
        let mut tree: Octree<Vec3> = Octree::new(8.0, 1.0);
        let points = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0001),
            Vec3::new(7.0, 2.0, 5.0),
            Vec3::new(0.0, 8.0, 0.0),
        ];
        for p in points {
            tree.add(p).unwrap();
        }
        let mut found: Vec<Vec3> = tree.iter().copied().collect();
        found.sort_by(|a, b| a.to_array().partial_cmp(&b.to_array()).unwrap());
        let mut expected = points.to_vec();
        expected.sort_by(|a, b| a.to_array().partial_cmp(&b.to_array()).unwrap());
        assert_eq!(found, expected);
    }
}
