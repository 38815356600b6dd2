use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OctreeError {
    #[error("position {position} is outside of the octree bounds (0..={bounding_box_size})")]
    OutOfBounds { position: Vec3, bounding_box_size: f32 },
}
