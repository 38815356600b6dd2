use glam::Vec3;

use super::Octant;

/// Axis-aligned cube given by its minimum corner and edge length.
/// Containment is inclusive on both ends, so neighbouring cubes share their faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub origin: Vec3,
    pub size: f32,
}

impl Cube {
    pub fn new(origin: Vec3, size: f32) -> Cube {
        debug_assert!(size > 0.0, "Size of cube needs to be > 0");
        Self { origin, size }
    }

    pub fn max(&self) -> Vec3 {
        self.origin + Vec3::splat(self.size)
    }

    pub fn center(&self) -> Vec3 {
        self.origin + Vec3::splat(self.size / 2.0)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let max = self.max();
        self.origin.x <= point.x
            && self.origin.y <= point.y
            && self.origin.z <= point.z
            && max.x >= point.x
            && max.y >= point.y
            && max.z >= point.z
    }

    // Offsets are relative to this cube's origin
    pub fn octant_of(&self, point: Vec3) -> Octant {
        let half = self.size / 2.0;
        let local = point - self.origin;
        Octant::from_bits(local.x >= half, local.y >= half, local.z >= half)
    }

    pub fn child(&self, octant: Octant) -> Cube {
        let half = self.size / 2.0;
        let offset = |upper: bool| if upper { half } else { 0.0 };
        let origin = self.origin
            + Vec3::new(offset(octant.x()), offset(octant.y()), offset(octant.z()));
        Cube::new(origin, half)
    }
}
