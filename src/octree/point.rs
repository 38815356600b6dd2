use std::{rc::Rc, sync::Arc};

use glam::Vec3;

/// Distance below which two positions count as the same element.
pub const DEFAULT_EPSILON: f32 = 0.001;

/// Anything that can be stored in the octree. Only the reported position is
/// used for routing, removal and queries.
pub trait Positioned {
    fn position(&self) -> Vec3;

    fn distance_to<P: Positioned + ?Sized>(&self, other: &P) -> f32
    where
        Self: Sized,
    {
        self.position().distance(other.position())
    }

    fn is_equal<P: Positioned + ?Sized>(&self, other: &P, epsilon: f32) -> bool
    where
        Self: Sized,
    {
        self.distance_to(other) < epsilon
    }
}

impl Positioned for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: Positioned + ?Sized> Positioned for Box<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: Positioned + ?Sized> Positioned for Rc<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: Positioned + ?Sized> Positioned for Arc<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}
