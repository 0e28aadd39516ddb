//! Ray representation for ray casting.
//!
//! A ray is defined as P(t) = origin + t * direction, a parametric line used
//! to query the scene for intersections.

use crate::vec3::{Point3, Vec3};

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,

    /// Direction of the ray.
    ///
    /// Not required to be normalized. Camera rays point at the viewport
    /// and keep whatever length that gives them.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Starting point of the ray.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Direction of the ray.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute the point at parameter t along the ray.
    ///
    /// Any real t is valid; negative values land behind the origin.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}
