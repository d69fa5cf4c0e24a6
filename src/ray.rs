//! Ray representation for ray casting.
//!
//! A ray is the parametric line r(t) = origin + t * direction; every pixel of
//! a frame casts exactly one of these through the viewport.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray, the camera position for primary rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not normalized: primary rays carry the raw viewport offset, and the
    /// shading math divides by vector norms where it matters.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let r = Ray::new(Vec3A::new(1.0, 0.0, 0.0), Vec3A::new(0.0, 2.0, 0.0));
        assert_eq!(r.at(0.0), Vec3A::new(1.0, 0.0, 0.0));
        assert_eq!(r.at(1.5), Vec3A::new(1.0, 3.0, 0.0));
    }
}
