//! Sphere primitive for ray casting.
//!
//! Implements the analytic quadratic ray-sphere intersection and the
//! load-time shininess-to-specular-exponent transform.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::SceneError;

/// Specular exponent assigned to a fully shiny (shininess = 1) surface.
const MAX_SPECULAR_EXPONENT: f32 = 1000.0;

/// Sphere primitive defined by center, radius, base color and shininess.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere, strictly positive.
    pub radius: f32,

    /// Base color, one byte per RGB channel.
    pub color: [u8; 3],

    /// Specular exponent derived from shininess at construction time.
    pub specular_exponent: f32,
}

impl Sphere {
    /// Create a new sphere, validating its geometry.
    ///
    /// `shininess` must lie in [0, 1]; it is converted once into the specular
    /// exponent `100 * s / (1 - s)` truncated toward zero, with 1 mapping to
    /// 1000. Non-positive or non-finite radii are rejected here so the
    /// shading code never has to guard against a degenerate normal.
    pub fn new(
        center: Vec3A,
        radius: f32,
        color: [u8; 3],
        shininess: f32,
    ) -> Result<Self, SceneError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !shininess.is_finite() || !(0.0..=1.0).contains(&shininess) {
            return Err(SceneError::InvalidShininess(shininess));
        }

        let specular_exponent = if shininess == 1.0 {
            MAX_SPECULAR_EXPONENT
        } else {
            (100.0 * shininess / (1.0 - shininess)).trunc()
        };

        Ok(Self {
            center,
            radius,
            color,
            specular_exponent,
        })
    }

    /// Test for ray intersection, returning the nearest root strictly inside
    /// the interval.
    ///
    /// A negative discriminant is a geometric fact (the ray misses), not an
    /// error. When both roots qualify the smaller one wins.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<f32> {
        // Vector from ray origin to sphere center
        let oc = self.center - r.origin;

        // Quadratic equation coefficients with the half-b reduction
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let root = (h - sqrtd) / a;
        if ray_t.surrounds(root) {
            return Some(root);
        }
        let root = (h + sqrtd) / a;
        if ray_t.surrounds(root) {
            return Some(root);
        }
        None
    }

    /// Outward surface normal at a point on the sphere, unit length.
    pub fn normal_at(&self, p: Vec3A) -> Vec3A {
        (p - self.center) / self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(z: f32) -> Sphere {
        Sphere::new(Vec3A::new(0.0, 0.0, z), 1.0, [255, 255, 255], 0.0).unwrap()
    }

    #[test]
    fn rejects_degenerate_radius() {
        assert!(Sphere::new(Vec3A::ZERO, 0.0, [0, 0, 0], 0.0).is_err());
        assert!(Sphere::new(Vec3A::ZERO, -1.0, [0, 0, 0], 0.0).is_err());
        assert!(Sphere::new(Vec3A::ZERO, f32::NAN, [0, 0, 0], 0.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_shininess() {
        assert!(Sphere::new(Vec3A::ZERO, 1.0, [0, 0, 0], -0.1).is_err());
        assert!(Sphere::new(Vec3A::ZERO, 1.0, [0, 0, 0], 1.5).is_err());
    }

    #[test]
    fn shininess_maps_to_specular_exponent() {
        let s = |shininess| {
            Sphere::new(Vec3A::ZERO, 1.0, [0, 0, 0], shininess)
                .unwrap()
                .specular_exponent
        };
        assert_eq!(s(0.0), 0.0);
        assert_eq!(s(0.5), 100.0);
        assert_eq!(s(0.9), 900.0);
        assert_eq!(s(1.0), 1000.0);
        // 100 * 0.33 / 0.67 = 49.25..., truncated toward zero
        assert_eq!(s(0.33), 49.0);
    }

    #[test]
    fn head_on_ray_takes_the_near_root() {
        let sphere = unit_sphere_at(5.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));
        let t = sphere.hit(&r, Interval::primary()).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn origin_inside_sphere_yields_one_negative_root() {
        // Origin at the center: roots are +-radius for a unit direction, so
        // the discriminant is non-negative and one root is negative.
        let sphere = unit_sphere_at(0.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));

        // The positive root (t = 1) sits exactly on the near-plane cutoff
        // and must be excluded by the open interval.
        assert!(sphere.hit(&r, Interval::primary()).is_none());

        // A wider interval recovers it, never the negative root.
        let t = sphere.hit(&r, Interval::new(0.5, 10.0)).unwrap();
        assert!((t - 1.0).abs() < 1e-6);

        let t = sphere.hit(&r, Interval::new(-10.0, 10.0)).unwrap();
        assert!((t - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn miss_is_not_an_error() {
        let sphere = unit_sphere_at(5.0);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&r, Interval::primary()).is_none());
    }

    #[test]
    fn normal_points_outward_with_unit_length() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, 3.0), 2.0, [1, 2, 3], 0.0).unwrap();
        let n = sphere.normal_at(Vec3A::new(0.0, 0.0, 1.0));
        assert!((n - Vec3A::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((n.length() - 1.0).abs() < 1e-6);
    }
}
