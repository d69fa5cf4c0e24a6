//! Scene model and closest-hit selection.
//!
//! A scene is a value: built whole by a load event, replaced wholesale by the
//! next one, read-only while rendering. Intersection is a linear scan over
//! the sphere list — no spatial acceleration, O(spheres) per ray.

use thiserror::Error;

use crate::interval::Interval;
use crate::light::Light;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Validation errors raised while constructing scene geometry.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// Sphere radius must be strictly positive and finite.
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    /// Shininess must lie in [0, 1].
    #[error("shininess must lie in [0, 1], got {0}")]
    InvalidShininess(f32),

    /// Light intensity must be non-negative and finite.
    #[error("light intensity must be non-negative, got {0}")]
    InvalidIntensity(f32),

    /// Directional lights need a non-zero direction vector.
    #[error("directional light direction must be a non-zero finite vector")]
    ZeroDirection,
}

/// Closest intersection along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter of the intersection point.
    pub t: f32,
    /// The sphere that was hit.
    pub sphere: &'a Sphere,
}

/// Collection of spheres and lights forming a scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Spheres in insertion order; the scan order breaks exact-distance ties.
    pub spheres: Vec<Sphere>,
    /// Light sources; order is irrelevant since contributions sum.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a scene from already-validated spheres and lights.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }

    /// Find the closest sphere hit strictly inside the given interval.
    ///
    /// The search interval shrinks as closer hits are found, so a later
    /// sphere at exactly the current minimum distance is rejected — the first
    /// sphere to reach a distance wins.
    pub fn intersect_closest(&self, r: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for sphere in &self.spheres {
            if let Some(t) = sphere.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = t;
                closest = Some(Hit { t, sphere });
            }
        }

        closest
    }
}
