//! Phong-style local illumination.
//!
//! Sums ambient, diffuse and specular contributions from every light into a
//! single intensity multiplier for the sphere's base color. There is no
//! shadow test: lights reach every point with unobstructed incidence, which
//! is part of the output contract.

use glam::Vec3A;

use crate::light::Light;

/// Compute the illumination intensity at a surface point, clamped to [0, 1].
///
/// `normal` is the unit surface normal, `view` points from the surface back
/// toward the camera (the negated ray direction, not normalized).
pub fn shade(
    point: Vec3A,
    normal: Vec3A,
    view: Vec3A,
    specular_exponent: f32,
    lights: &[Light],
) -> f32 {
    let mut intensity = 0.0;

    for light in lights {
        match *light {
            Light::Ambient { intensity: i } => intensity += i,
            Light::Directional {
                intensity: i,
                direction,
            } => {
                intensity += i * reflected_fraction(normal, direction, view, specular_exponent);
            }
            Light::Point {
                intensity: i,
                position,
            } => {
                let toward_light = position - point;
                intensity += i * reflected_fraction(normal, toward_light, view, specular_exponent);
            }
        }
    }

    // All terms are non-negative, so only the upper clamp is needed.
    intensity.min(1.0)
}

/// Diffuse plus specular fraction for one light vector.
///
/// `toward_light` points from the surface to the light and is not assumed to
/// be normalized; both terms divide by the relevant norms. Terms with
/// non-positive alignment are dropped, which also keeps a zero-length light
/// vector (point light sitting on the surface) out of the divisions.
fn reflected_fraction(normal: Vec3A, toward_light: Vec3A, view: Vec3A, exponent: f32) -> f32 {
    let mut fraction = 0.0;

    let n_dot_l = normal.dot(toward_light);
    if n_dot_l > 0.0 {
        fraction += n_dot_l / (normal.length() * toward_light.length());
    }

    let reflection = 2.0 * n_dot_l * normal - toward_light;
    let r_dot_v = reflection.dot(view);
    if r_dot_v > 0.0 {
        fraction += (r_dot_v / (reflection.length() * view.length())).powf(exponent);
    }

    fraction
}
