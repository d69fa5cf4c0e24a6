//! Light sources for local illumination.
//!
//! A closed sum type over the three supported variants. The shader matches on
//! it exhaustively, so there is no "unknown light" fallback path.

use glam::Vec3A;

use crate::scene::SceneError;

/// Light source variants.
///
/// Directional lights store the vector pointing from the surface toward the
/// light source (the negation of the light's travel direction), fixed at
/// construction. Point lights recompute their light vector per hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform contribution regardless of geometry.
    Ambient {
        /// Light intensity, non-negative.
        intensity: f32,
    },

    /// Infinitely distant light with a fixed incoming direction.
    Directional {
        /// Light intensity, non-negative.
        intensity: f32,
        /// Vector from any surface point toward the light, non-zero.
        direction: Vec3A,
    },

    /// Light emitted from a position in the scene.
    Point {
        /// Light intensity, non-negative.
        intensity: f32,
        /// Position of the light in world coordinates.
        position: Vec3A,
    },
}

impl Light {
    /// Create an ambient light.
    pub fn ambient(intensity: f32) -> Result<Self, SceneError> {
        check_intensity(intensity)?;
        Ok(Light::Ambient { intensity })
    }

    /// Create a directional light.
    ///
    /// `toward_light` points from the surface toward the light source. A
    /// zero-length vector would divide the diffuse term by zero and is
    /// rejected here.
    pub fn directional(intensity: f32, toward_light: Vec3A) -> Result<Self, SceneError> {
        check_intensity(intensity)?;
        if toward_light.length_squared() == 0.0 || !toward_light.is_finite() {
            return Err(SceneError::ZeroDirection);
        }
        Ok(Light::Directional {
            intensity,
            direction: toward_light,
        })
    }

    /// Create a point light.
    pub fn point(intensity: f32, position: Vec3A) -> Result<Self, SceneError> {
        check_intensity(intensity)?;
        Ok(Light::Point {
            intensity,
            position,
        })
    }
}

fn check_intensity(intensity: f32) -> Result<(), SceneError> {
    if !intensity.is_finite() || intensity < 0.0 {
        return Err(SceneError::InvalidIntensity(intensity));
    }
    Ok(())
}
