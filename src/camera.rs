//! Camera position and viewport projection.
//!
//! The camera is a translating point: it starts at the origin, moves in the
//! view plane (x, y) under the animation driver, and never rotates or moves
//! along the view axis. The viewport derives per-pixel view-space scales from
//! the target resolution and a fixed horizontal field of view.

use glam::Vec3A;

use crate::ray::Ray;

/// Horizontal field of view in degrees.
pub const FOV_DEGREES: f32 = 53.0;

/// Translating camera, view direction fixed along +z.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Camera position in world coordinates.
    pub position: Vec3A,
}

impl Camera {
    /// Create a camera at the origin.
    pub fn new() -> Self {
        Self {
            position: Vec3A::ZERO,
        }
    }

    /// Translate the camera in the view plane.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Projection state derived from the framebuffer resolution.
///
/// Recomputed whenever the target resolution changes, constant within a
/// frame. The view plane is 1 unit wide (landscape) or 1 unit tall
/// (portrait); the distance to the plane preserves the field of view in the
/// major dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Target framebuffer width in pixels.
    pub pixel_width: u32,
    /// Target framebuffer height in pixels.
    pub pixel_height: u32,
    x_scale: f32,
    y_scale: f32,
    z_distance: f32,
}

impl Viewport {
    /// Derive the projection state for a target resolution.
    ///
    /// Zero dimensions are clamped to 1.
    pub fn new(pixel_width: u32, pixel_height: u32) -> Self {
        let pixel_width = pixel_width.max(1);
        let pixel_height = pixel_height.max(1);

        let aspect = pixel_width as f32 / pixel_height as f32;
        let (view_width, view_height) = if aspect >= 1.0 {
            (1.0, 1.0 / aspect)
        } else {
            (aspect, 1.0)
        };

        let half_fov_tan = (FOV_DEGREES.to_radians() / 2.0).tan();

        Self {
            pixel_width,
            pixel_height,
            x_scale: view_width / pixel_width as f32 * half_fov_tan,
            y_scale: view_height / pixel_height as f32 * half_fov_tan,
            z_distance: aspect.max(1.0 / aspect) * half_fov_tan,
        }
    }

    /// Construct the primary ray for a viewport-centered pixel coordinate.
    ///
    /// `(cx, cy)` ranges over `[-W/2, W/2) x [-H/2, H/2)` with (0, 0) at the
    /// view-plane center and y growing upward.
    pub fn primary_ray(&self, camera: &Camera, cx: i32, cy: i32) -> Ray {
        let target = Vec3A::new(
            cx as f32 * self.x_scale + camera.position.x,
            cy as f32 * self.y_scale + camera.position.y,
            self.z_distance,
        );
        Ray::new(camera.position, target - camera.position)
    }
}
