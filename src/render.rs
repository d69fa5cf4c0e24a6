//! Full-frame render pass.
//!
//! Sweeps every pixel of the viewport, casts the primary ray, selects the
//! closest hit, shades it and writes the color back. Cost is O(W * H * S) per
//! frame with no spatial acceleration, which is what bounds feasible scene
//! and resolution sizes.

use crate::camera::{Camera, Viewport};
use crate::framebuffer::{Framebuffer, BACKGROUND};
use crate::interval::Interval;
use crate::lighting::shade;
use crate::ray::Ray;
use crate::scene::Scene;

/// Render one frame into the framebuffer.
///
/// With no scene loaded every pixel gets the background color. The
/// framebuffer must match the viewport's resolution; the display side keeps
/// the two in sync by reallocating both on resize.
pub fn render(scene: Option<&Scene>, camera: &Camera, viewport: &Viewport, frame: &mut Framebuffer) {
    debug_assert_eq!(frame.width(), viewport.pixel_width);
    debug_assert_eq!(frame.height(), viewport.pixel_height);

    // The symmetric sweep below leaves the topmost row untouched when the
    // height is even (its counterpart maps one past the bottom edge and is
    // skipped by the bounds guard), so start from a background frame.
    frame.clear(BACKGROUND);

    let scene = match scene {
        Some(scene) => scene,
        None => return,
    };

    let width = viewport.pixel_width as i32;
    let height = viewport.pixel_height as i32;

    for cy in -(height / 2)..(height - height / 2) {
        for cx in -(width / 2)..(width - width / 2) {
            let ray = viewport.primary_ray(camera, cx, cy);
            frame.put_pixel(cx, cy, trace(scene, &ray));
        }
    }
}

/// Color seen along one primary ray.
fn trace(scene: &Scene, ray: &Ray) -> [u8; 3] {
    let hit = match scene.intersect_closest(ray, Interval::primary()) {
        Some(hit) => hit,
        None => return BACKGROUND,
    };

    let point = ray.at(hit.t);
    let normal = hit.sphere.normal_at(point);
    let intensity = shade(
        point,
        normal,
        -ray.direction,
        hit.sphere.specular_exponent,
        &scene.lights,
    );

    hit.sphere
        .color
        .map(|channel| (channel as f32 * intensity).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::sphere::Sphere;
    use glam::Vec3A;

    fn pixel(fb: &Framebuffer, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * fb.width() + x) * 4) as usize;
        fb.data()[offset..offset + 4].try_into().unwrap()
    }

    #[test]
    fn no_scene_renders_background_everywhere() {
        let viewport = Viewport::new(8, 6);
        let mut frame = Framebuffer::new(8, 6);
        render(None, &Camera::new(), &viewport, &mut frame);
        assert!(frame
            .data()
            .chunks_exact(4)
            .all(|p| p == [255, 255, 255, 255]));
    }

    #[test]
    fn empty_scene_renders_background_for_any_camera() {
        let viewport = Viewport::new(8, 6);
        let scene = Scene::default();

        for position in [Vec3A::ZERO, Vec3A::new(5.0, -3.0, 0.0)] {
            let camera = Camera { position };
            let mut frame = Framebuffer::new(8, 6);
            render(Some(&scene), &camera, &viewport, &mut frame);
            assert!(frame
                .data()
                .chunks_exact(4)
                .all(|p| p == [255, 255, 255, 255]));
        }
    }

    #[test]
    fn ambient_only_round_trips_the_base_color() {
        // The sphere is large enough to cover the whole viewport; a single
        // ambient light of intensity 1 clamps to exactly 1, so every pixel
        // carries the base color untouched. Odd dimensions make the sweep
        // cover every row.
        let scene = Scene::new(
            vec![Sphere::new(Vec3A::new(0.0, 0.0, 10.0), 8.0, [123, 45, 67], 0.0).unwrap()],
            vec![Light::ambient(1.0).unwrap()],
        );
        let viewport = Viewport::new(5, 5);
        let mut frame = Framebuffer::new(5, 5);
        render(Some(&scene), &Camera::new(), &viewport, &mut frame);

        assert!(frame
            .data()
            .chunks_exact(4)
            .all(|p| p == [123, 45, 67, 255]));
    }

    #[test]
    fn four_by_four_sphere_scenario() {
        // One unit sphere three units ahead, lit by a directional light
        // shining along +z (the stored vector points back toward the light).
        // The diagonal rays (|cx| = |cy| = 1) are exactly tangent to this
        // sphere, so only the axis-aligned center pixels are asserted.
        let scene = Scene::new(
            vec![Sphere::new(Vec3A::new(0.0, 0.0, 3.0), 1.0, [200, 0, 0], 1.0).unwrap()],
            vec![Light::directional(1.0, Vec3A::new(0.0, 0.0, -1.0)).unwrap()],
        );
        let viewport = Viewport::new(4, 4);
        let mut frame = Framebuffer::new(4, 4);
        render(Some(&scene), &Camera::new(), &viewport, &mut frame);

        // Head-on pixel (cx = 0, cy = 0): diffuse is 1, the mirror-aligned
        // specular term saturates, the clamp caps intensity at exactly 1.
        assert_eq!(pixel(&frame, 2, 2), [200, 0, 0, 255]);

        // Oblique but robust hits next to the center: lit, dimmer than the
        // head-on pixel.
        for (x, y) in [(1, 2), (2, 3)] {
            let [r, g, b, a] = pixel(&frame, x, y);
            assert!(r > 0 && r < 200, "pixel ({x},{y}) should show falloff");
            assert_eq!((g, b, a), (0, 0, 255));
        }

        // Far corners of the grid miss the sphere and stay background white.
        for (x, y) in [(0, 0), (3, 0), (0, 3), (0, 1)] {
            assert_eq!(pixel(&frame, x, y), [255, 255, 255, 255]);
        }
    }

    #[test]
    fn camera_translation_shifts_the_image() {
        let scene = Scene::new(
            vec![Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 0.5, [0, 200, 0], 0.0).unwrap()],
            vec![Light::ambient(1.0).unwrap()],
        );
        let viewport = Viewport::new(16, 16);

        let mut centered = Framebuffer::new(16, 16);
        render(Some(&scene), &Camera::new(), &viewport, &mut centered);

        let mut moved = Framebuffer::new(16, 16);
        let camera = Camera {
            position: Vec3A::new(2.0, 0.0, 0.0),
        };
        render(Some(&scene), &camera, &viewport, &mut moved);

        assert_ne!(centered, moved);
    }
}
