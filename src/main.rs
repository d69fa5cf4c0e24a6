use std::error::Error;

use clap::Parser;
use glam::Vec3A;
use log::{error, info};

mod cli;
mod loader;
mod logger;
mod output;
mod viewer;

use spherecast::camera::{Camera, Viewport};
use spherecast::framebuffer::Framebuffer;
use spherecast::light::Light;
use spherecast::random;
use spherecast::render::render;
use spherecast::scene::{Scene, SceneError};
use spherecast::sphere::Sphere;

use cli::Args;
use logger::init_logger;

/// Built-in demo scene: three shiny spheres resting on a large ground sphere.
fn create_demo_scene() -> Result<Scene, SceneError> {
    let spheres = vec![
        Sphere::new(Vec3A::new(0.0, -1.0, 3.0), 1.0, [255, 0, 0], 0.83)?,
        Sphere::new(Vec3A::new(2.0, 0.0, 4.0), 1.0, [0, 0, 255], 0.83)?,
        Sphere::new(Vec3A::new(-2.0, 0.0, 4.0), 1.0, [0, 255, 0], 0.91)?,
        Sphere::new(Vec3A::new(0.0, -5001.0, 0.0), 5000.0, [255, 255, 0], 0.98)?,
    ];
    let lights = vec![
        Light::ambient(0.2)?,
        Light::point(0.6, Vec3A::new(2.0, 1.0, 0.0))?,
        Light::directional(0.2, Vec3A::new(1.0, 4.0, 4.0))?,
    ];
    Ok(Scene::new(spheres, lights))
}

/// Generate a random scene with the requested number of spheres.
fn create_random_scene(count: u32) -> Result<Scene, SceneError> {
    let mut spheres = vec![Sphere::new(
        Vec3A::new(0.0, -5001.0, 0.0),
        5000.0,
        [230, 230, 230],
        0.1,
    )?];

    for _ in 0..count {
        let center = Vec3A::new(
            random::random_f32_range(-4.0, 4.0),
            random::random_f32_range(-1.0, 2.0),
            random::random_f32_range(3.0, 10.0),
        );
        let radius = random::random_f32_range(0.3, 1.0);
        let color = random::random_color(30, 255);
        let shininess = random::random_f32_range(0.0, 1.0);
        spheres.push(Sphere::new(center, radius, color, shininess)?);
    }

    let lights = vec![
        Light::ambient(0.2)?,
        Light::point(0.6, Vec3A::new(2.0, 1.0, 0.0))?,
        Light::directional(0.2, Vec3A::new(1.0, 4.0, 4.0))?,
    ];
    Ok(Scene::new(spheres, lights))
}

fn build_scene(args: &Args) -> Result<Scene, Box<dyn Error>> {
    if let Some(path) = &args.scene {
        return loader::load_scene(path);
    }
    if let Some(count) = args.random {
        info!("Generating a random scene with {} spheres", count);
        return Ok(create_random_scene(count)?);
    }
    Ok(create_demo_scene()?)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!(
        "SphereCast - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );
    info!("Framebuffer resolution: {}x{}", args.width, args.height);

    let scene = match build_scene(&args) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Failed to load scene: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Scene ready: {} spheres, {} lights",
        scene.spheres.len(),
        scene.lights.len()
    );

    // Offline mode: render one frame, save it, done.
    if let Some(output_path) = &args.output {
        if !output_path.ends_with(".png") {
            error!(
                "Unsupported file extension '{}'. Only .png output is supported.",
                std::path::Path::new(output_path)
                    .extension()
                    .unwrap_or_default()
                    .to_string_lossy()
            );
            std::process::exit(1);
        }

        let viewport = Viewport::new(args.width, args.height);
        let mut frame = Framebuffer::new(args.width, args.height);
        render(Some(&scene), &Camera::new(), &viewport, &mut frame);
        output::save_frame_as_png(&frame, output_path);
        return;
    }

    if let Err(e) = viewer::run(args.width, args.height, scene, args.worker) {
        error!("Viewer failed: {}", e);
        std::process::exit(1);
    }
}
