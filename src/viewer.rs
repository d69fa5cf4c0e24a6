//! Interactive viewer window.
//!
//! Owns the display surface (a minifb window and the presented pixel
//! buffer), maps key toggles to directional action updates and paces frames
//! off the window's update-rate limit. Hosts either deployment mode: the
//! engine running in-process, or a handle to the isolated worker.

use std::error::Error;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::info;
use minifb::{Key, Window, WindowOptions};

use spherecast::animation::{ActionState, ActionUpdate, Animator};
use spherecast::camera::{Camera, Viewport};
use spherecast::framebuffer::{Framebuffer, BACKGROUND};
use spherecast::render::render;
use spherecast::scene::Scene;
use spherecast::worker::{self, Message};

/// Open the window and run until it closes or Escape is pressed.
pub fn run(width: u32, height: u32, scene: Scene, isolated: bool) -> Result<(), Box<dyn Error>> {
    let mut window = Window::new(
        "SphereCast",
        width as usize,
        height as usize,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )?;
    window.limit_update_rate(Some(Duration::from_micros(16_600)));

    info!(
        "Viewer up at {}x{} ({} engine), arrows/WASD translate, Esc quits",
        width,
        height,
        if isolated { "worker" } else { "in-process" }
    );

    if isolated {
        run_isolated(window, width, height, scene)
    } else {
        run_in_process(window, width, height, scene)
    }
}

/// Diff the window's key state against the current actions.
///
/// Only toggles that actually happened are reported, matching the partial
/// action map that crosses the worker boundary.
fn poll_actions(window: &Window, actions: &ActionState) -> ActionUpdate {
    let toggle = |was: bool, is: bool| if was != is { Some(is) } else { None };
    ActionUpdate {
        up: toggle(
            actions.up,
            window.is_key_down(Key::Up) || window.is_key_down(Key::W),
        ),
        down: toggle(
            actions.down,
            window.is_key_down(Key::Down) || window.is_key_down(Key::S),
        ),
        left: toggle(
            actions.left,
            window.is_key_down(Key::Left) || window.is_key_down(Key::A),
        ),
        right: toggle(
            actions.right,
            window.is_key_down(Key::Right) || window.is_key_down(Key::D),
        ),
    }
}

/// The engine and the window share this thread.
fn run_in_process(
    mut window: Window,
    width: u32,
    height: u32,
    scene: Scene,
) -> Result<(), Box<dyn Error>> {
    let viewport = Viewport::new(width, height);
    let mut frame = Framebuffer::new(width, height);
    let mut camera = Camera::new();
    let mut actions = ActionState::default();
    let mut animator = Animator::new();
    let epoch = Instant::now();

    render(Some(&scene), &camera, &viewport, &mut frame);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let update = poll_actions(&window, &actions);
        if !update.is_empty() {
            actions.apply(update);
            animator.actions_changed(&actions, epoch.elapsed());
        }

        if animator.tick(&actions, &mut camera, epoch.elapsed()) {
            render(Some(&scene), &camera, &viewport, &mut frame);
        }

        window.update_with_buffer(&frame.as_packed_argb(), width as usize, height as usize)?;
    }

    Ok(())
}

/// The engine lives in a worker; this thread only forwards input and
/// presents whatever frame snapshot arrived last.
fn run_isolated(
    mut window: Window,
    width: u32,
    height: u32,
    scene: Scene,
) -> Result<(), Box<dyn Error>> {
    let engine = worker::spawn();
    let (sink, frames) = mpsc::channel();
    engine.send(Message::Canvas(sink));
    engine.send(Message::Dimensions { width, height });
    engine.send(Message::Scene(scene));

    let mut actions = ActionState::default();
    let mut presented = Framebuffer::new(width, height);
    presented.clear(BACKGROUND);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let update = poll_actions(&window, &actions);
        if !update.is_empty() {
            actions.apply(update);
            engine.send(Message::Actions(update));
        }

        // Keep the newest frame that matches the surface size; stale sizes
        // can only appear around a resolution change.
        if let Some(frame) = frames
            .try_iter()
            .filter(|f| f.width() == width && f.height() == height)
            .last()
        {
            presented = frame;
        }

        window.update_with_buffer(&presented.as_packed_argb(), width as usize, height as usize)?;
    }

    Ok(())
}
