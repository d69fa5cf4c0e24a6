//! Worker-isolated deployment of the rendering core.
//!
//! The whole engine state (scene, camera, viewport, action flags, framebuffer
//! mirror) moves into a dedicated thread that owns it exclusively. The host
//! talks to it through one-way mailbox messages and receives finished frame
//! snapshots through the sink handed over in [`Message::Canvas`]. Each
//! message is processed to completion before the next one, so scene and
//! resolution replacement can never race an in-flight render pass.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::{error, warn};

use crate::animation::{ActionState, ActionUpdate, Animator};
use crate::camera::{Camera, Viewport};
use crate::framebuffer::Framebuffer;
use crate::render::render;
use crate::scene::Scene;

/// Pause between self-paced animation ticks, roughly display cadence.
const FRAME_INTERVAL: Duration = Duration::from_micros(16_600);

/// Channel end through which the worker presents finished frames.
pub type FrameSink = Sender<Framebuffer>;

/// Mailbox messages accepted by the worker.
///
/// All of them are one-way, fire-and-forget notifications with no reply.
pub enum Message {
    /// Hand over the presentation sink. Binding a surface is allowed once;
    /// later attempts are rejected.
    Canvas(FrameSink),
    /// Replace the scene wholesale.
    Scene(Scene),
    /// Apply a partial action map to the directional inputs.
    Actions(ActionUpdate),
    /// Retarget the resolution; the framebuffer mirror and viewport are
    /// rebuilt between ticks.
    Dimensions {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

/// Host-side handle. Dropping it closes the mailbox and ends the worker.
pub struct WorkerHandle {
    sender: Option<Sender<Message>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    /// Post a message to the worker's mailbox.
    pub fn send(&self, message: Message) {
        let delivered = self
            .sender
            .as_ref()
            .is_some_and(|sender| sender.send(message).is_ok());
        if !delivered {
            warn!("render worker is gone, message dropped");
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        // Closing the channel unblocks the mailbox recv; then the thread can
        // be joined without deadlock.
        drop(self.sender.take());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Start the render worker.
pub fn spawn() -> WorkerHandle {
    let (sender, receiver) = mpsc::channel();
    let thread = thread::spawn(move || run(receiver));
    WorkerHandle {
        sender: Some(sender),
        thread: Some(thread),
    }
}

/// Mailbox loop: block while idle, drain-then-tick while animating.
fn run(mailbox: Receiver<Message>) {
    let epoch = Instant::now();
    let mut state = WorkerState::new();

    loop {
        if state.is_animating() {
            loop {
                match mailbox.try_recv() {
                    Ok(message) => state.handle(message, epoch.elapsed()),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return,
                }
            }
            state.tick(epoch.elapsed());
            // Cooperative pacing: yield between ticks instead of spinning.
            thread::sleep(FRAME_INTERVAL);
        } else {
            match mailbox.recv() {
                Ok(message) => state.handle(message, epoch.elapsed()),
                Err(_) => return,
            }
        }
    }
}

/// The worker's owned state bundle.
///
/// Kept separate from the thread plumbing so message handling and ticking
/// can be driven directly in tests.
struct WorkerState {
    surface: Option<FrameSink>,
    scene: Option<Scene>,
    camera: Camera,
    viewport: Viewport,
    mirror: Framebuffer,
    actions: ActionState,
    animator: Animator,
}

impl WorkerState {
    fn new() -> Self {
        Self {
            surface: None,
            scene: None,
            camera: Camera::new(),
            viewport: Viewport::new(1, 1),
            mirror: Framebuffer::new(1, 1),
            actions: ActionState::default(),
            animator: Animator::new(),
        }
    }

    /// Process one message to completion.
    fn handle(&mut self, message: Message, now: Duration) {
        match message {
            Message::Canvas(sink) => {
                if self.surface.is_some() {
                    error!("display surface already bound, rejecting second canvas");
                    return;
                }
                // Nothing to show yet; the first Dimensions or Scene message
                // triggers the first presentation.
                self.surface = Some(sink);
            }
            Message::Scene(scene) => {
                self.scene = Some(scene);
                self.present();
            }
            Message::Dimensions { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.mirror =
                    Framebuffer::new(self.viewport.pixel_width, self.viewport.pixel_height);
                self.present();
            }
            Message::Actions(update) => {
                if update.is_empty() {
                    return;
                }
                self.actions.apply(update);
                self.animator.actions_changed(&self.actions, now);
            }
        }
    }

    /// One self-paced tick; renders and presents when the camera advanced.
    fn tick(&mut self, now: Duration) -> bool {
        if self.animator.tick(&self.actions, &mut self.camera, now) {
            self.present();
            return true;
        }
        false
    }

    fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Render the current state into the mirror and push a snapshot.
    fn present(&mut self) {
        let surface = match &self.surface {
            Some(surface) => surface,
            None => {
                error!("no display surface bound, refusing to render");
                return;
            }
        };
        render(
            self.scene.as_ref(),
            &self.camera,
            &self.viewport,
            &mut self.mirror,
        );
        if surface.send(self.mirror.clone()).is_err() {
            warn!("presentation sink closed, frame dropped");
        }
    }
}
