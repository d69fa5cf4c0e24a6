//! Animation driver: directional input to camera translation.
//!
//! A two-state machine. Idle means nothing is scheduled; Running means the
//! host's frame callback is armed and every tick translates the camera by the
//! elapsed time, renders, and reschedules. The driver never renders on its
//! own — it reports whether a tick warrants a render pass and the host's
//! frame loop acts on that.

use std::time::Duration;

use crate::camera::Camera;

/// Camera translation speed in scene units per second of held input.
pub const CAMERA_SPEED: f32 = 1.0;

/// Current on/off state of the four directional actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    /// Translate along +y.
    pub up: bool,
    /// Translate along -y.
    pub down: bool,
    /// Translate along -x.
    pub left: bool,
    /// Translate along +x.
    pub right: bool,
}

impl ActionState {
    /// True when any direction is held.
    pub fn any_active(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Apply a partial update, leaving unmentioned actions untouched.
    pub fn apply(&mut self, update: ActionUpdate) {
        if let Some(up) = update.up {
            self.up = up;
        }
        if let Some(down) = update.down {
            self.down = down;
        }
        if let Some(left) = update.left {
            self.left = left;
        }
        if let Some(right) = update.right {
            self.right = right;
        }
    }
}

/// Partial action map: only the mentioned directions change.
///
/// This is the shape that crosses the worker boundary, so input sources send
/// just the toggles that happened rather than the whole state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionUpdate {
    /// New state for "up", if it toggled.
    pub up: Option<bool>,
    /// New state for "down", if it toggled.
    pub down: Option<bool>,
    /// New state for "left", if it toggled.
    pub left: Option<bool>,
    /// New state for "right", if it toggled.
    pub right: Option<bool>,
}

impl ActionUpdate {
    /// True when the update mentions no action at all.
    pub fn is_empty(&self) -> bool {
        self.up.is_none() && self.down.is_none() && self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
enum DriverState {
    Idle,
    Running { last_tick: Duration },
}

/// Idle/Running state machine pacing camera updates.
///
/// Timestamps are durations since an arbitrary host epoch; only differences
/// between consecutive ticks matter.
#[derive(Debug, Clone, Copy)]
pub struct Animator {
    state: DriverState,
}

impl Animator {
    /// Create an idle animator.
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
        }
    }

    /// True while a frame callback should stay scheduled.
    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    /// Note an action-state change.
    ///
    /// Going from no active direction to at least one arms the loop and
    /// records `now` as the baseline for the next delta. Deactivation is not
    /// handled here — the next tick observes it and goes idle.
    pub fn actions_changed(&mut self, actions: &ActionState, now: Duration) {
        if actions.any_active() && !self.is_running() {
            self.state = DriverState::Running { last_tick: now };
        }
    }

    /// One scheduled tick.
    ///
    /// Returns true when the camera advanced and the host should render and
    /// schedule the next tick; false when the driver is (or just became)
    /// idle. An idle tick never mutates the camera.
    pub fn tick(&mut self, actions: &ActionState, camera: &mut Camera, now: Duration) -> bool {
        let last_tick = match self.state {
            DriverState::Idle => return false,
            DriverState::Running { last_tick } => last_tick,
        };

        if !actions.any_active() {
            self.state = DriverState::Idle;
            return false;
        }

        let dt = now.saturating_sub(last_tick).as_secs_f32();
        let dx = (actions.right as i8 - actions.left as i8) as f32 * CAMERA_SPEED * dt;
        let dy = (actions.up as i8 - actions.down as i8) as f32 * CAMERA_SPEED * dt;
        camera.translate(dx, dy);

        self.state = DriverState::Running { last_tick: now };
        true
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}
