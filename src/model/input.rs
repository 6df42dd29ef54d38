use serde::{Deserialize, Serialize};

/// Logical control signals delivered by the host's input source.
///
/// The model never registers event handlers itself; the frontend translates
/// raw key events into these and forwards them as discrete press/release
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlSignal {
    Up,
    Down,
    Left,
    Right,
    Burst,
    RestToggle,
}

/// Normalized movement intent read by the simulation once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementIntent {
    pub dx: f64,
    pub dy: f64,
    pub burst: bool,
    pub resting: bool,
}

/// Directional intent and modifier flags for a player-controlled creature.
///
/// Direction flags and `burst` track key held state; `resting` is a toggle
/// that flips on press and ignores release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub burst: bool,
    pub resting: bool,
}

impl InputState {
    pub fn press(&mut self, signal: ControlSignal) {
        match signal {
            ControlSignal::Up => self.up = true,
            ControlSignal::Down => self.down = true,
            ControlSignal::Left => self.left = true,
            ControlSignal::Right => self.right = true,
            ControlSignal::Burst => self.burst = true,
            ControlSignal::RestToggle => self.resting = !self.resting,
        }
    }

    pub fn release(&mut self, signal: ControlSignal) {
        match signal {
            ControlSignal::Up => self.up = false,
            ControlSignal::Down => self.down = false,
            ControlSignal::Left => self.left = false,
            ControlSignal::Right => self.right = false,
            ControlSignal::Burst => self.burst = false,
            // A rest toggle only reacts to presses.
            ControlSignal::RestToggle => {}
        }
    }

    /// Collapses the direction flags into a unit-length movement vector so
    /// diagonal movement never exceeds straight-line speed.
    pub fn movement_vector(&self) -> MovementIntent {
        let mut dx: f64 = 0.0;
        let mut dy: f64 = 0.0;

        if self.up {
            dy -= 1.0;
        }
        if self.down {
            dy += 1.0;
        }
        if self.left {
            dx -= 1.0;
        }
        if self.right {
            dx += 1.0;
        }

        let magnitude = (dx * dx + dy * dy).sqrt();
        if magnitude > 0.0 {
            dx /= magnitude;
            dy /= magnitude;
        }

        MovementIntent {
            dx,
            dy,
            burst: self.burst,
            resting: self.resting,
        }
    }
}
