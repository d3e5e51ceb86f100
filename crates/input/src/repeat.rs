//! Auto-repeat (DAS/ARR) for held movement keys.
//!
//! One direction is held at a time. Pressing it fires the move at once; after
//! `das_ms` of holding it fires again, then every `arr_ms`. Left, right and
//! down share the same timing.
//!
//! Terminals that never report key releases are handled with a timeout on the
//! time since the last movement key press, measured in `update` time.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::key_direction;
use crate::types::{Direction, GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

// Long enough to bridge the initial delay of typical terminal key repeat.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 600;

/// Maximum actions produced by a single `update`
pub const MAX_REPEATS_PER_UPDATE: usize = 32;

#[derive(Debug, Clone)]
pub struct AutoRepeat {
    held: Option<Direction>,
    held_ms: u32,
    repeats_fired: u32,
    since_key_ms: u32,
    das_ms: u32,
    arr_ms: u32,
    key_release_timeout_ms: u32,
}

fn action_for(direction: Direction) -> GameAction {
    match direction {
        Direction::Left => GameAction::MoveLeft,
        Direction::Right => GameAction::MoveRight,
        Direction::Down => GameAction::MoveDown,
    }
}

impl AutoRepeat {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            held: None,
            held_ms: 0,
            repeats_fired: 0,
            since_key_ms: 0,
            das_ms,
            arr_ms: arr_ms.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Start holding `direction`.
    ///
    /// Returns the immediate move, or `None` when the direction is already
    /// held (a terminal's own key repeat only refreshes the release timeout).
    pub fn press(&mut self, direction: Direction) -> Option<GameAction> {
        self.since_key_ms = 0;
        if self.held == Some(direction) {
            return None;
        }
        self.held = Some(direction);
        self.held_ms = 0;
        self.repeats_fired = 0;
        Some(action_for(direction))
    }

    /// Stop holding `direction`; releasing another key is ignored.
    pub fn release(&mut self, direction: Direction) {
        if self.held == Some(direction) {
            self.reset();
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        key_direction(code).and_then(|direction| self.press(direction))
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(direction) = key_direction(code) {
            self.release(direction);
        }
    }

    /// Advance by `elapsed_ms` and return the repeats that came due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, MAX_REPEATS_PER_UPDATE> {
        let mut actions = ArrayVec::new();

        let Some(direction) = self.held else {
            return actions;
        };

        self.since_key_ms = self.since_key_ms.saturating_add(elapsed_ms);
        if self.since_key_ms > self.key_release_timeout_ms {
            self.reset();
            return actions;
        }

        self.held_ms = self.held_ms.saturating_add(elapsed_ms);
        let due = self.repeats_due();
        while self.repeats_fired < due {
            if actions.try_push(action_for(direction)).is_err() {
                // Drop the backlog rather than replay it next frame.
                self.repeats_fired = due;
                break;
            }
            self.repeats_fired += 1;
        }

        actions
    }

    /// Repeats owed after `held_ms` of holding: one at `das_ms`, then one per `arr_ms`
    fn repeats_due(&self) -> u32 {
        if self.held_ms < self.das_ms {
            return 0;
        }
        1 + (self.held_ms - self.das_ms) / self.arr_ms
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.held_ms = 0;
        self.repeats_fired = 0;
        self.since_key_ms = 0;
    }
}

impl Default for AutoRepeat {
    fn default() -> Self {
        Self::new()
    }
}
