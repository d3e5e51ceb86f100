//! Scripted headless controller.
//!
//! Every new piece gets a random number of rotations and a random sideways
//! shift. The piece is first stepped down until every rotation state fits
//! inside the field, then the plan is carried out, then the controller holds
//! "down" through the auto-repeat handler until the piece locks.

use log::info;
use rand::prelude::*;

use crate::core::{EngineConfig, EngineError, Game, GameEvent, GameSnapshot, MoveOutcome};
use crate::input::AutoRepeat;
use crate::types::{Direction, GameAction, MINOS_PER_PIECE, TICK_MS};

// Give up on a plan that keeps bumping into walls or the stack.
const PLAN_PATIENCE_FRAMES: u32 = 30;

/// Rotations and sideways steps still to perform for the current piece.
#[derive(Debug, Default, Clone, Copy)]
struct Plan {
    rotations: u8,
    shift: i8,
    rejected_frames: u32,
}

impl Plan {
    fn random(rng: &mut StdRng) -> Self {
        Self {
            rotations: rng.gen_range(0..4),
            shift: rng.gen_range(-5..=5),
            rejected_frames: 0,
        }
    }

    fn next_action(&self) -> Option<GameAction> {
        if self.rejected_frames >= PLAN_PATIENCE_FRAMES {
            return None;
        }
        if self.rotations > 0 {
            Some(GameAction::Rotate)
        } else if self.shift < 0 {
            Some(GameAction::MoveLeft)
        } else if self.shift > 0 {
            Some(GameAction::MoveRight)
        } else {
            None
        }
    }

    fn record(&mut self, action: GameAction, outcome: Option<MoveOutcome>) {
        if outcome != Some(MoveOutcome::Moved) {
            self.rejected_frames += 1;
            return;
        }
        match action {
            GameAction::Rotate => self.rotations -= 1,
            GameAction::MoveLeft => self.shift += 1,
            GameAction::MoveRight => self.shift -= 1,
            _ => {}
        }
    }
}

/// True while some rotation state of the active piece would stick out above
/// the field. Shape offsets never exceed `MINOS_PER_PIECE - 1` rows.
fn above_rotation_room(game: &Game) -> bool {
    let ceiling = game.board().height() as i16 - (MINOS_PER_PIECE as i16 - 1);
    game.active().is_some_and(|piece| piece.anchor().row >= ceiling)
}

/// Play until game over or `piece_cap` locks and return the final snapshot.
pub fn run(config: &EngineConfig, piece_cap: u32) -> Result<GameSnapshot, EngineError> {
    let mut game = Game::new(config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut repeat = AutoRepeat::with_config(config.das_ms, config.arr_ms);
    let mut plan = Plan::default();

    game.start();
    info!("simulation started, piece cap {piece_cap}");

    while !game.is_game_over() && game.pieces_locked() < piece_cap {
        for event in game.drain_events() {
            if let GameEvent::PieceSpawned { .. } = event {
                plan = Plan::random(&mut rng);
                repeat.reset();
            }
        }

        if above_rotation_room(&game) {
            game.move_piece(Direction::Down);
        } else if let Some(action) = plan.next_action() {
            let outcome = game.apply_action(action);
            plan.record(action, outcome);
        } else if repeat.held().is_none() {
            if let Some(action) = repeat.press(Direction::Down) {
                game.apply_action(action);
            }
        }

        for action in repeat.update(TICK_MS) {
            game.apply_action(action);
        }
        game.tick(TICK_MS);
    }

    info!(
        "simulation finished: {} piece(s), {} line(s), game over: {}",
        game.pieces_locked(),
        game.lines_cleared(),
        game.is_game_over()
    );
    Ok(game.snapshot())
}
