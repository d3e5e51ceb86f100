//! Game coordinator - drives gravity, dispatches commands and runs the
//! spawn / lock / clear cycle.
//!
//! The coordinator owns the board, the sequencer and the active piece. Hosts
//! call [`Game::tick`] every frame and [`Game::apply_action`] for each input
//! command, then drain [`GameEvent`]s to keep their presentation in sync.
//!
//! ```text
//! Spawning -> Active -> Locking -> LineClearing -> Spawning
//!                 \                                   \
//!                  `---------------> GameOver <--------'
//! ```
//!
//! `Locking` and `LineClearing` are passed through synchronously inside a
//! single call; between calls the phase is `Active` or `GameOver`.

use log::{debug, error, info};
use serde::Serialize;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::events::{EventSink, GameEvent};
use crate::piece::{ActivePiece, MoveCheck};
use crate::sequencer::{spawn_anchor_for, PieceRule, PieceSequencer};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Direction, GameAction, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Spawning,
    Active,
    Locking,
    LineClearing,
    GameOver,
}

/// Status of a movement, rotation or gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved or rotated.
    Moved,
    /// Out of bounds, blocked, or the game does not accept commands right now.
    Rejected,
    /// The piece locked and the next one is in play.
    Locked { lines_cleared: u8 },
    /// The step ended the game.
    GameOverTriggered,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    sequencer: PieceSequencer,
    active: Option<ActivePiece>,
    phase: GamePhase,
    started: bool,
    paused: bool,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    lines_cleared: u32,
    pieces_locked: u32,
    events: Vec<GameEvent>,
}

impl Game {
    /// Build a game from validated configuration.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let board = Board::with_size(config.board_width, config.board_height);
        let rule = match config.seed {
            Some(seed) => PieceRule::uniform(seed),
            None => PieceRule::from_entropy(),
        };
        let spawn = spawn_anchor_for(config.board_width, config.board_height);
        let sequencer = PieceSequencer::with_spawn_anchor(rule, spawn);

        Ok(Self::with_parts(board, sequencer, config.fall_interval_ms))
    }

    /// Assemble a game from explicit collaborators.
    pub fn with_parts(board: Board, sequencer: PieceSequencer, fall_interval_ms: u32) -> Self {
        Self {
            board,
            sequencer,
            active: None,
            phase: GamePhase::Spawning,
            started: false,
            paused: false,
            fall_interval_ms: fall_interval_ms.max(1),
            fall_timer_ms: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            events: Vec::new(),
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for hosts restoring a position (and for tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.sequencer.next()
    }

    pub fn sequencer(&self) -> &PieceSequencer {
        &self.sequencer
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Events emitted since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            cells: self.board.colors().collect(),
            active: self.active.as_ref().map(ActiveSnapshot::from),
            next: self.sequencer.next(),
            phase: self.phase,
            paused: self.paused,
            lines_cleared: self.lines_cleared,
            pieces_locked: self.pieces_locked,
        }
    }

    fn accepts_commands(&self) -> bool {
        self.started && !self.paused && self.phase == GamePhase::Active
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            debug!("phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Put the next piece into play.
    ///
    /// Returns false and ends the game if any in-grid cell of the new piece is
    /// already occupied.
    fn spawn(&mut self) -> bool {
        self.set_phase(GamePhase::Spawning);
        let piece = self.sequencer.generate(&mut self.events);

        let blocked = piece
            .cells()
            .iter()
            .any(|&cell| self.board.is_inside(cell) && self.board.is_occupied(cell));
        if blocked {
            info!("spawn of {:?} at {} is blocked", piece.kind(), piece.anchor());
            self.enter_game_over();
            return false;
        }

        self.active = Some(piece);
        self.fall_timer_ms = 0;
        self.set_phase(GamePhase::Active);
        true
    }

    fn enter_game_over(&mut self) {
        self.active = None;
        self.set_phase(GamePhase::GameOver);
        info!(
            "game over after {} piece(s), {} line(s)",
            self.pieces_locked, self.lines_cleared
        );
        self.events.emit(GameEvent::GameOver);
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Returns the outcome of the gravity step when one fires.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<MoveOutcome> {
        if !self.accepts_commands() {
            return None;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return None;
        }
        self.fall_timer_ms = 0;
        Some(self.gravity_tick())
    }

    /// One forced downward step
    pub fn gravity_tick(&mut self) -> MoveOutcome {
        self.move_piece(Direction::Down)
    }

    pub fn move_piece(&mut self, direction: Direction) -> MoveOutcome {
        if !self.accepts_commands() {
            return MoveOutcome::Rejected;
        }
        let Some(mut piece) = self.active else {
            return MoveOutcome::Rejected;
        };

        match piece.attempt_move(direction, &self.board) {
            MoveCheck::Moved => {
                self.active = Some(piece);
                MoveOutcome::Moved
            }
            MoveCheck::Rejected => MoveOutcome::Rejected,
            MoveCheck::Landed => self.lock_active(piece),
        }
    }

    pub fn rotate(&mut self) -> MoveOutcome {
        if !self.accepts_commands() {
            return MoveOutcome::Rejected;
        }
        let Some(mut piece) = self.active else {
            return MoveOutcome::Rejected;
        };

        if piece.attempt_rotate(&self.board) {
            self.active = Some(piece);
            MoveOutcome::Moved
        } else {
            MoveOutcome::Rejected
        }
    }

    fn lock_active(&mut self, piece: ActivePiece) -> MoveOutcome {
        self.set_phase(GamePhase::Locking);
        self.active = None;

        let cells = piece.cells();
        if let Err(err) = self
            .board
            .commit_cells(&cells, piece.kind().color(), &mut self.events)
        {
            match err {
                EngineError::LockOutOfBounds { pos } => {
                    info!("{:?} locked outside the field at {pos}", piece.kind());
                }
                err => {
                    error!("{err}");
                    if cfg!(debug_assertions) {
                        panic!("movement gating let a piece overlap the stack: {err}");
                    }
                }
            }
            self.enter_game_over();
            return MoveOutcome::GameOverTriggered;
        }

        self.pieces_locked += 1;
        debug!("locked {:?} at {:?}", piece.kind(), cells);
        self.events.emit(GameEvent::PieceLocked {
            kind: piece.kind(),
            cells,
        });

        self.set_phase(GamePhase::LineClearing);
        let clear = self.board.clear_full_rows(&mut self.events);
        self.lines_cleared += clear.count() as u32;

        if self.spawn() {
            MoveOutcome::Locked {
                lines_cleared: clear.count() as u8,
            }
        } else {
            MoveOutcome::GameOverTriggered
        }
    }

    /// Flip the pause flag. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.is_game_over() || !self.started {
            return false;
        }
        self.paused = !self.paused;
        self.events.emit(GameEvent::Paused {
            paused: self.paused,
        });
        true
    }

    /// Empty the board and start over. The sequencer keeps its rule and state.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.paused = false;
        self.fall_timer_ms = 0;
        self.lines_cleared = 0;
        self.pieces_locked = 0;
        self.started = true;
        self.set_phase(GamePhase::Spawning);
        self.events.emit(GameEvent::Restarted);
        self.spawn();
    }

    /// Apply a host command.
    ///
    /// Movement and rotation report a [`MoveOutcome`]; pause and restart
    /// return `None`.
    pub fn apply_action(&mut self, action: GameAction) -> Option<MoveOutcome> {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown => {
                action.direction().map(|direction| self.move_piece(direction))
            }
            GameAction::Rotate => Some(self.rotate()),
            GameAction::Pause => {
                self.toggle_pause();
                None
            }
            GameAction::Restart => {
                self.restart();
                None
            }
        }
    }
}
