//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) where each cell is
//! either empty or holds a locked mino.
//! Uses a flat row-major vector; row 0 is the bottom row.
//! Coordinates: (col, row) where col ranges 0..width (left to right) and row
//! ranges 0..height (bottom to top). Row -1 is the floor sentinel.

use log::{debug, info};

use crate::error::EngineError;
use crate::events::{EventSink, GameEvent};
use crate::types::{MinoId, PieceColor, Pos, BOARD_HEIGHT, BOARD_WIDTH, FLOOR_ROW, MINOS_PER_PIECE};

/// A locked mino: its presentation handle and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mino {
    pub id: MinoId,
    pub color: PieceColor,
}

/// Rows removed by one line-clear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Row slot of each removal, in removal order. A slot repeats when the row
    /// that collapsed into it was full as well.
    pub rows: Vec<i16>,
}

impl LineClear {
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Row-major cells (row * width + col); `Some` iff occupied
    cells: Vec<Option<Mino>>,
    next_id: u32,
}

impl Board {
    /// Create an empty board with the default 10x20 size
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    pub fn with_size(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            next_id: 0,
        }
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.is_inside(pos) {
            return None;
        }
        Some(pos.row as usize * self.width as usize + pos.col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// True iff the position lies within `[0, width) x [0, height)`
    pub fn is_inside(&self, pos: Pos) -> bool {
        pos.col >= 0 && pos.col < self.width as i16 && pos.row >= 0 && pos.row < self.height as i16
    }

    /// Occupancy as seen by movement rules.
    ///
    /// The floor row (-1) is occupied at every column, even off the sides.
    /// Any other position outside the grid is free.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        if pos.row == FLOOR_ROW {
            return true;
        }
        match self.index(pos) {
            Some(idx) => self.cells[idx].is_some(),
            None => false,
        }
    }

    /// The mino at `pos`, if the cell is inside and occupied
    pub fn get(&self, pos: Pos) -> Option<Mino> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Color of the cell; empty and outside cells report the cleared color
    pub fn color_at(&self, pos: Pos) -> PieceColor {
        self.get(pos).map_or(PieceColor::CLEARED, |mino| mino.color)
    }

    /// Place or remove a mino directly, bypassing the lock rules.
    ///
    /// Intended for hosts restoring a position and for tests.
    /// Returns false if out of bounds.
    pub fn set(&mut self, pos: Pos, color: Option<PieceColor>) -> bool {
        let Some(idx) = self.index(pos) else {
            return false;
        };
        let mino = match color {
            Some(color) => Some(Mino {
                id: self.alloc_id(),
                color,
            }),
            None => None,
        };
        self.cells[idx] = mino;
        true
    }

    fn alloc_id(&mut self) -> MinoId {
        let id = MinoId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Number of occupied cells in `row`
    pub fn row_occupancy(&self, row: i16) -> usize {
        if row < 0 || row >= self.height as i16 {
            return 0;
        }
        let start = row as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i16) -> bool {
        self.row_occupancy(row) == self.width as usize
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Cell colors in row-major order, bottom row first
    pub fn colors(&self) -> impl Iterator<Item = Option<PieceColor>> + '_ {
        self.cells.iter().map(|cell| cell.map(|mino| mino.color))
    }

    /// Commit four cells of `color` and run the line-clear scan.
    pub fn lock_cells(
        &mut self,
        cells: &[Pos; MINOS_PER_PIECE],
        color: PieceColor,
        sink: &mut impl EventSink,
    ) -> Result<LineClear, EngineError> {
        self.commit_cells(cells, color, sink)?;
        Ok(self.clear_full_rows(sink))
    }

    /// Write four cells of `color` without scanning for full rows.
    ///
    /// All cells are validated before any is written, so a failed commit
    /// leaves the board untouched.
    pub fn commit_cells(
        &mut self,
        cells: &[Pos; MINOS_PER_PIECE],
        color: PieceColor,
        sink: &mut impl EventSink,
    ) -> Result<(), EngineError> {
        for &pos in cells {
            if !self.is_inside(pos) {
                return Err(EngineError::LockOutOfBounds { pos });
            }
            if self.is_occupied(pos) {
                return Err(EngineError::LockInvariantViolation { pos });
            }
        }

        for &pos in cells {
            let id = self.alloc_id();
            if let Some(idx) = self.index(pos) {
                self.cells[idx] = Some(Mino { id, color });
            }
            sink.emit(GameEvent::MinoCreated { id, pos, color });
        }
        Ok(())
    }

    /// Remove every full row, bottom up, collapsing the rows above.
    ///
    /// After a removal the same slot is checked again, since the row that fell
    /// into it may be full too. Removed mino ids are reported in one batch.
    pub fn clear_full_rows(&mut self, sink: &mut impl EventSink) -> LineClear {
        let mut clear = LineClear::default();
        let mut removed = Vec::new();

        let mut row = 0;
        while row < self.height as i16 {
            if self.is_row_full(row) {
                self.remove_row(row, &mut removed, sink);
                clear.rows.push(row);
            } else {
                row += 1;
            }
        }

        if !clear.rows.is_empty() {
            info!("cleared {} line(s) at rows {:?}", clear.count(), clear.rows);
            sink.emit(GameEvent::MinosRemoved { ids: removed });
            sink.emit(GameEvent::LinesCleared {
                rows: clear.rows.clone(),
            });
        }

        clear
    }

    fn remove_row(&mut self, row: i16, removed: &mut Vec<MinoId>, sink: &mut impl EventSink) {
        let width = self.width as usize;
        let start = row as usize * width;

        removed.extend(
            self.cells[start..start + width]
                .iter_mut()
                .filter_map(|cell| cell.take().map(|mino| mino.id)),
        );

        for upper in (row + 1)..self.height as i16 {
            let src = upper as usize * width;
            let dst = src - width;
            for col in 0..width {
                let moved = self.cells[src + col].take();
                if let Some(mino) = moved {
                    sink.emit(GameEvent::MinoMoved {
                        id: mino.id,
                        from: Pos::new(col as i16, upper),
                        to: Pos::new(col as i16, upper - 1),
                    });
                }
                self.cells[dst + col] = moved;
            }
        }
        debug!("collapsed rows above {row}");
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
