//! Random fleet placement.
//!
//! Vessels are dropped at random anchors and orientations until each one fits.
//! All vessels of a board draw from one shared attempt budget; when it runs out
//! the board is reported as exhausted and the caller starts again from an empty
//! board.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::{FLEET, PLACEMENT_ATTEMPTS};
use crate::vessel::{Orientation, Vessel};

/// Places a fixed list of vessel lengths onto boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetGenerator {
    lengths: Vec<usize>,
    attempt_budget: usize,
}

impl FleetGenerator {
    pub fn new(lengths: impl Into<Vec<usize>>, attempt_budget: usize) -> Self {
        Self {
            lengths: lengths.into(),
            attempt_budget,
        }
    }

    /// The fixed fleet with the standard attempt budget.
    pub fn standard() -> Self {
        Self::new(FLEET.to_vec(), PLACEMENT_ATTEMPTS)
    }

    /// Vessel lengths in placement order.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn attempt_budget(&self) -> usize {
        self.attempt_budget
    }

    /// Place every vessel on `board`, then [`Board::begin`] it.
    ///
    /// Returns the number of attempts used. On `PlacementExhausted` the board
    /// holds a partial fleet and must be thrown away.
    pub fn populate<R: Rng>(&self, rng: &mut R, board: &mut Board) -> Result<usize, BoardError> {
        let size = board.size();
        let mut attempts = 0;
        for &length in &self.lengths {
            loop {
                attempts += 1;
                if attempts > self.attempt_budget {
                    return Err(BoardError::PlacementExhausted);
                }
                let anchor =
                    Coordinate::from((rng.random_range(0..size), rng.random_range(0..size)));
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match board.place_vessel(Vessel::new(anchor, length, orientation)?) {
                    Ok(()) => break,
                    Err(BoardError::InvalidPlacement) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        board.begin();
        Ok(attempts)
    }

    /// One placement attempt on a fresh `size×size` board.
    pub fn generate<R: Rng>(&self, rng: &mut R, size: usize) -> Result<Board, BoardError> {
        let mut board = Board::new(size)?;
        self.populate(rng, &mut board)?;
        Ok(board)
    }

    /// Generate a board, starting over from empty up to `max_restarts` times
    /// when the attempt budget runs out.
    pub fn generate_board<R: Rng>(
        &self,
        rng: &mut R,
        size: usize,
        max_restarts: usize,
    ) -> Result<Board, BoardError> {
        for round in 0..=max_restarts {
            match self.generate(rng, size) {
                Ok(board) => return Ok(board),
                Err(BoardError::PlacementExhausted) => {
                    debug!(
                        "fleet placement exhausted on {}x{} board (round {}/{})",
                        size,
                        size,
                        round + 1,
                        max_restarts + 1
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::PlacementExhausted)
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::standard()
    }
}
