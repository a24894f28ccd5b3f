//! Common types for the game: coordinates, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Offsets of the eight cells surrounding a coordinate.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position on a board, zero-based.
///
/// The axes are signed so that targets left or above the board can be
/// represented and rejected by the board rather than by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    /// Create a coordinate from a zero-based row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Coordinate shifted by `(d_row, d_col)`.
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(
            self.row.saturating_add(d_row),
            self.col.saturating_add(d_col),
        )
    }

    /// The eight surrounding coordinates, including ones off the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// `(row, col)` as grid indices when the coordinate lies on a
    /// `size×size` board.
    pub fn to_index(self, size: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < size && col < size).then_some((row, col))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

/// Renders the one-based `row col` form players type in.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", i64::from(self.row) + 1, i64::from(self.col) + 1)
    }
}

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot struck a vessel that is still afloat.
    Hit,
    /// Shot struck nothing.
    Miss,
    /// Shot sank a vessel, carrying its index in placement order.
    Sunk(usize),
}

impl ShotOutcome {
    /// `Hit` and `Sunk` let the shooter fire again.
    pub fn grants_extra_shot(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "hit"),
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Sunk(_) => write!(f, "sunk"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Board side is zero or its cells cannot be addressed.
    InvalidSize(usize),
    /// Shot target lies outside the board.
    OutOfBounds,
    /// Target was already fired upon or lies in exhausted territory.
    AlreadyTargeted,
    /// Vessel leaves the board, overlaps or touches another vessel.
    InvalidPlacement,
    /// Attempt budget ran out before the whole fleet was placed.
    PlacementExhausted,
    /// Placement was attempted after the board began.
    BoardFrozen,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidSize(n) => write!(f, "Board size {} is not supported", n),
            BoardError::OutOfBounds => write!(f, "Target is outside the board"),
            BoardError::AlreadyTargeted => write!(f, "That cell was already fired upon"),
            BoardError::InvalidPlacement => write!(f, "Vessel cannot be placed there"),
            BoardError::PlacementExhausted => write!(f, "Ran out of attempts placing the fleet"),
            BoardError::BoardFrozen => write!(f, "Vessels cannot be placed once the game has begun"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
