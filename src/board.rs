//! Board state: vessel placement, shot resolution and the blocked set.
//!
//! A board goes through two phases. During setup vessels are placed and every
//! placed cell plus its one-cell buffer is *blocked*, so later vessels can
//! neither overlap nor touch it. [`Board::begin`] then drops that bookkeeping
//! and the blocked set is reused to record fired-upon cells, including the
//! buffer revealed around each sunk vessel.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::config::MAX_BOARD_SIZE;
use crate::vessel::Vessel;

type BB = BitBoard<u64>;

/// Displayed state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied,
    Hit,
    Miss,
}

impl Cell {
    /// Glyph used by the text rendering. Hidden boards show vessels as water.
    pub fn glyph(self, hidden: bool) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied if hidden => '.',
            Cell::Occupied => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
        }
    }
}

/// How the exclusion pass around a vessel treats the buffer cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exclusion {
    /// Block only; used while placing the fleet.
    Silent,
    /// Block and mark as misses; used once a vessel is sunk.
    Visible,
}

/// One side's board: vessels, hits, misses and the blocked set.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    hidden: bool,
    ship_map: BB,
    hits: BB,
    misses: BB,
    blocked: BB,
    vessels: Vec<Vessel>,
    sunk: usize,
    begun: bool,
}

impl Board {
    /// Create an empty `size×size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        let empty = BB::new(size).map_err(|_| BoardError::InvalidSize(size))?;
        Ok(Board {
            size,
            hidden: false,
            ship_map: empty.clone(),
            hits: empty.clone(),
            misses: empty.clone(),
            blocked: empty,
            vessels: Vec::new(),
            sunk: 0,
            begun: false,
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether rendering masks the vessels.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    /// Number of vessels whose hit points reached zero.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` once every placed vessel is sunk.
    ///
    /// The vessel list is fixed by [`Board::begin`], so on a board filled by
    /// the fleet generator this is the same as `FLEET_SIZE` vessels sunk.
    pub fn is_defeated(&self) -> bool {
        !self.vessels.is_empty() && self.sunk == self.vessels.len()
    }

    /// Whether `coord` lies on the board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.to_index(self.size).is_some()
    }

    /// Whether `coord` is in the blocked set. Off-board coordinates are not.
    pub fn is_blocked(&self, coord: Coordinate) -> bool {
        coord
            .to_index(self.size)
            .and_then(|(r, c)| self.blocked.get(r, c).ok())
            .unwrap_or(false)
    }

    /// State of the cell at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        let (r, c) = coord.to_index(self.size)?;
        let cell = if self.hits.get(r, c).ok()? {
            Cell::Hit
        } else if self.misses.get(r, c).ok()? {
            Cell::Miss
        } else if self.ship_map.get(r, c).ok()? {
            Cell::Occupied
        } else {
            Cell::Empty
        };
        Some(cell)
    }

    /// Whether [`Board::begin`] closed placement.
    pub fn is_begun(&self) -> bool {
        self.begun
    }

    /// Occupancy mask of all vessels.
    pub fn ship_map(&self) -> &BB {
        &self.ship_map
    }

    pub fn hits(&self) -> &BB {
        &self.hits
    }

    pub fn misses(&self) -> &BB {
        &self.misses
    }

    /// Cells excluded from placement (during setup) or from shots (after
    /// [`Board::begin`]).
    pub fn blocked(&self) -> &BB {
        &self.blocked
    }

    /// Place `vessel`, reserving a one-cell buffer around it.
    ///
    /// Fails with `InvalidPlacement`, leaving the board untouched, when any
    /// cell is off the board or already blocked, and with `BoardFrozen` once
    /// the board has begun.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if self.begun {
            return Err(BoardError::BoardFrozen);
        }
        let mut mask = BB::new(self.size)?;
        for &coord in vessel.cells() {
            let (r, c) = coord
                .to_index(self.size)
                .ok_or(BoardError::InvalidPlacement)?;
            mask.set(r, c)?;
        }
        if !(&mask & &self.blocked).is_empty() {
            return Err(BoardError::InvalidPlacement);
        }
        self.ship_map |= &mask;
        self.blocked |= &mask;
        self.exclude_around(vessel.cells(), Exclusion::Silent)?;
        self.vessels.push(vessel);
        Ok(())
    }

    /// Close placement and drop the placement-time blocked set so shots start
    /// from a clean slate. Vessels and their cells are kept.
    pub fn begin(&mut self) {
        debug!(
            "board {}x{} ready with {} vessels",
            self.size,
            self.size,
            self.vessels.len()
        );
        self.blocked.clear_all();
        self.begun = true;
    }

    /// Fire at `target`.
    ///
    /// `Hit` and `Sunk` mean the shooter goes again, `Miss` passes the turn.
    /// Sinking a vessel marks its untouched surroundings as misses.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        let (row, col) = target
            .to_index(self.size)
            .ok_or(BoardError::OutOfBounds)?;
        if self.blocked.get(row, col)? {
            return Err(BoardError::AlreadyTargeted);
        }
        self.blocked.set(row, col)?;

        let Some(index) = self.vessels.iter().position(|v| v.contains(target)) else {
            self.misses.set(row, col)?;
            return Ok(ShotOutcome::Miss);
        };
        self.hits.set(row, col)?;
        if !self.vessels[index].take_hit() {
            return Ok(ShotOutcome::Hit);
        }
        self.sunk += 1;
        let cells = self.vessels[index].cells().to_vec();
        self.exclude_around(&cells, Exclusion::Visible)?;
        info!(
            "vessel {} (length {}) sunk at {}, {}/{} down",
            index,
            cells.len(),
            target,
            self.sunk,
            self.vessels.len()
        );
        Ok(ShotOutcome::Sunk(index))
    }

    /// Block every unblocked on-board neighbour of `cells`.
    fn exclude_around(&mut self, cells: &[Coordinate], mode: Exclusion) -> Result<(), BoardError> {
        for &cell in cells {
            for (r, c) in cell.neighbors().filter_map(|n| n.to_index(self.size)) {
                if self.blocked.get(r, c)? {
                    continue;
                }
                self.blocked.set(r, c)?;
                if mode == Exclusion::Visible {
                    self.misses.set(r, c)?;
                }
            }
        }
        Ok(())
    }
}

/// Text grid with one-based headers; hidden boards mask their vessels.
///
/// Row labels are right-aligned and columns centred, both widened to fit the
/// largest index.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = decimal_width(self.size);
        let label = digits.max(2);
        let column = (digits + 2).max(3);
        write!(f, "{:label$} |", "")?;
        for c in 1..=self.size {
            write!(f, "{:^column$}|", c)?;
        }
        for r in 0..self.size {
            write!(f, "\n{:>label$} |", r + 1)?;
            for c in 0..self.size {
                let cell = self
                    .cell(Coordinate::from((r, c)))
                    .unwrap_or(Cell::Empty);
                write!(f, "{:^column$}|", cell.glyph(self.hidden))?;
            }
        }
        Ok(())
    }
}

fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  hidden: {},\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  blocked: {:?},\n  sunk: {},\n  begun: {},\n  vessels: {:?}\n}}",
            self.size,
            self.hidden,
            self.ship_map,
            self.hits,
            self.misses,
            self.blocked,
            self.sunk,
            self.begun,
            self.vessels
        )
    }
}
