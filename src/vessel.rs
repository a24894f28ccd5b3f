//! Vessel geometry and hit-point tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coordinate};

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells advance along the column axis.
    Horizontal,
    /// Cells advance along the row axis.
    Vertical,
}

/// A vessel occupying a straight run of cells starting at its anchor.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    anchor: Coordinate,
    orientation: Orientation,
    cells: Vec<Coordinate>,
    remaining: usize,
}

impl Vessel {
    /// Build a vessel of `length` cells from `anchor` along `orientation`.
    ///
    /// Bounds are not checked here; the board rejects vessels that leave it.
    pub fn new(
        anchor: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidPlacement);
        }
        let cells = (0..length)
            .map(|i| {
                let i = i32::try_from(i).unwrap_or(i32::MAX);
                match orientation {
                    Orientation::Horizontal => anchor.offset(0, i),
                    Orientation::Vertical => anchor.offset(i, 0),
                }
            })
            .collect();
        Ok(Vessel {
            anchor,
            orientation,
            cells,
            remaining: length,
        })
    }

    /// First cell of the vessel.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells, anchor first.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Hit points left.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    /// Take one hit. Returns `true` when this hit sank the vessel.
    pub(crate) fn take_hit(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ anchor: ({}, {}), len: {}, orientation: {:?}, remaining: {} }}",
            self.anchor.row(),
            self.anchor.col(),
            self.len(),
            self.orientation,
            self.remaining,
        )
    }
}
