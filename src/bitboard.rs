//! A square bitboard whose side length is chosen at runtime.
//!
//! Cells are packed row-major into a run of unsigned words of type `T`, so any
//! side length whose cell count fits in `usize` can be stored. Each row-major
//! cell index `i` lives in word `i / T::BITS` at bit `i % T::BITS`.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{BitAnd, BitOrAssign};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// `n * n` cells cannot be addressed.
    SizeTooLarge { n: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n } => {
                write!(f, "SizeTooLarge: {}x{} cells overflow usize", n, n)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// Unsigned integers usable as cell storage.
pub trait CellBits: PrimInt + Unsigned {}

impl<T: PrimInt + Unsigned> CellBits for T {}

/// An N×N bitboard stored in words of the unsigned integer `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitBoard<T: CellBits> {
    words: Vec<T>,
    size: usize,
}

impl<T: CellBits> BitBoard<T> {
    /// Number of bits in one storage word.
    #[inline]
    pub fn word_bits() -> usize {
        mem::size_of::<T>() * 8
    }

    /// Create an empty `size×size` board.
    pub fn new(size: usize) -> Result<Self, BitBoardError> {
        let cells = size
            .checked_mul(size)
            .ok_or(BitBoardError::SizeTooLarge { n: size })?;
        Ok(BitBoard {
            words: vec![T::zero(); cells.div_ceil(Self::word_bits())],
            size,
        })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bits allocated for the board, at least `size * size`.
    pub fn capacity(&self) -> usize {
        self.words.len() * Self::word_bits()
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(self.bit(idx))
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        let bits = Self::word_bits();
        let word = &mut self.words[idx / bits];
        *word = *word | (T::one() << (idx % bits));
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.words.fill(T::zero());
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.size || col >= self.size {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }

    /// Creates a bitboard from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(size: usize, iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new(size)?;
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    fn bit(&self, idx: usize) -> bool {
        let bits = Self::word_bits();
        ((self.words[idx / bits] >> (idx % bits)) & T::one()) != T::zero()
    }
}

impl<T: CellBits> fmt::Debug for BitBoard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.bit(r * self.size + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T: CellBits> {
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<T: CellBits> Iterator for SetBits<'_, T> {
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if self.board.bit(idx) {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}

// Binary operators assume both operands share a side length; the result keeps
// the left operand's.

/// Cells set in both boards.
impl<T: CellBits> BitAnd for &BitBoard<T> {
    type Output = BitBoard<T>;
    fn bitand(self, rhs: Self) -> BitBoard<T> {
        debug_assert_eq!(self.size, rhs.size);
        BitBoard {
            words: self
                .words
                .iter()
                .zip(&rhs.words)
                .map(|(&a, &b)| a & b)
                .collect(),
            size: self.size,
        }
    }
}

impl<T: CellBits> BitOrAssign<&BitBoard<T>> for BitBoard<T> {
    #[inline]
    fn bitor_assign(&mut self, rhs: &BitBoard<T>) {
        debug_assert_eq!(self.size, rhs.size);
        for (a, &b) in self.words.iter_mut().zip(&rhs.words) {
            *a = *a | b;
        }
    }
}
