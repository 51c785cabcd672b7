//! Fixed-size sets of board cells packed into a single unsigned integer.
//!
//! The board keeps its missed and landed attacks as `CellSet`s; being `Copy`,
//! every accessor hands out an independent snapshot for free.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by cell set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSetError {
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A set of cells on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "grid does not fit in T");

    #[inline]
    fn board_mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit(row: usize, col: usize) -> Result<T, CellSetError> {
        if row >= N || col >= N {
            return Err(CellSetError::OutOfBounds { row, col });
        }
        Ok(T::one() << (row * N + col))
    }

    /// An empty set.
    #[inline]
    pub fn new() -> Self {
        let _: () = Self::FITS;
        CellSet { bits: T::zero() }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether (row, col) is in the set.
    pub fn contains(&self, row: usize, col: usize) -> Result<bool, CellSetError> {
        Ok(self.bits & Self::bit(row, col)? != T::zero())
    }

    /// Adds (row, col); returns `false` if it was already present.
    pub fn insert(&mut self, row: usize, col: usize) -> Result<bool, CellSetError> {
        let bit = Self::bit(row, col)?;
        let fresh = self.bits & bit == T::zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Removes every cell.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Cells in row-major order.
    #[inline]
    pub fn iter(&self) -> CellIter<T, N> {
        CellIter {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Row-major iterator over the cells of a [`CellSet`].
#[derive(Debug, Clone, Copy)]
pub struct CellIter<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for CellIter<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & T::one() != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Complement within the N×N grid.
impl<T, const N: usize> Not for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        CellSet {
            bits: !self.bits & Self::board_mask(),
        }
    }
}
