use eyre::{eyre, Result};

use crate::Score;

/// DP state of a cell: the kind of the last alignment column.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum State {
    /// Match or mismatch (M)
    Diagonal,
    /// A symbol of seq1 against a gap (Ix), moves up in the matrix
    GapFirst,
    /// A symbol of seq2 against a gap (Iy), moves left in the matrix
    GapSecond,
}

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum GapTrace {
    Open,
    Extend,
}

/// Scores of all three states in a DP cell together with their predecessors.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Cell<S: Score> {
    pub diag: S,
    pub gap1: S,
    pub gap2: S,

    /// Predecessor state of the diagonal move. `None` marks a cell where alignments start.
    pub diag_from: Option<State>,
    pub gap1_from: GapTrace,
    pub gap2_from: GapTrace,
}

impl<S: Score> Cell<S> {
    /// Sentinel for states that can't be reached. It absorbs any addition, while reachable
    /// scores must never hit it.
    #[inline(always)]
    pub fn minus_inf() -> S {
        S::min_value()
    }

    /// A cell where no state is reachable
    pub fn unreachable() -> Self {
        Self {
            diag: Self::minus_inf(),
            gap1: Self::minus_inf(),
            gap2: Self::minus_inf(),
            diag_from: None,
            gap1_from: GapTrace::Open,
            gap2_from: GapTrace::Open,
        }
    }

    /// A cell where an alignment can start with the given score. Gap states are unreachable.
    pub fn start(score: S) -> Self {
        Self {
            diag: score,
            ..Self::unreachable()
        }
    }

    /// Best state of the cell. Ties are resolved as Diagonal > GapFirst > GapSecond.
    #[inline(always)]
    pub fn best(&self) -> (S, State) {
        let mut best = (self.diag, State::Diagonal);
        if self.gap1 > best.0 {
            best = (self.gap1, State::GapFirst);
        }
        if self.gap2 > best.0 {
            best = (self.gap2, State::GapSecond);
        }
        best
    }

    /// Score after a move. Unreachable stays unreachable, None if a reachable score doesn't fit
    /// into the score type.
    #[inline(always)]
    fn add(score: S, delta: S) -> Option<S> {
        if score == Self::minus_inf() {
            return Some(score);
        }
        score.checked_add(&delta).filter(|x| *x != Self::minus_inf())
    }

    /// Gap consuming a symbol of seq1, given the cell above: max(M + open, Ix + extend)
    #[inline(always)]
    pub fn gap1_from(up: &Self, open: S, extend: S) -> Option<(S, GapTrace)> {
        Self::gap(up.diag, up.gap1, open, extend)
    }

    /// Gap consuming a symbol of seq2, given the cell to the left: max(M + open, Iy + extend)
    #[inline(always)]
    pub fn gap2_from(left: &Self, open: S, extend: S) -> Option<(S, GapTrace)> {
        Self::gap(left.diag, left.gap2, open, extend)
    }

    #[inline(always)]
    fn gap(diag: S, gap: S, open: S, extend: S) -> Option<(S, GapTrace)> {
        let opened = Self::add(diag, open)?;
        let extended = Self::add(gap, extend)?;
        // Opening wins ties: the preceding column is a diagonal one
        if extended > opened {
            Some((extended, GapTrace::Extend))
        } else {
            Some((opened, GapTrace::Open))
        }
    }

    /// The shared Gotoh recurrence for an inner cell (row >= 1, col >= 1).
    /// None if any reachable state overflows the score type.
    #[inline(always)]
    pub fn recurrence(
        diag: &Self,
        up: &Self,
        left: &Self,
        subst: S,
        open: S,
        extend: S,
    ) -> Option<Self> {
        let (best, from) = diag.best();
        let (gap1, gap1_from) = Self::gap1_from(up, open, extend)?;
        let (gap2, gap2_from) = Self::gap2_from(left, open, extend)?;
        Some(Self {
            diag: Self::add(best, subst)?,
            gap1,
            gap2,
            diag_from: Some(from),
            gap1_from,
            gap2_from,
        })
    }

    /// Restart the diagonal state at `floor` if it doesn't exceed it (Smith-Waterman)
    #[inline(always)]
    pub fn floor(&mut self, floor: S) {
        if self.diag <= floor {
            self.diag = floor;
            self.diag_from = None;
        }
    }
}

/// Dense (rows x cols) DP matrix stored in a single row-major buffer.
#[derive(Clone, Debug)]
pub struct Matrix<S: Score> {
    cells: Vec<Cell<S>>,
    rows: usize,
    cols: usize,
}

impl<S: Score> Matrix<S> {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = rows.checked_mul(cols).ok_or_else(|| {
            eyre!("DP matrix size overflows: {rows} x {cols} cells")
        })?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size)?;
        cells.resize(size, Cell::unreachable());

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> &Cell<S> {
        debug_assert!(row < self.rows && col < self.cols);
        &self.cells[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell<S>) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = cell;
    }
}
