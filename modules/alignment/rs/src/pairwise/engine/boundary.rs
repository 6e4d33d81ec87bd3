use super::matrix::{Cell, Matrix, State};
use crate::Score;

/// Where the traceback begins.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Seed<S: Score> {
    pub row: usize,
    pub col: usize,
    pub state: State,
    pub score: S,
}

/// Mode-specific part of the DP: initialization of the first row/column, the optional floor of the
/// diagonal state and the rule for picking the optimal end cell. The inner recurrence is shared.
pub trait Boundary<S: Score> {
    /// Cell (0, col), col >= 1, given its left neighbour.
    fn first_row(&self, left: &Cell<S>, open: S, extend: S) -> Option<Cell<S>>;

    /// Cell (row, 0), row >= 1, given its upper neighbour.
    /// Both return None if a leading gap overflows the score type.
    fn first_col(&self, up: &Cell<S>, open: S, extend: S) -> Option<Cell<S>>;

    fn floor(&self) -> Option<S> {
        None
    }

    /// The optimal end cell or None if there is nothing worth aligning.
    fn seed(&self, matrix: &Matrix<S>) -> Option<Seed<S>>;
}

/// Leading gaps along seq2 (first row), each one paid as a regular gap
#[inline(always)]
fn gapped_row<S: Score>(left: &Cell<S>, open: S, extend: S) -> Option<Cell<S>> {
    let (gap2, gap2_from) = Cell::gap2_from(left, open, extend)?;
    Some(Cell {
        gap2,
        gap2_from,
        ..Cell::unreachable()
    })
}

/// Leading gaps along seq1 (first column), each one paid as a regular gap
#[inline(always)]
fn gapped_col<S: Score>(up: &Cell<S>, open: S, extend: S) -> Option<Cell<S>> {
    let (gap1, gap1_from) = Cell::gap1_from(up, open, extend)?;
    Some(Cell {
        gap1,
        gap1_from,
        ..Cell::unreachable()
    })
}

/// Best state in the cell as a traceback seed
#[inline(always)]
fn seed_at<S: Score>(matrix: &Matrix<S>, row: usize, col: usize) -> Seed<S> {
    let (score, state) = matrix.at(row, col).best();
    Seed {
        row,
        col,
        state,
        score,
    }
}

/// End-to-end alignment: all leading gaps are paid, the optimum is the last cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Global;

impl<S: Score> Boundary<S> for Global {
    fn first_row(&self, left: &Cell<S>, open: S, extend: S) -> Option<Cell<S>> {
        gapped_row(left, open, extend)
    }

    fn first_col(&self, up: &Cell<S>, open: S, extend: S) -> Option<Cell<S>> {
        gapped_col(up, open, extend)
    }

    fn seed(&self, matrix: &Matrix<S>) -> Option<Seed<S>> {
        Some(seed_at(matrix, matrix.rows() - 1, matrix.cols() - 1))
    }
}

/// Smith-Waterman: alignments may start and end anywhere, the diagonal state is floored at zero.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Local;

impl<S: Score> Boundary<S> for Local {
    fn first_row(&self, _: &Cell<S>, _: S, _: S) -> Option<Cell<S>> {
        Some(Cell::start(S::zero()))
    }

    fn first_col(&self, _: &Cell<S>, _: S, _: S) -> Option<Cell<S>> {
        Some(Cell::start(S::zero()))
    }

    fn floor(&self) -> Option<S> {
        Some(S::zero())
    }

    fn seed(&self, matrix: &Matrix<S>) -> Option<Seed<S>> {
        let mut best: Option<Seed<S>> = None;
        // Row-major scan with strict comparison: the first maximum wins
        for row in 1..matrix.rows() {
            for col in 1..matrix.cols() {
                let score = matrix.at(row, col).diag;
                if score > best.map_or(S::zero(), |x| x.score) {
                    best = Some(Seed {
                        row,
                        col,
                        state: State::Diagonal,
                        score,
                    });
                }
            }
        }
        best
    }
}

/// Which sequence must be covered end-to-end in the semi-global mode.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Query {
    First,
    Second,
}

/// Fitting alignment: the query is aligned end-to-end, overhangs of the reference are free.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SemiGlobal {
    query: Query,
}

impl SemiGlobal {
    pub fn new(query: Query) -> Self {
        Self { query }
    }

    /// The shorter sequence is the query, seq1 wins ties.
    pub fn for_lengths(len1: usize, len2: usize) -> Self {
        if len1 <= len2 {
            Self::new(Query::First)
        } else {
            Self::new(Query::Second)
        }
    }

    pub fn query(&self) -> Query {
        self.query
    }
}

impl<S: Score> Boundary<S> for SemiGlobal {
    fn first_row(&self, left: &Cell<S>, open: S, extend: S) -> Option<Cell<S>> {
        match self.query {
            // Leading part of the reference (seq2) is skipped for free
            Query::First => Some(Cell::start(S::zero())),
            Query::Second => gapped_row(left, open, extend),
        }
    }

    fn first_col(&self, up: &Cell<S>, open: S, extend: S) -> Option<Cell<S>> {
        match self.query {
            Query::First => gapped_col(up, open, extend),
            Query::Second => Some(Cell::start(S::zero())),
        }
    }

    fn seed(&self, matrix: &Matrix<S>) -> Option<Seed<S>> {
        let (last_row, last_col) = (matrix.rows() - 1, matrix.cols() - 1);
        let candidates: Box<dyn Iterator<Item = (usize, usize)>> = match self.query {
            Query::First => Box::new((0..=last_col).map(move |col| (last_row, col))),
            Query::Second => Box::new((0..=last_row).map(move |row| (row, last_col))),
        };

        let mut best: Option<Seed<S>> = None;
        for (row, col) in candidates {
            let seed = seed_at(matrix, row, col);
            if best.is_none_or(|x| seed.score > x.score) {
                best = Some(seed);
            }
        }
        best
    }
}
