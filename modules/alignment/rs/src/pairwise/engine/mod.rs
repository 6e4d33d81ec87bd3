use eyre::{eyre, Result};

use crate::pairwise::scoring::Scheme;
use crate::pairwise::{Alignment, Mode};
use crate::{Alignable, GAP, Score};

use boundary::{Boundary, Global, Local, SemiGlobal};
use matrix::{Cell, Matrix};

mod boundary;
mod matrix;
mod traceback;

/// Dense affine-gap (Gotoh) DP aligner.
///
/// Every mode fills the same three-state recurrence and differs only in its boundary: how the
/// first row and column are initialized, whether the diagonal state is floored at zero, and
/// where the traceback begins. Time and memory are O(len(seq1) * len(seq2)).
///
/// Ties are resolved deterministically: a diagonal move wins over gaps, a gap consuming seq1
/// wins over a gap consuming seq2, and opening a gap wins over extending one.
#[derive(Copy, Clone, Debug, Default)]
pub struct Engine<Sc> {
    scheme: Sc,
}

impl<S: Score, Sc: Scheme<Score = S, Symbol = u8>> Engine<Sc> {
    pub fn new(scheme: Sc) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &Sc {
        &self.scheme
    }

    /// Compute the optimal alignment of two sequences in the given mode.
    ///
    /// Empty inputs produce an empty alignment. Sequences containing the gap symbol or non-ASCII
    /// bytes are rejected, as are inputs whose DP matrix can't be allocated.
    pub fn align<A1, A2>(&self, seq1: &A1, seq2: &A2, mode: Mode) -> Result<Alignment<S>>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
    {
        validate("seq1", seq1)?;
        validate("seq2", seq2)?;

        if seq1.is_empty() || seq2.is_empty() {
            log::debug!(
                "Empty {mode} alignment: input lengths {} and {}",
                seq1.len(),
                seq2.len()
            );
            return Ok(Alignment::empty(mode));
        }

        match mode {
            Mode::Global => self.run(seq1, seq2, mode, &Global),
            Mode::Local => self.run(seq1, seq2, mode, &Local),
            Mode::SemiGlobal => {
                let boundary = SemiGlobal::for_lengths(seq1.len(), seq2.len());
                log::trace!("Semi-global query: {:?}", boundary.query());
                self.run(seq1, seq2, mode, &boundary)
            }
        }
    }

    fn run<A1, A2, B>(&self, seq1: &A1, seq2: &A2, mode: Mode, boundary: &B) -> Result<Alignment<S>>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
        B: Boundary<S>,
    {
        log::debug!(
            "Filling {} x {} DP matrix for {mode} alignment",
            seq1.len().saturating_add(1),
            seq2.len().saturating_add(1)
        );
        let matrix = self.fill(seq1, seq2, boundary)?;

        let Some(seed) = boundary.seed(&matrix) else {
            log::debug!("No positive-scoring {mode} alignment");
            return Ok(Alignment::empty(mode));
        };
        log::debug!(
            "Optimal {mode} alignment ends at ({}, {}) in {:?} with score {}",
            seed.row,
            seed.col,
            seed.state,
            seed.score
        );

        let (steps, start) = traceback::traceback(&matrix, &seed, seq1, seq2, &self.scheme);
        Alignment::new(seed.score, mode, steps, start, seq1, seq2)
    }

    fn fill<A1, A2, B>(&self, seq1: &A1, seq2: &A2, boundary: &B) -> Result<Matrix<S>>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
        B: Boundary<S>,
    {
        let (rows, cols) = match (seq1.len().checked_add(1), seq2.len().checked_add(1)) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => return Err(eyre!("Sequences are too long to be aligned")),
        };
        let mut matrix = Matrix::new(rows, cols)?;

        let (open, extend) = (self.scheme.gap_open(), self.scheme.gap_extend());
        let floor = boundary.floor();

        matrix.set(0, 0, Cell::start(S::zero()));
        for col in 1..cols {
            let cell = boundary
                .first_row(matrix.at(0, col - 1), open, extend)
                .ok_or_else(|| overflow(0, col))?;
            matrix.set(0, col, cell);
        }

        for row in 1..rows {
            let cell = boundary
                .first_col(matrix.at(row - 1, 0), open, extend)
                .ok_or_else(|| overflow(row, 0))?;
            matrix.set(row, 0, cell);

            let s1 = seq1.at(row - 1);
            for col in 1..cols {
                let subst = self.scheme.score(s1, seq2.at(col - 1));
                let mut cell = Cell::recurrence(
                    matrix.at(row - 1, col - 1),
                    matrix.at(row - 1, col),
                    matrix.at(row, col - 1),
                    subst,
                    open,
                    extend,
                )
                .ok_or_else(|| overflow(row, col))?;
                if let Some(floor) = floor {
                    cell.floor(floor);
                }
                matrix.set(row, col, cell);
            }
        }
        Ok(matrix)
    }
}

fn overflow(row: usize, col: usize) -> eyre::Report {
    eyre!("Alignment score at DP cell ({row}, {col}) overflows the score type")
}

/// Sequences must be ASCII and may not contain the gap symbol.
pub(crate) fn validate<A: Alignable<Symbol = u8>>(name: &str, seq: &A) -> Result<()> {
    let symbols = seq.slice(0, seq.len());
    if let Some(pos) = memchr::memchr(GAP, symbols) {
        return Err(eyre!(
            "Invalid {name}: gap symbol '{}' at index {pos}",
            GAP as char
        ));
    }
    if let Some(pos) = symbols.iter().position(|x| !x.is_ascii()) {
        return Err(eyre!(
            "Invalid {name}: non-ASCII byte {:#04x} at index {pos}",
            symbols[pos]
        ));
    }
    Ok(())
}
