use super::boundary::Seed;
use super::matrix::{GapTrace, Matrix, State};
use crate::Alignable;
use crate::Score;
use crate::pairwise::scoring::symbols;
use crate::pairwise::{Offset, Op, Step};

/// Walk the DP matrix back from the seed until a start cell is reached. Returns run-length
/// encoded steps in the alignment order and the position where the alignment starts.
pub fn traceback<S, A1, A2, Sc>(
    matrix: &Matrix<S>,
    seed: &Seed<S>,
    seq1: &A1,
    seq2: &A2,
    scorer: &Sc,
) -> (Vec<Step<u8>>, Offset)
where
    S: Score,
    A1: Alignable,
    A2: Alignable<Symbol = A1::Symbol>,
    Sc: symbols::Scorer<Score = S, Symbol = A1::Symbol>,
{
    let (mut row, mut col, mut state) = (seed.row, seed.col, seed.state);
    // Columns are collected in the reverse order
    let mut ops = Vec::with_capacity(row + col);

    loop {
        let cell = matrix.at(row, col);
        match state {
            State::Diagonal => {
                let Some(from) = cell.diag_from else {
                    break;
                };
                debug_assert!(row > 0 && col > 0);
                let op = scorer.classify(seq1.at(row - 1), seq2.at(col - 1));
                debug_assert!(op.is_diagonal());
                ops.push(op);
                row -= 1;
                col -= 1;
                state = from;
            }
            State::GapFirst => {
                if row == 0 {
                    debug_assert!(false, "Gap in seq2 can't start above the first row");
                    break;
                }
                ops.push(Op::GapFirst);
                if cell.gap1_from == GapTrace::Open {
                    state = State::Diagonal;
                }
                row -= 1;
            }
            State::GapSecond => {
                if col == 0 {
                    debug_assert!(false, "Gap in seq1 can't start left of the first column");
                    break;
                }
                ops.push(Op::GapSecond);
                if cell.gap2_from == GapTrace::Open {
                    state = State::Diagonal;
                }
                col -= 1;
            }
        }
    }
    log::trace!(
        "Traceback from ({}, {}) stopped at ({row}, {col}) after {} columns",
        seed.row,
        seed.col,
        ops.len()
    );

    let mut steps = Vec::new();
    for op in ops.into_iter().rev() {
        Step::push_run(&mut steps, op, 1);
    }
    (steps, Offset::new(row, col))
}
