use eyre::{ensure, Result};

use crate::{Alignable, GAP};

use super::op::Op;
use super::step::{Offset, Step, StepsWithOffsetsIterator};

/// Render the aligned rows for the given steps. Returns both rows and the end offset.
pub fn render<A1, A2>(
    steps: &[Step<u8>],
    start: Offset,
    seq1: &A1,
    seq2: &A2,
) -> Result<(String, String, Offset)>
where
    A1: Alignable<Symbol = u8>,
    A2: Alignable<Symbol = u8>,
{
    let total = steps.iter().map(|x| *x.len() as usize).sum::<usize>();
    let mut rows = [Vec::with_capacity(total), Vec::with_capacity(total)];

    let mut end = start;
    for tracked in StepsWithOffsetsIterator::<_, u8>::new(steps.iter(), start) {
        end = tracked.end();
        ensure!(
            end.seq1 <= seq1.len() && end.seq2 <= seq2.len(),
            "Alignment step {:?} at {:?} is out of sequence bounds ({}, {})",
            tracked.step,
            tracked.start,
            seq1.len(),
            seq2.len()
        );

        let len = *tracked.step.len() as usize;
        match tracked.step.op() {
            Op::GapFirst => {
                rows[0].extend_from_slice(seq1.slice(tracked.start.seq1, end.seq1));
                rows[1].extend(std::iter::repeat_n(GAP, len));
            }
            Op::GapSecond => {
                rows[0].extend(std::iter::repeat_n(GAP, len));
                rows[1].extend_from_slice(seq2.slice(tracked.start.seq2, end.seq2));
            }
            Op::Match | Op::Mismatch => {
                rows[0].extend_from_slice(seq1.slice(tracked.start.seq1, end.seq1));
                rows[1].extend_from_slice(seq2.slice(tracked.start.seq2, end.seq2));
            }
        }
    }

    let [row1, row2] = rows;
    Ok((String::from_utf8(row1)?, String::from_utf8(row2)?, end))
}

/// Drop gap symbols from an aligned row
pub fn ungapped(row: &str) -> String {
    row.chars().filter(|&x| x != GAP as char).collect()
}
