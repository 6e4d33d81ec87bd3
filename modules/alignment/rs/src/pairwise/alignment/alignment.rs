use std::fmt::Display;
use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use super::step::{Offset, Step, StepWithOffset, StepsWithOffsetsIterator};
use super::utils;
use crate::pairwise::Mode;
use crate::{format, Alignable, Score};

/// A pairwise alignment between two sequences.
///
/// The aligned rows are stored explicitly with `-` marking gaps, together with the run-length
/// encoded alignment steps. `seq1` and `seq2` are half-open ranges of the original sequences
/// covered by the alignment: removing gaps from `aligned1` gives exactly `seq1[seq1.start..seq1.end]`.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    score: S,
    mode: Mode,
    steps: Vec<Step<u8>>,
    seq1: Range<usize>,
    seq2: Range<usize>,
    aligned1: String,
    aligned2: String,
}

impl<S: Score> Alignment<S> {
    /// The "no alignment" value: no columns, zero score, empty ranges.
    pub fn empty(mode: Mode) -> Self {
        Self {
            score: S::zero(),
            mode,
            steps: Vec::new(),
            seq1: 0..0,
            seq2: 0..0,
            aligned1: String::new(),
            aligned2: String::new(),
        }
    }

    /// Build the alignment from its steps. Aligned rows are rendered from the source sequences,
    /// starting at the given offset.
    pub fn new<A1, A2>(
        score: S,
        mode: Mode,
        steps: Vec<Step<u8>>,
        start: Offset,
        seq1: &A1,
        seq2: &A2,
    ) -> Result<Self>
    where
        A1: Alignable<Symbol = u8>,
        A2: Alignable<Symbol = u8>,
    {
        let (aligned1, aligned2, end) = utils::render(&steps, start, seq1, seq2)?;
        Ok(Self {
            score,
            mode,
            steps,
            seq1: start.seq1..end.seq1,
            seq2: start.seq2..end.seq2,
            aligned1,
            aligned2,
        })
    }

    /// Checks if the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        // Note: length of each step is guaranteed to be non-zero.
        self.steps.is_empty()
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned1.len()
    }

    /// Returns the RLE representation of the alignment, e.g. `3=1X2v4=`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Returns alignment steps with tracked sequence coordinates.
    pub fn tracked_steps(&self) -> impl Iterator<Item = StepWithOffset<u8>> + '_ {
        StepsWithOffsetsIterator::<_, u8>::new(
            self.steps.iter(),
            Offset::new(self.seq1.start, self.seq2.start),
        )
    }
}

impl<S: Score> Display for Alignment<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&format::render(self, format::DEFAULT_LINE_WIDTH))
    }
}
