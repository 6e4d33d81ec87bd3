use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};
use eyre::Result;

use biobit_core_rs::num::PrimUInt;

use super::op::Op;

/// An alignment step: a run of identical operations
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: Len,
    /// The alignment operation
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Append `len` operations to the run-length encoded steps. The run is merged with the last
    /// step when possible and split into several steps if it doesn't fit into `Len`.
    pub fn push_run(steps: &mut Vec<Step<Len>>, op: Op, mut len: usize) {
        let max = Len::max_value().to_usize().unwrap_or(usize::MAX);

        if let Some(last) = steps.last_mut() {
            if last.op == op {
                let last_len = last.len.to_usize().unwrap_or(max);
                let take = len.min(max - last_len);
                last.len = last.len + num::cast(take).unwrap_or_else(Len::zero);
                len -= take;
            }
        }
        while len > 0 {
            let take = len.min(max);
            if let Some(chunk) = num::cast(take) {
                steps.push(Step { op, len: chunk });
            }
            len -= take;
        }
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len().to_string());
            result.push(step.op().symbol());
        }
        result
    }
}

/// Position of an alignment column in both sequences
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Constructor, Dissolve, From, Into,
)]
pub struct Offset {
    pub seq1: usize,
    pub seq2: usize,
}

impl Offset {
    /// Offset right after the given step
    pub fn apply<Len: PrimUInt + Into<usize>>(mut self, step: &Step<Len>) -> Self {
        step.op().apply(&mut self.seq1, &mut self.seq2, *step.len());
        self
    }
}

/// A tracked alignment step with known start position (offset) in the sequence coordinates
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor)]
pub struct StepWithOffset<Len: PrimUInt> {
    pub step: Step<Len>,
    pub start: Offset,
}

impl<Len: PrimUInt + Into<usize>> StepWithOffset<Len> {
    /// Get the end position of the step in sequence coordinates (e.g. the alignment position after applying the step)
    pub fn end(&self) -> Offset {
        self.start.apply(&self.step)
    }
}

/// An iterator that keeps track of the current offset in the alignment
pub struct StepsWithOffsetsIterator<T: Iterator<Item: Borrow<Step<Len>>>, Len: PrimUInt + Into<usize>> {
    iter: T,
    offset: Offset,
    _phantom: std::marker::PhantomData<Len>,
}

impl<T, Len> StepsWithOffsetsIterator<T, Len>
where
    T: Iterator<Item: Borrow<Step<Len>>>,
    Len: PrimUInt + Into<usize>,
{
    pub fn new(iter: T, offset: Offset) -> Self {
        Self {
            iter,
            offset,
            _phantom: Default::default(),
        }
    }
}

impl<T, Len> Iterator for StepsWithOffsetsIterator<T, Len>
where
    T: Iterator<Item: Borrow<Step<Len>>>,
    Len: PrimUInt + Into<usize>,
{
    type Item = StepWithOffset<Len>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = *self.iter.next()?.borrow();
        let start = self.offset;
        self.offset = self.offset.apply(&step);
        Some(StepWithOffset { step, start })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
