//! Progressive multiple sequence alignment.
//!
//! Sequences are added one by one: each one is globally aligned against the consensus of the rows
//! built so far and gap columns are propagated to all rows. This is a fast approximation, the
//! result depends on the input order and is not guaranteed to be optimal under any multiple
//! alignment objective (the exact problem is NP-hard).

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use eyre::Result;

pub use consensus::consensus;
pub use progressive::Progressive;

use crate::pairwise::Scoring;
use crate::{Alignable, Score};

mod consensus;
mod progressive;

/// Equal-length gapped rows, one per input sequence and in the input order, with their consensus.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct MultipleAlignment<S: Score> {
    rows: Vec<String>,
    consensus: String,
    /// Sum of the pairwise scores accumulated while adding sequences
    score: S,
}

impl<S: Score> MultipleAlignment<S> {
    /// The alignment of zero sequences
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            consensus: String::new(),
            score: S::zero(),
        }
    }

    pub(crate) fn new(rows: Vec<String>, consensus: String, score: S) -> Self {
        debug_assert!(rows.iter().all(|x| x.len() == consensus.len()));
        Self {
            rows,
            consensus,
            score,
        }
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.consensus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows
    pub fn depth(&self) -> usize {
        self.rows.len()
    }
}

/// Progressive alignment of all sequences with the given scoring.
pub fn align<S, A>(sequences: &[A], scoring: &Scoring<S>) -> Result<MultipleAlignment<S>>
where
    S: Score,
    A: Alignable<Symbol = u8>,
{
    Progressive::new(*scoring).align(sequences)
}
