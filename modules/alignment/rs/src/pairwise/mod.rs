use eyre::Result;

pub use alignment::{Alignment, Offset, Op, Step};
pub use engine::Engine;
pub(crate) use engine::validate;
pub use mode::Mode;
pub use scoring::{Scheme, Scoring};

use crate::{Alignable, Score};

pub mod alignment;
mod engine;
mod mode;
pub mod scoring;

/// Optimal pairwise alignment of `seq1` against `seq2` in the given mode.
pub fn align<S, A1, A2>(
    seq1: &A1,
    seq2: &A2,
    mode: Mode,
    scoring: &Scoring<S>,
) -> Result<Alignment<S>>
where
    S: Score,
    A1: Alignable<Symbol = u8>,
    A2: Alignable<Symbol = u8>,
{
    Engine::new(*scoring).align(seq1, seq2, mode)
}

/// End-to-end (Needleman-Wunsch) alignment with affine gaps.
pub fn global<S, A1, A2>(seq1: &A1, seq2: &A2, scoring: &Scoring<S>) -> Result<Alignment<S>>
where
    S: Score,
    A1: Alignable<Symbol = u8>,
    A2: Alignable<Symbol = u8>,
{
    align(seq1, seq2, Mode::Global, scoring)
}

/// Best-scoring local (Smith-Waterman) alignment with affine gaps.
pub fn local<S, A1, A2>(seq1: &A1, seq2: &A2, scoring: &Scoring<S>) -> Result<Alignment<S>>
where
    S: Score,
    A1: Alignable<Symbol = u8>,
    A2: Alignable<Symbol = u8>,
{
    align(seq1, seq2, Mode::Local, scoring)
}

/// Fitting alignment: the shorter sequence end-to-end, overhangs of the longer one are free.
pub fn semi_global<S, A1, A2>(seq1: &A1, seq2: &A2, scoring: &Scoring<S>) -> Result<Alignment<S>>
where
    S: Score,
    A1: Alignable<Symbol = u8>,
    A2: Alignable<Symbol = u8>,
{
    align(seq1, seq2, Mode::SemiGlobal, scoring)
}
