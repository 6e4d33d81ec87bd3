use std::str::FromStr;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use eyre::{eyre, Result};

pub use crate::Score;

pub mod gaps;
pub mod symbols;

/// Everything the pairwise engine needs to score an alignment.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

/// Linear substitution scores (match/mismatch) combined with affine gap penalties.
///
/// Any values are accepted. Penalties are expected to be negative, but positive gap scores or
/// negative match scores are legal and simply change which alignment is optimal.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Dissolve)]
pub struct Scoring<S: Score> {
    pub match_score: S,
    pub mismatch_score: S,

    /// Applied once, to the first position of each gap run
    pub gap_open: S,
    /// Applied to every subsequent position of the same gap run
    pub gap_extend: S,
}

impl<S: Score> Scoring<S> {
    pub fn new(match_score: S, mismatch_score: S, gap_open: S, gap_extend: S) -> Self {
        if gap_open > S::zero() || gap_extend > S::zero() {
            log::warn!(
                "Scoring rewards gaps (open: {gap_open}, extend: {gap_extend}), \
                 penalties are expected to be negative"
            );
        }
        Self {
            match_score,
            mismatch_score,
            gap_open,
            gap_extend,
        }
    }

    /// match 1, mismatch -1, gap open -2, gap extend -1
    pub fn simple() -> Self {
        Self {
            match_score: <S as From<i8>>::from(1),
            mismatch_score: <S as From<i8>>::from(-1),
            gap_open: <S as From<i8>>::from(-2),
            gap_extend: <S as From<i8>>::from(-1),
        }
    }

    /// Steeper penalties for low-tolerance alignment of near-identical sequences:
    /// match 2, mismatch -4, gap open -8, gap extend -2
    pub fn high_identity() -> Self {
        Self {
            match_score: <S as From<i8>>::from(2),
            mismatch_score: <S as From<i8>>::from(-4),
            gap_open: <S as From<i8>>::from(-8),
            gap_extend: <S as From<i8>>::from(-2),
        }
    }
}

impl<S: Score> Default for Scoring<S> {
    fn default() -> Self {
        Self::simple()
    }
}

impl<S: Score> Scheme for Scoring<S> {
    type Score = S;
    type Symbol = u8;
}

impl<S: Score> FromStr for Scoring<S> {
    type Err = eyre::Report;

    /// Resolve a named preset
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::simple()),
            "high-identity" | "high_identity" => Ok(Self::high_identity()),
            _ => Err(eyre!(
                "Unknown scoring preset: {s:?} (expected \"simple\" or \"high-identity\")"
            )),
        }
    }
}
