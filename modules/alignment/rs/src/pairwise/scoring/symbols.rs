use crate::pairwise::Op;
use crate::pairwise::scoring::{Score, Scoring};

/// Substitution scoring: the score of aligning two symbols against each other.
pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score;

    /// Classify the aligned pair as a match or a mismatch.
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Op;
}

impl<S: Score> Scorer for Scoring<S> {
    type Score = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score {
        if s1 == s2 {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Op {
        if s1 == s2 { Op::Match } else { Op::Mismatch }
    }
}
