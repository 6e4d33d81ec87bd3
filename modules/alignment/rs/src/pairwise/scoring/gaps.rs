use crate::pairwise::scoring::{Score, Scoring};

// Gap scoring function MUST be additive: a run of k gaps costs open + (k - 1) * extend
pub trait Scorer {
    type Score: Score;

    fn gap_open(&self) -> Self::Score;
    fn gap_extend(&self) -> Self::Score;
}

impl<S: Score> Scorer for Scoring<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        self.gap_open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.gap_extend
    }
}
