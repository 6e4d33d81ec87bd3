#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};

use crate::pairwise::Alignment;
use crate::{GAP, Score};

/// Column-wise summary of a pairwise alignment.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Copy, Clone, PartialEq, Debug, Default, Getters, Dissolve)]
pub struct Statistics {
    matches: usize,
    mismatches: usize,
    /// Columns with a gap in either row
    gaps: usize,
    /// Maximal gap runs, counted separately in each row
    gap_opens: usize,
    /// Total number of columns
    length: usize,
    /// Percentage of matching columns, 0 for an empty alignment
    identity: f64,
}

impl Statistics {
    pub fn calculate<S: Score>(alignment: &Alignment<S>) -> Self {
        let row1 = alignment.aligned1().as_bytes();
        let row2 = alignment.aligned2().as_bytes();
        debug_assert_eq!(row1.len(), row2.len());

        let mut stats = Self {
            length: row1.len(),
            ..Default::default()
        };
        let (mut ingap1, mut ingap2) = (false, false);
        for (&a, &b) in row1.iter().zip(row2) {
            let (gap1, gap2) = (a == GAP, b == GAP);
            if gap1 || gap2 {
                stats.gaps += 1;
            } else if a == b {
                stats.matches += 1;
            } else {
                stats.mismatches += 1;
            }

            stats.gap_opens += usize::from(gap1 && !ingap1) + usize::from(gap2 && !ingap2);
            (ingap1, ingap2) = (gap1, gap2);
        }

        if stats.length > 0 {
            stats.identity = stats.matches as f64 / stats.length as f64 * 100.0;
        }
        stats
    }
}

impl<S: Score> From<&Alignment<S>> for Statistics {
    fn from(alignment: &Alignment<S>) -> Self {
        Self::calculate(alignment)
    }
}
