use eyre::{eyre, Result};

use super::MultipleAlignment;
use crate::pairwise::{self, Engine, Mode, Scheme};
use crate::{Alignable, GAP, Score};

/// Consensus-guided progressive aligner.
///
/// The first sequence seeds the alignment. Every next sequence is aligned globally against the
/// current consensus; gaps placed into the consensus become gap columns in all previous rows and
/// the consensus is recomputed. The final score is the sum of these pairwise scores.
#[derive(Copy, Clone, Debug, Default)]
pub struct Progressive<Sc> {
    engine: Engine<Sc>,
}

impl<S: Score, Sc: Scheme<Score = S, Symbol = u8>> Progressive<Sc> {
    pub fn new(scheme: Sc) -> Self {
        Self {
            engine: Engine::new(scheme),
        }
    }

    pub fn align<A>(&self, sequences: &[A]) -> Result<MultipleAlignment<S>>
    where
        A: Alignable<Symbol = u8>,
    {
        for (ind, seq) in sequences.iter().enumerate() {
            pairwise::validate(&format!("sequence #{ind}"), seq)?;
        }

        let Some((first, rest)) = sequences.split_first() else {
            return Ok(MultipleAlignment::empty());
        };

        let mut rows = vec![first.slice(0, first.len()).to_vec()];
        let mut consensus = rows[0].clone();
        let mut score = S::zero();

        for (ind, seq) in rest.iter().enumerate() {
            let seq = seq.slice(0, seq.len());
            let (guide, new) = if consensus.is_empty() || seq.is_empty() {
                // Nothing to align: the other side is all gaps
                (pad(&consensus, seq.len()), pad(seq, consensus.len()))
            } else {
                let aln = self.engine.align(&consensus, &seq, Mode::Global)?;
                score = score.checked_add(aln.score()).ok_or_else(|| {
                    eyre!("Total score overflows the score type at sequence #{}", ind + 1)
                })?;
                log::debug!(
                    "Sequence #{}: score {} against the consensus of {} columns, {} columns after",
                    ind + 1,
                    aln.score(),
                    consensus.len(),
                    aln.len()
                );
                let (_, _, _, _, _, aligned1, aligned2) = aln.dissolve();
                (aligned1.into_bytes(), aligned2.into_bytes())
            };

            for row in rows.iter_mut() {
                *row = merge(row, &guide);
            }
            rows.push(new);

            consensus = super::consensus(&rows).into_bytes();
        }

        let rows = rows
            .into_iter()
            .map(String::from_utf8)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let consensus = String::from_utf8(consensus)?;
        Ok(MultipleAlignment::new(rows, consensus, score))
    }
}

/// Symbols followed by gaps up to the given width or gaps followed by symbols when the symbols
/// are missing.
fn pad(symbols: &[u8], others: usize) -> Vec<u8> {
    if symbols.is_empty() {
        vec![GAP; others]
    } else {
        symbols.to_vec()
    }
}

/// Spread a row over the columns of the guide. Every gap in the guide becomes a gap column.
fn merge(row: &[u8], guide: &[u8]) -> Vec<u8> {
    let mut symbols = row.iter();
    let merged: Vec<u8> = guide
        .iter()
        .map(|&x| {
            if x == GAP {
                GAP
            } else {
                symbols.next().copied().unwrap_or(GAP)
            }
        })
        .collect();
    debug_assert!(symbols.next().is_none(), "Guide must cover the whole row");
    merged
}
