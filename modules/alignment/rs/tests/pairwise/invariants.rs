use biobit_alignment_rs::pairwise::{self, Engine, Mode, Scoring};
use biobit_alignment_rs::Sequence;
use eyre::Result;

use super::*;

const MODES: [Mode; 3] = [Mode::Global, Mode::Local, Mode::SemiGlobal];

#[test]
fn test_consistency() {
    for scoring in [Scoring::simple(), Scoring::high_identity(), Scoring::new(3, -2, -5, -2)] {
        for mode in MODES {
            for (seq1, seq2, aln) in align_all(mode, &scoring) {
                assert_eq!(*aln.mode(), mode);
                ensure_consistent(&aln, seq1, seq2, &scoring);
            }
        }
    }
}

#[test]
fn test_global_covers_everything() {
    for (seq1, seq2, aln) in align_all(Mode::Global, &Scoring::simple()) {
        assert_eq!(*aln.seq1(), 0..seq1.len());
        assert_eq!(*aln.seq2(), 0..seq2.len());
        assert_eq!(aln.len(), aln.aligned1().len());
        assert!(aln.len() >= seq1.len().max(seq2.len()));
        assert!(aln.len() <= seq1.len() + seq2.len());
    }
}

#[test]
fn test_mode_ordering() -> Result<()> {
    // Every global alignment is a valid fitting one, every fitting alignment is a valid local one
    let scoring = Scoring::<Score>::simple();
    for &(seq1, seq2) in CORPUS {
        let global = *pairwise::global(&seq1, &seq2, &scoring)?.score();
        let fitted = *pairwise::semi_global(&seq1, &seq2, &scoring)?.score();
        let local = *pairwise::local(&seq1, &seq2, &scoring)?.score();
        assert!(global <= fitted, "{seq1:?} {seq2:?}");
        assert!(fitted <= local, "{seq1:?} {seq2:?}");
    }
    Ok(())
}

#[test]
fn test_score_symmetry() -> Result<()> {
    let scoring = Scoring::<Score>::simple();
    for &(seq1, seq2) in CORPUS {
        for mode in MODES {
            // Fitting is asymmetric for sequences of the same length: seq1 is always the query
            if mode == Mode::SemiGlobal && seq1.len() == seq2.len() {
                continue;
            }
            let forward = pairwise::align(&seq1, &seq2, mode, &scoring)?;
            let backward = pairwise::align(&seq2, &seq1, mode, &scoring)?;
            assert_eq!(forward.score(), backward.score(), "{mode} {seq1:?} {seq2:?}");
        }
    }
    Ok(())
}

#[test]
fn test_match_score_monotonicity() -> Result<()> {
    for &(seq1, seq2) in CORPUS {
        for mode in MODES {
            let mut previous = None;
            for match_score in 1..=6 {
                let scoring = Scoring::<Score>::new(match_score, -1, -2, -1);
                let score = *pairwise::align(&seq1, &seq2, mode, &scoring)?.score();
                if let Some(previous) = previous {
                    assert!(score >= previous, "{mode} {seq1:?} {seq2:?}");
                }
                previous = Some(score);
            }
        }
    }
    Ok(())
}

#[test]
fn test_invalid_inputs() {
    let scoring = Scoring::<Score>::simple();
    let valid = b"ACGT".as_slice();
    for invalid in [b"AC-GT".as_slice(), "ACÉGT".as_bytes()] {
        for mode in MODES {
            let err = pairwise::align(&invalid, &valid, mode, &scoring).unwrap_err();
            assert!(err.to_string().contains("seq1"), "{err}");

            let err = pairwise::align(&valid, &invalid, mode, &scoring).unwrap_err();
            assert!(err.to_string().contains("seq2"), "{err}");
        }
    }
}

#[test]
fn test_sequences() -> Result<()> {
    let seq1: Sequence = "gattaca".parse()?;
    let seq2: Sequence = "GATTACA".parse()?;

    let engine = Engine::new(Scoring::<Score>::high_identity());
    let aln = engine.align(&seq1, &seq2, Mode::Global)?;
    assert_eq!(*aln.score(), 14);
    assert_eq!(aln.to_string(), "GATTACA\n|||||||\nGATTACA\n");
    assert_eq!(engine.scheme(), &Scoring::high_identity());
    Ok(())
}

#[test]
fn test_long_runs_are_split() -> Result<()> {
    let seq = vec![b'A'; 300];
    let aln = pairwise::global(&seq, &seq, &Scoring::<Score>::simple())?;

    assert_eq!(*aln.score(), 300);
    assert_eq!(aln.rle(), "255=45=");
    assert_eq!(aln.steps().len(), 2);
    Ok(())
}

#[test]
fn test_score_overflow_is_an_error() -> Result<()> {
    let engine = Engine::new(Scoring::<i8>::simple());

    let seq = vec![b'A'; 60];
    let aln = engine.align(&seq.as_slice(), &seq.as_slice(), Mode::Global)?;
    assert_eq!(*aln.score(), 60);

    let seq = vec![b'A'; 200];
    for mode in MODES {
        let err = engine.align(&seq.as_slice(), &seq.as_slice(), mode).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }
    Ok(())
}
