use biobit_alignment_rs::pairwise::{self, Mode, Scoring};
use eyre::Result;

use super::*;

struct Workload<'a> {
    seq1: (&'a [u8], usize),
    seq2: (&'a [u8], usize),
    score: Score,
    rle: &'a str,
}

fn ensure(scoring: &Scoring<Score>, w: Workload<'_>) {
    let invrle = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, invrle.as_str())] {
        let aln = pairwise::local(&seq1.0, &seq2.0, scoring).unwrap();
        assert_eq!(aln.seq1().start, seq1.1);
        assert_eq!(aln.seq2().start, seq2.1);
        assert_eq!(*aln.score(), w.score);
        assert_eq!(aln.rle(), rle);
        ensure_consistent(&aln, seq1.0, seq2.0, scoring);
    }
}

#[test]
fn test_shared_core() -> Result<()> {
    let aln = pairwise::local(
        &b"AAATGCAAA".as_slice(),
        &b"CCCTGCCCC".as_slice(),
        &Scoring::<Score>::simple(),
    )?;
    assert!(aln.aligned1().contains("TGC"));
    assert_eq!(aln.aligned1(), "TGC");
    assert_eq!(aln.aligned2(), "TGC");
    assert_eq!(*aln.seq1(), 3..6);
    assert_eq!(*aln.seq2(), 3..6);
    assert_eq!(*aln.score(), 3);
    assert_eq!(*aln.mode(), Mode::Local);
    Ok(())
}

#[test]
fn test_workloads() {
    let simple = Scoring::<Score>::simple();
    for w in [
        Workload {
            seq1: (b"ACGT", 0),
            seq2: (b"ACGT", 0),
            score: 4,
            rle: "4=",
        },
        Workload {
            seq1: (b"TTTTACGTACGTTTTT", 4),
            seq2: (b"GGACGTACGGG", 2),
            score: 7,
            rle: "7=",
        },
        Workload {
            seq1: (b"CCCCACGTTCGTGGGG", 4),
            seq2: (b"TTACGTACGTTT", 2),
            score: 6,
            rle: "4=1X3=",
        },
        Workload {
            seq1: (b"TTTAAGGTTCCAAA", 3),
            seq2: (b"GGGAAGGATTCCGGG", 3),
            score: 6,
            rle: "4=1^4=",
        },
    ] {
        ensure(&simple, w);
    }
}

#[test]
fn test_gapped() -> Result<()> {
    // A single gap between two exact blocks is worth keeping. The gap is placed leftmost.
    let scoring = Scoring::<Score>::simple();
    let aln = pairwise::local(
        &b"TTTTGATTACAGATTACATTTT".as_slice(),
        &b"CCGATTACAAGATTACACC".as_slice(),
        &scoring,
    )?;
    assert_eq!(aln.rle(), "6=1^8=");
    assert_eq!(aln.aligned1(), "GATTAC-AGATTACA");
    assert_eq!(*aln.score(), 14 - 2);
    assert_eq!(*aln.seq1(), 4..18);
    assert_eq!(*aln.seq2(), 2..17);
    Ok(())
}

#[test]
fn test_no_similarity() -> Result<()> {
    let scoring = Scoring::<Score>::simple();
    for (seq1, seq2) in [
        (b"AAAA".as_slice(), b"TTTT".as_slice()),
        (b"ACAC".as_slice(), b"GTGT".as_slice()),
    ] {
        let aln = pairwise::local(&seq1, &seq2, &scoring)?;
        assert!(aln.is_empty());
        assert_eq!(*aln.score(), 0);
        assert_eq!(*aln.mode(), Mode::Local);
        assert_eq!(aln.len(), 0);
    }
    Ok(())
}

#[test]
fn test_first_maximum_wins() -> Result<()> {
    // Two equally good hits: the one ending first in row-major order is reported
    let aln = pairwise::local(
        &b"ACGTTTTTTACGT".as_slice(),
        &b"ACGT".as_slice(),
        &Scoring::<Score>::simple(),
    )?;
    assert_eq!(*aln.score(), 4);
    assert_eq!(*aln.seq1(), 0..4);
    assert_eq!(*aln.seq2(), 0..4);
    Ok(())
}

#[test]
fn test_never_negative() {
    for (_, _, aln) in align_all(Mode::Local, &Scoring::simple()) {
        assert!(*aln.score() >= 0);
        assert_eq!(aln.is_empty(), *aln.score() == 0);
    }
}
