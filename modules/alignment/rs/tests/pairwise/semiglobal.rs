use biobit_alignment_rs::pairwise::{self, Mode, Scoring};
use eyre::Result;

use super::*;

#[test]
fn test_fitting() -> Result<()> {
    let scoring = Scoring::<Score>::simple();

    let aln = pairwise::semi_global(&b"CGT".as_slice(), &b"AACGTAA".as_slice(), &scoring)?;
    assert_eq!(aln.aligned1(), "CGT");
    assert_eq!(aln.aligned2(), "CGT");
    assert_eq!(*aln.score(), 3);
    assert_eq!(*aln.seq1(), 0..3);
    assert_eq!(*aln.seq2(), 2..5);
    assert_eq!(*aln.mode(), Mode::SemiGlobal);

    // The shorter sequence is the query regardless of its position
    let aln = pairwise::semi_global(&b"AACGTAA".as_slice(), &b"CGT".as_slice(), &scoring)?;
    assert_eq!(aln.aligned1(), "CGT");
    assert_eq!(*aln.score(), 3);
    assert_eq!(*aln.seq1(), 2..5);
    assert_eq!(*aln.seq2(), 0..3);
    Ok(())
}

#[test]
fn test_fitting_with_mismatch() -> Result<()> {
    let scoring = Scoring::<Score>::simple();
    let aln = pairwise::semi_global(&b"ACCTT".as_slice(), &b"GGACGTTGG".as_slice(), &scoring)?;

    assert_eq!(aln.aligned1(), "ACCTT");
    assert_eq!(aln.aligned2(), "ACGTT");
    assert_eq!(aln.rle(), "2=1X2=");
    assert_eq!(*aln.score(), 3);
    assert_eq!(*aln.seq2(), 2..7);
    Ok(())
}

#[test]
fn test_equal_lengths() -> Result<()> {
    // seq1 is the query: its last symbol is paid as a gap, the leading T of seq2 is free
    let scoring = Scoring::<Score>::simple();
    let aln = pairwise::semi_global(&b"ACGT".as_slice(), &b"TACG".as_slice(), &scoring)?;

    assert_eq!(*aln.score(), 1);
    assert_eq!(aln.aligned1(), "ACGT");
    assert_eq!(aln.aligned2(), "ACG-");
    assert_eq!(aln.rle(), "3=1v");
    assert_eq!(*aln.seq1(), 0..4);
    assert_eq!(*aln.seq2(), 1..4);
    Ok(())
}

#[test]
fn test_overhangs_are_free() -> Result<()> {
    let scoring = Scoring::<Score>::simple();
    let query = b"GATTACA".as_slice();
    let reference = b"CCCCCCCCCCGATTACACCCCCCCCCCCCCC".as_slice();

    let fitted = pairwise::semi_global(&query, &reference, &scoring)?;
    assert_eq!(*fitted.score(), 7);
    assert_eq!(*fitted.seq2(), 10..17);

    let global = pairwise::global(&query, &reference, &scoring)?;
    assert!(*global.score() < *fitted.score());
    Ok(())
}

#[test]
fn test_query_is_covered() {
    for (seq1, seq2, aln) in align_all(Mode::SemiGlobal, &Scoring::simple()) {
        if seq1.len() <= seq2.len() {
            assert_eq!(*aln.seq1(), 0..seq1.len());
        } else {
            assert_eq!(*aln.seq2(), 0..seq2.len());
        }
    }
}

#[test]
fn test_empty_inputs() -> Result<()> {
    let scoring = Scoring::<Score>::simple();
    let aln = pairwise::semi_global(&b"".as_slice(), &b"ACGT".as_slice(), &scoring)?;
    assert!(aln.is_empty());
    assert_eq!(*aln.score(), 0);
    assert_eq!(*aln.mode(), Mode::SemiGlobal);
    Ok(())
}
