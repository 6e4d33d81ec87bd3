//! Pairwise and multiple sequence alignment.
//!
//! The pairwise engine implements global (Needleman-Wunsch), local (Smith-Waterman) and
//! semi-global (fitting) alignment under the affine gap model (Gotoh). The multiple aligner builds
//! a progressive, consensus-guided approximation on top of it.

use std::fmt::Display;

use biobit_core_rs::num::PrimSInt;

pub use alignable::Alignable;
pub use biobit_core_rs::seq::{Sequence, GAP};

pub mod alignable;
pub mod format;
pub mod multiple;
pub mod pairwise;
pub mod stats;

/// Alignment score: a signed primitive integer (i16, i32, i64, ...)
pub trait Score: PrimSInt + Display + Send + Sync {}

impl<T: PrimSInt + Display + Send + Sync> Score for T {}
