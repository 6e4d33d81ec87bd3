// Instead of making a custom trait here I must support Rust builtin traits for containers
// once they are ready: https://internals.rust-lang.org/t/traits-that-should-be-in-std-but-arent/3002

use biobit_core_rs::seq::Sequence;

/// Trait for types that can be aligned.
pub trait Alignable {
    /// The type of individual symbols/elements being aligned.
    type Symbol;

    /// Returns true if the object is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the object.
    fn len(&self) -> usize;

    /// Returns the symbol at the given position.
    fn at(&self, pos: usize) -> &Self::Symbol;

    /// Returns the symbols in [start, end) as a contiguous slice.
    fn slice(&self, start: usize, end: usize) -> &[Self::Symbol];
}

impl<T: Copy> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        (self as &[Self::Symbol]).len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }

    #[inline(always)]
    fn slice(&self, start: usize, end: usize) -> &[Self::Symbol] {
        &self[start..end]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }

    #[inline(always)]
    fn slice(&self, start: usize, end: usize) -> &[Self::Symbol] {
        &self[start..end]
    }
}

impl Alignable for Sequence {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.as_bytes()[pos]
    }

    #[inline(always)]
    fn slice(&self, start: usize, end: usize) -> &[Self::Symbol] {
        &self.as_bytes()[start..end]
    }
}
