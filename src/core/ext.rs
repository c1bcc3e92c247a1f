// SliceUtils - core/ext.rs
//
// Method-call forms of the sequence helpers. Every method delegates to the
// matching free function in `core::seq`, so both call shapes share one
// contract.

use crate::core::seq::{self, Growth};

/// Read-only helpers available on any slice (and on `Vec<T>` via deref).
pub trait SliceExt<T> {
    /// See [`seq::filter`].
    fn filter_by<P>(&self, predicate: P) -> Vec<T>
    where
        T: PartialEq + Clone,
        P: FnMut(&T) -> bool;

    /// See [`seq::map`].
    fn map_indexed<U, F>(&self, transform: F) -> Vec<U>
    where
        T: PartialEq,
        F: FnMut(&T, usize, &[T]) -> U;

    /// See [`seq::try_map`].
    fn try_map_indexed<U, E, F>(&self, transform: F) -> Result<Vec<U>, E>
    where
        T: PartialEq,
        F: FnMut(&T, usize, &[T]) -> Result<U, E>;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn filter_by<P>(&self, predicate: P) -> Vec<T>
    where
        T: PartialEq + Clone,
        P: FnMut(&T) -> bool,
    {
        seq::filter(self, predicate)
    }

    #[inline]
    fn map_indexed<U, F>(&self, transform: F) -> Vec<U>
    where
        T: PartialEq,
        F: FnMut(&T, usize, &[T]) -> U,
    {
        seq::map(self, transform)
    }

    #[inline]
    fn try_map_indexed<U, E, F>(&self, transform: F) -> Result<Vec<U>, E>
    where
        T: PartialEq,
        F: FnMut(&T, usize, &[T]) -> Result<U, E>,
    {
        seq::try_map(self, transform)
    }
}

/// In-place growth helpers for owned sequences.
pub trait SeqExt<T> {
    /// See [`seq::push`].
    fn push_all<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>;

    /// See [`seq::push_with`].
    fn push_all_with<I>(&mut self, elems: I, growth: Growth)
    where
        I: IntoIterator<Item = T>;
}

impl<T: PartialEq> SeqExt<T> for Vec<T> {
    #[inline]
    fn push_all<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        seq::push(self, elems)
    }

    #[inline]
    fn push_all_with<I>(&mut self, elems: I, growth: Growth)
    where
        I: IntoIterator<Item = T>,
    {
        seq::push_with(self, elems, growth)
    }
}
