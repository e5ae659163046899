//! Vector manipulation helpers.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{ExtensionError, ExtensionResult};

/// Extension methods on vectors.
pub trait VecExtensions<T> {
    /// Splits the elements into consecutive chunks of at most `size`
    /// elements; the final chunk may be shorter. A zero `size` is an
    /// invalid-argument error.
    fn chunk_by_size(&self, size: usize) -> ExtensionResult<Vec<Vec<T>>>
    where
        T: Clone;

    /// Removes every later duplicate in place, keeping the first occurrence
    /// of each element and the original relative order.
    fn dedup_preserve_order(&mut self)
    where
        T: Hash + Eq + Clone;
}

impl<T> VecExtensions<T> for Vec<T> {
    fn chunk_by_size(&self, size: usize) -> ExtensionResult<Vec<Vec<T>>>
    where
        T: Clone,
    {
        if size == 0 {
            return Err(ExtensionError::invalid_argument("chunk size must be > 0"));
        }
        Ok(self.chunks(size).map(<[T]>::to_vec).collect())
    }

    fn dedup_preserve_order(&mut self)
    where
        T: Hash + Eq + Clone,
    {
        let mut seen = HashSet::with_capacity(self.len());
        self.retain(|item| seen.insert(item.clone()));
    }
}
