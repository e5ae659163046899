//! Sequence and collection helpers: pagination, random selection, chunking.

mod paginate;
mod random;
mod vec_ext;

pub use paginate::{paginate, Paginate, SliceExtensions};
pub use random::{random_element, random_element_with};
pub use vec_ext::VecExtensions;

use rand::Rng;

/// Extension methods available on every iterator.
pub trait IterExtensions: Iterator + Sized {
    /// Returns the lazy sub-sequence for the given 1-based `page` of `size`
    /// elements. See [`paginate`] for the normalization rules.
    fn paginate(self, page: i64, size: i64) -> Paginate<Self> {
        paginate(self, page, size)
    }

    /// Consumes the iterator and returns a uniformly random element, or
    /// `None` when it is empty. See [`random_element`].
    fn random_element(self) -> Option<Self::Item> {
        random_element(self)
    }

    /// Like [`IterExtensions::random_element`], drawing from the supplied
    /// generator.
    fn random_element_with<R: Rng + ?Sized>(self, rng: &mut R) -> Option<Self::Item> {
        random_element_with(self, rng)
    }
}

impl<I: Iterator> IterExtensions for I {}
