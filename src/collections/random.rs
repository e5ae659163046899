//! Uniform random selection from a sequence.

use rand::Rng;

/// Consumes `items` and returns one element chosen uniformly at random, or
/// `None` when the sequence is empty.
///
/// A fresh `thread_rng` handle is drawn per call; use
/// [`random_element_with`] to supply a seeded generator instead.
pub fn random_element<I: IntoIterator>(items: I) -> Option<I::Item> {
    random_element_with(items, &mut rand::thread_rng())
}

/// Like [`random_element`], drawing randomness from the supplied generator.
///
/// The input is consumed exactly once, front to back, using reservoir
/// sampling: after `i` elements each of them has been retained with
/// probability `1/i`, so the final pick is uniform over the whole sequence
/// without materializing it. A single-element sequence returns that element
/// without touching the generator at all.
pub fn random_element_with<I, R>(items: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut iter = items.into_iter();
    let mut chosen = iter.next()?;
    let mut seen: usize = 1;
    for item in iter {
        seen += 1;
        if rng.gen_range(0..seen) == 0 {
            chosen = item;
        }
    }
    Some(chosen)
}
