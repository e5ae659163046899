//! Pagination over ordered sequences.

/// Returns the sub-sequence for the 1-based `page` of `size` elements.
///
/// Normalization rules:
/// - `page <= 1` (including 0 and negatives) selects the first page;
/// - `size <= 0` disables windowing: the whole input passes through,
///   whatever `page` says;
/// - a page starting past the end of the input yields nothing.
///
/// The adapter is lazy: elements are pulled from `items` on demand, in the
/// original order, and the input is consumed exactly once. Nothing is
/// materialized, so this works over unbounded-cost producers as well as
/// slices and vectors.
///
/// ```
/// use stdx::collections::paginate;
///
/// let page: Vec<i32> = paginate(1..=7, 2, 3).collect();
/// assert_eq!(page, vec![4, 5, 6]);
/// ```
pub fn paginate<I: IntoIterator>(items: I, page: i64, size: i64) -> Paginate<I::IntoIter> {
    let (skip, remaining) = if size <= 0 {
        (0, None)
    } else {
        let page = page.max(1) as u64;
        let skip = (page - 1).saturating_mul(size as u64);
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        // Saturate rather than truncate on 32-bit targets.
        (skip, Some(usize::try_from(size).unwrap_or(usize::MAX)))
    };

    Paginate {
        iter: items.into_iter(),
        skip,
        remaining,
    }
}

/// Lazy iterator over a single page of an underlying sequence.
///
/// Created by [`paginate`]; `remaining == None` means no windowing.
#[derive(Debug, Clone)]
pub struct Paginate<I> {
    iter: I,
    skip: usize,
    remaining: Option<usize>,
}

impl<I: Iterator> Iterator for Paginate<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.skip > 0 {
            self.iter.next()?;
            self.skip -= 1;
        }
        match self.remaining.as_mut() {
            None => self.iter.next(),
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                self.iter.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let lower = lower.saturating_sub(self.skip);
        let upper = upper.map(|u| u.saturating_sub(self.skip));
        match self.remaining {
            None => (lower, upper),
            Some(n) => (lower.min(n), Some(upper.map_or(n, |u| u.min(n)))),
        }
    }
}

/// Pagination over slices, returning a borrowed view instead of an iterator.
pub trait SliceExtensions<T> {
    /// Returns the sub-slice for the 1-based `page` of `size` elements,
    /// under the same normalization rules as [`paginate`]. The view keeps
    /// the original element order and copies nothing.
    fn page(&self, page: i64, size: i64) -> &[T];
}

impl<T> SliceExtensions<T> for [T] {
    fn page(&self, page: i64, size: i64) -> &[T] {
        if size <= 0 {
            return self;
        }
        let page = page.max(1) as u64;
        let offset = (page - 1).saturating_mul(size as u64);
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        if offset >= self.len() {
            return &self[..0];
        }
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        let end = offset.saturating_add(size).min(self.len());
        &self[offset..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_page() {
        let items = vec![1, 2, 3, 4, 5, 6, 7];
        let page: Vec<i32> = paginate(items.iter().copied(), 2, 3).collect();
        assert_eq!(page, vec![4, 5, 6]);
    }

    #[test]
    fn test_last_page_truncated() {
        let page: Vec<i32> = paginate(1..=7, 3, 3).collect();
        assert_eq!(page, vec![7]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page: Vec<i32> = paginate(1..=7, 4, 3).collect();
        assert!(page.is_empty());
    }

    #[test]
    fn test_nonpositive_page_is_first_page() {
        let first: Vec<i32> = paginate(1..=7, 1, 2).collect();
        assert_eq!(paginate(1..=7, 0, 2).collect::<Vec<_>>(), first);
        assert_eq!(paginate(1..=7, -5, 2).collect::<Vec<_>>(), first);
    }

    #[test]
    fn test_nonpositive_size_returns_everything() {
        let all: Vec<i32> = (1..=7).collect();
        assert_eq!(paginate(1..=7, 1, 0).collect::<Vec<_>>(), all);
        assert_eq!(paginate(1..=7, 99, -3).collect::<Vec<_>>(), all);
    }

    #[test]
    fn test_lazy_input_not_forced() {
        // Pulling one element from page 2 must consume exactly skip+1 items.
        let mut pulled = 0usize;
        let counted = (0..100).inspect(|_| pulled += 1);
        let mut page = paginate(counted, 2, 10);
        assert_eq!(page.next(), Some(10));
        drop(page);
        assert_eq!(pulled, 11);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let page: Vec<i32> = paginate(1..=7, i64::MAX, i64::MAX).collect();
        assert!(page.is_empty());
    }

    #[test]
    fn test_huge_size_covers_the_whole_first_page() {
        let all: Vec<i32> = (1..=7).collect();
        assert_eq!(paginate(1..=7, 1, i64::MAX).collect::<Vec<_>>(), all);
        let items = [10, 20, 30];
        assert_eq!(items.page(1, i64::MAX), &items);
    }

    #[test]
    fn test_slice_page_view() {
        let items = [10, 20, 30, 40, 50];
        assert_eq!(items.page(1, 2), &[10, 20]);
        assert_eq!(items.page(3, 2), &[50]);
        assert_eq!(items.page(4, 2), &[] as &[i32]);
        assert_eq!(items.page(2, 0), &items);
    }
}
