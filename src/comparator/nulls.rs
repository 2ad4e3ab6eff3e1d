use std::cmp::Ordering;

use super::Comparator;

// Placement of `None` here is decided by the comparator alone. Some
// environments hard-wire missing values to the end of their sort output no
// matter what the comparator answers; no such override exists in these
// sorts, so `nulls_first` and `nulls_last` are authoritative.

/// Lifts a `Comparator<T>` to `Comparator<Option<T>>`, placing `None`
/// before every `Some`. Two `Some` values delegate to the wrapped
/// comparator; two `None` values are equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullsFirst<C> {
    inner: C,
}

impl<C> NullsFirst<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<T, C> Comparator<Option<T>> for NullsFirst<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.inner.compare(a, b),
        }
    }
}

/// Symmetric to [`NullsFirst`]: `None` goes after every `Some`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullsLast<C> {
    inner: C,
}

impl<C> NullsLast<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<T, C> Comparator<Option<T>> for NullsLast<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => self.inner.compare(a, b),
        }
    }
}
