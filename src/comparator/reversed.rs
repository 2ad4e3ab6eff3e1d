use std::cmp::Ordering;

use super::Comparator;

/// Decorator swapping the operands of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(b, a)
    }
}
