use std::{cmp::Ordering, marker::PhantomData};

use crate::comparable::Comparable;

use super::{Comparator, Natural};

/// Comparator over entities that projects a key from each operand and
/// compares the keys.
pub struct KeyExtract<F, C, K> {
    extract: F,
    key_cmp: C,
    _marker: PhantomData<fn() -> K>,
}

impl<F, C, K> KeyExtract<F, C, K> {
    pub fn new(extract: F, key_cmp: C) -> Self {
        Self {
            extract,
            key_cmp,
            _marker: PhantomData,
        }
    }
}

impl<T, F, C, K> Comparator<T> for KeyExtract<F, C, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.key_cmp.compare(&(self.extract)(a), &(self.extract)(b))
    }
}

impl<F, C, K> Clone for KeyExtract<F, C, K>
where
    F: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            extract: self.extract.clone(),
            key_cmp: self.key_cmp.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, C, K> Copy for KeyExtract<F, C, K>
where
    F: Copy,
    C: Copy,
{
}

/// Order entities by a projected key under its natural order.
pub fn comparing<T, F, K>(extract: F) -> KeyExtract<F, Natural<K>, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    K: Comparable,
{
    KeyExtract::new(extract, Natural::default())
}

/// Order entities by a projected key under an explicit key comparator.
pub fn comparing_with<T, F, K, C>(extract: F, key_comparator: C) -> KeyExtract<F, C, K>
where
    T: ?Sized,
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    KeyExtract::new(extract, key_comparator)
}
