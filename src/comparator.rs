use std::cmp::Ordering;

use crate::comparable::Comparable;

mod from_fn;
mod key_extract;
mod natural;
mod nulls;
mod reversed;
mod then;

pub mod prelude {
    #![allow(unused)]

    pub use super::{
        Comparator, comparing, comparing_with, max_by, min_by, natural_order, of, reverse_order,
    };
    pub use crate::comparable::Comparable;
}

pub use from_fn::{FromFn, of};
pub use key_extract::{KeyExtract, comparing, comparing_with};
pub use natural::{Natural, natural_order, reverse_order};
pub use nulls::{NullsFirst, NullsLast};
pub use reversed::Reversed;
pub use then::Then;

/// An ordering over `T`.
///
/// Comparators are plain immutable values; every provided method builds a
/// new comparator and leaves the receiver's semantics untouched. Closures of
/// shape `Fn(&T, &T) -> Ordering` are comparators too, via a blanket impl.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// The same ordering with operands swapped.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }

    /// Tie-break with a secondary comparator, consulted only when `self`
    /// reports [`Ordering::Equal`]. Chains built by repeated calls evaluate
    /// in declaration order and stop at the first non-equal answer.
    fn then<D>(self, secondary: D) -> Then<Self, D>
    where
        Self: Sized,
        D: Comparator<T>,
    {
        Then::new(self, secondary)
    }

    /// Tie-break by a projected key under its natural order.
    fn then_by_key<F, K>(self, extract: F) -> Then<Self, KeyExtract<F, Natural<K>, K>>
    where
        Self: Sized,
        F: Fn(&T) -> K,
        K: Comparable,
    {
        Then::new(self, comparing(extract))
    }

    /// Tie-break by a projected key under an explicit key comparator.
    fn then_by_key_with<F, K, D>(
        self,
        extract: F,
        key_comparator: D,
    ) -> Then<Self, KeyExtract<F, D, K>>
    where
        Self: Sized,
        F: Fn(&T) -> K,
        D: Comparator<K>,
    {
        Then::new(self, comparing_with(extract, key_comparator))
    }

    /// Lift to `Option<T>`, placing `None` before every `Some`.
    fn nulls_first(self) -> NullsFirst<Self>
    where
        Self: Sized,
    {
        NullsFirst::new(self)
    }

    /// Lift to `Option<T>`, placing `None` after every `Some`.
    fn nulls_last(self) -> NullsLast<Self>
    where
        Self: Sized,
    {
        NullsLast::new(self)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The greater of `a` and `b` under `cmp`, preferring `a` on ties.
pub fn max_by<'a, T, C>(cmp: &C, a: &'a T, b: &'a T) -> &'a T
where
    T: ?Sized,
    C: Comparator<T>,
{
    if cmp.compare(a, b) == Ordering::Less { b } else { a }
}

/// The smaller of `a` and `b` under `cmp`, preferring `a` on ties.
pub fn min_by<'a, T, C>(cmp: &C, a: &'a T, b: &'a T) -> &'a T
where
    T: ?Sized,
    C: Comparator<T>,
{
    if cmp.compare(b, a) == Ordering::Less { b } else { a }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering::{self, *};

    use super::prelude::*;
    use super::{max_by, min_by};

    #[test]
    fn closures_are_comparators() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"kiwi", &"banana"), Less);
        assert_eq!(by_len.reversed().compare(&"kiwi", &"banana"), Greater);
    }

    #[test]
    fn max_min_prefer_first_on_ties() {
        let cmp = natural_order::<i32>();
        assert_eq!(*max_by(&cmp, &1, &2), 2);
        assert_eq!(*min_by(&cmp, &1, &2), 1);

        let a = 7;
        let b = 7;
        assert!(std::ptr::eq(max_by(&cmp, &a, &b), &a));
        assert!(std::ptr::eq(min_by(&cmp, &a, &b), &a));
    }

    #[test]
    fn reflexive_over_random_inputs() {
        use rand::Rng;

        let mut rng = rand::rng();
        let cmp = natural_order::<i64>();
        for _ in 0..1000 {
            let x: i64 = rng.random();
            assert_eq!(cmp.compare(&x, &x), Equal);
        }
    }

    #[test]
    fn reversal_is_antisymmetric_over_random_inputs() {
        use rand::Rng;

        let mut rng = rand::rng();
        let cmp = natural_order::<i64>();
        let rev = natural_order::<i64>().reversed();
        let twice = natural_order::<i64>().reversed().reversed();
        for _ in 0..1000 {
            let x: i64 = rng.random();
            let y: i64 = rng.random();
            assert_eq!(cmp.compare(&x, &y), rev.compare(&y, &x));
            assert_eq!(cmp.compare(&x, &y), twice.compare(&x, &y));
        }
    }

    #[test]
    fn random_sequences_sort_consistently() {
        use itertools::Itertools;
        use rand::Rng;

        let mut rng = rand::rng();
        let cmp = natural_order::<i32>();
        for _ in 0..10 {
            let mut data: Vec<i32> = (0..100).map(|_| rng.random_range(-50..50)).collect();
            data.sort_by(|a, b| cmp.compare(a, b));
            assert!(data.iter().tuple_windows().all(|(a, b)| a <= b));
        }
    }

    #[test]
    fn comparator_shared_across_threads() {
        let cmp = natural_order::<i32>().reversed();

        crossbeam::scope(|s| {
            for _ in 0..4 {
                s.spawn(|_| {
                    let mut data = vec![3, 1, 2];
                    data.sort_by(|a, b| cmp.compare(a, b));
                    assert_eq!(data, [3, 2, 1]);
                });
            }
        })
        .unwrap();
    }

    #[test]
    fn composed_comparator_stays_a_value() {
        fn assert_comparator<T, C: Comparator<T>>(_: &C) {}

        let cmp = comparing(|s: &&str| s.len())
            .then(|a: &&str, b: &&str| a.compare_to(b))
            .reversed();
        assert_comparator::<&str, _>(&cmp);
        assert_eq!(cmp.compare(&"ab", &"cd"), cmp.compare(&"ab", &"cd"));
        let _: Ordering = cmp.compare(&"a", &"bc");
    }
}
