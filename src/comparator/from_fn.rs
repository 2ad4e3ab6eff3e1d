use std::cmp::Ordering;

use super::Comparator;

/// Named wrapper around an arbitrary comparison function. Adds no semantics
/// of its own.
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F> {
    f: F,
}

impl<T, F> Comparator<T> for FromFn<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b)
    }
}

/// Wrap a comparison function as a composable comparator.
pub fn of<T, F>(f: F) -> FromFn<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    FromFn { f }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering::*;

    use crate::comparator::prelude::*;

    #[test]
    fn wraps_the_function_verbatim() {
        let by_len = of(|a: &String, b: &String| a.len().cmp(&b.len()));
        assert_eq!(by_len.compare(&"kiwi".into(), &"banana".into()), Less);
        assert_eq!(by_len.compare(&"apple".into(), &"kiwi".into()), Greater);
        assert_eq!(by_len.compare(&"apple".into(), &"melon".into()), Equal);
    }

    #[test]
    fn composes_like_any_other_comparator() {
        let mut data = vec!["strawberry", "kiwi", "banana", "apple"];
        let cmp = of(|a: &&str, b: &&str| a.len().cmp(&b.len())).reversed();
        data.sort_by(|a, b| cmp.compare(a, b));
        assert_eq!(data, ["strawberry", "banana", "apple", "kiwi"]);
    }
}
