//! Composable comparators: natural order, reverse order, key extraction,
//! tie-break chaining and null placement, built as plain immutable values.
//!
//! ```
//! use ordkit::comparator::prelude::*;
//!
//! let cmp = natural_order::<i32>().reversed();
//!
//! let mut data = vec![3, 1, 2];
//! data.sort_by(|a, b| cmp.compare(a, b));
//! assert_eq!(data, [3, 2, 1]);
//! ```

pub mod comparable;
pub mod comparator;
pub mod error;
pub mod value;

#[cfg(test)]
mod test_utils;

pub use comparable::Comparable;
pub use comparator::{Comparator, comparing, comparing_with, natural_order, of, reverse_order};
pub use error::{Error, Result};
