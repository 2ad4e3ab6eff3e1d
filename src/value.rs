use std::{cmp::Ordering, fmt};

use crate::{
    comparable::Comparable,
    error::{Error, Result, fail},
};

/// Kind of a [`Value`], reported when two values cannot be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Str => "string",
        };
        f.write_str(name)
    }
}

/// A loosely typed comparable value, for data whose shape is only known at
/// runtime. Statically typed data should implement [`Comparable`] and use
/// [`natural_order`](crate::comparator::natural_order) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::Str,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Natural ordering over dynamic values: `Null` after everything, both
    /// `Null` equal, same-kind values by their [`Comparable`] rules. Two
    /// values of different kinds cannot be ordered and fail with
    /// [`Error::UnsupportedComparison`].
    pub fn natural_cmp(a: &Value, b: &Value) -> Result<Ordering> {
        match (a, b) {
            (Value::Null, Value::Null) => Ok(Ordering::Equal),
            (Value::Null, _) => Ok(Ordering::Greater),
            (_, Value::Null) => Ok(Ordering::Less),
            (Value::Number(x), Value::Number(y)) => Ok(x.compare_to(y)),
            (Value::Bool(x), Value::Bool(y)) => Ok(x.compare_to(y)),
            (Value::Str(x), Value::Str(y)) => Ok(x.compare_to(y)),
            _ => fail(Error::UnsupportedComparison {
                lhs: a.kind(),
                rhs: b.kind(),
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<V> From<Option<V>> for Value
where
    V: Into<Value>,
{
    fn from(v: Option<V>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// A fallible ordering over `T`.
///
/// The dynamic counterpart of [`Comparator`](crate::comparator::Comparator):
/// the same decorator set, with comparison failures propagated to the
/// caller instead of being ruled out by the type system. Closures of shape
/// `Fn(&T, &T) -> Result<Ordering>` qualify via a blanket impl.
pub trait TryComparator<T: ?Sized> {
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering>;

    /// The same ordering with operands swapped.
    fn reversed(self) -> TryReversed<Self>
    where
        Self: Sized,
    {
        TryReversed { inner: self }
    }

    /// Tie-break with a secondary comparator, consulted only when `self`
    /// reports [`Ordering::Equal`]. Failures short-circuit.
    fn then<D>(self, secondary: D) -> TryThen<Self, D>
    where
        Self: Sized,
        D: TryComparator<T>,
    {
        TryThen {
            primary: self,
            secondary,
        }
    }

    /// Place [`Value::Null`] before everything else, then delegate.
    fn nulls_first(self) -> TryNullsFirst<Self>
    where
        Self: Sized,
    {
        TryNullsFirst { inner: self }
    }

    /// Place [`Value::Null`] after everything else, then delegate.
    fn nulls_last(self) -> TryNullsLast<Self>
    where
        Self: Sized,
    {
        TryNullsLast { inner: self }
    }
}

impl<T, F> TryComparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Result<Ordering>,
{
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering> {
        self(a, b)
    }
}

/// Natural order over [`Value`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueOrder;

impl TryComparator<Value> for ValueOrder {
    fn try_compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        Value::natural_cmp(a, b)
    }
}

/// Ascending order over dynamic values, `Null` last.
pub fn natural_order() -> ValueOrder {
    ValueOrder
}

/// Natural order over dynamic values with operands swapped, `Null` first.
pub fn reverse_order() -> TryReversed<ValueOrder> {
    ValueOrder.reversed()
}

/// Decorator swapping the operands of the wrapped fallible comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct TryReversed<C> {
    inner: C,
}

impl<T, C> TryComparator<T> for TryReversed<C>
where
    T: ?Sized,
    C: TryComparator<T>,
{
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering> {
        self.inner.try_compare(b, a)
    }
}

/// Lexicographic combination of two fallible comparators.
#[derive(Clone, Copy, Debug, Default)]
pub struct TryThen<C, D> {
    primary: C,
    secondary: D,
}

impl<T, C, D> TryComparator<T> for TryThen<C, D>
where
    T: ?Sized,
    C: TryComparator<T>,
    D: TryComparator<T>,
{
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering> {
        match self.primary.try_compare(a, b)? {
            Ordering::Equal => self.secondary.try_compare(a, b),
            res => Ok(res),
        }
    }
}

/// Places [`Value::Null`] before all other values; two nulls are equal;
/// everything else delegates to the wrapped comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct TryNullsFirst<C> {
    inner: C,
}

impl<C> TryComparator<Value> for TryNullsFirst<C>
where
    C: TryComparator<Value>,
{
    fn try_compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        match (a.is_null(), b.is_null()) {
            (true, true) => Ok(Ordering::Equal),
            (true, false) => Ok(Ordering::Less),
            (false, true) => Ok(Ordering::Greater),
            (false, false) => self.inner.try_compare(a, b),
        }
    }
}

/// Symmetric to [`TryNullsFirst`]: [`Value::Null`] goes last.
#[derive(Clone, Copy, Debug, Default)]
pub struct TryNullsLast<C> {
    inner: C,
}

impl<C> TryComparator<Value> for TryNullsLast<C>
where
    C: TryComparator<Value>,
{
    fn try_compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        match (a.is_null(), b.is_null()) {
            (true, true) => Ok(Ordering::Equal),
            (true, false) => Ok(Ordering::Greater),
            (false, true) => Ok(Ordering::Less),
            (false, false) => self.inner.try_compare(a, b),
        }
    }
}
