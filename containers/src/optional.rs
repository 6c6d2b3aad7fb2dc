use std::fmt;

use log::trace;

use crate::functor::{Functor, PartiallyApplied};

/// A container holding either a present value or the absent marker.
///
/// Presence is fixed at construction. `map` over an absent instance returns another absent
/// instance without calling the supplied function, so absence sticks through a whole chain:
///
/// ```rust
/// # use containers::Optional;
/// let out = Optional::<i32>::absent()
///     .map(|n| n + 1)
///     .map(|n| n.to_string());
/// assert!(out.is_nothing());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Store the slot verbatim; `None` is the absent marker.
    pub fn new(slot: Option<T>) -> Self {
        Optional(slot)
    }

    pub fn of(value: T) -> Self {
        Optional(Some(value))
    }

    pub fn absent() -> Self {
        Optional(None)
    }

    pub fn is_nothing(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Apply `f` to a present value exactly once. On an absent instance `f` is never called.
    #[inline(always)]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self.0 {
            Some(value) => Optional(Some(f(value))),
            None => {
                trace!("skipping map over absent {}", std::any::type_name::<Self>());
                Optional(None)
            }
        }
    }

    /// Fallible `map`. An `Err` from `f` is returned as-is, it is not folded into absence.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Optional<U>, E> {
        match self.0 {
            Some(value) => f(value).map(Optional::of),
            None => Ok(Optional(None)),
        }
    }

    /// Leave the optional world: `default` when absent, `f(value)` otherwise.
    pub fn maybe<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self.0 {
            Some(value) => f(value),
            None => default,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

/// Free-function form of [`Optional::maybe`], argument order as in `maybe(default, f, m)`.
pub fn maybe<T, U>(default: U, f: impl FnOnce(T) -> U, optional: Optional<T>) -> U {
    optional.maybe(default, f)
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional(None)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(slot: Option<T>) -> Self {
        Optional(slot)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.0
    }
}

impl Functor for Optional<PartiallyApplied> {
    type Layer<X> = Optional<X>;

    #[inline(always)]
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B> {
        input.map(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional(Absent)"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Optional({})", value),
            None => f.write_str("Optional(Absent)"),
        }
    }
}
