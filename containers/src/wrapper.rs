use std::fmt;

use crate::functor::{Functor, PartiallyApplied};

/// A container holding exactly one value.
///
/// `map` consumes the wrapper and returns a new one holding the result; the held value is never
/// reassigned in place. Wrappers nest freely: `Wrapper::of(Wrapper::of(x))` holds a wrapper.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Wrapper<T>(T);

impl<T> Wrapper<T> {
    pub fn new(value: T) -> Self {
        Wrapper(value)
    }

    /// Same as [`Wrapper::new`], named after the usual pointed-functor constructor.
    pub fn of(value: T) -> Self {
        Wrapper(value)
    }

    /// Apply `f` to the held value exactly once and wrap the result.
    ///
    /// A panic inside `f` unwinds straight through; nothing is caught here.
    #[inline(always)]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Wrapper<U> {
        Wrapper(f(self.0))
    }

    /// Fallible `map`. An `Err` from `f` is returned as-is.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Wrapper<U>, E> {
        f(self.0).map(Wrapper)
    }

    pub fn as_ref(&self) -> Wrapper<&T> {
        Wrapper(&self.0)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Wrapper<T> {
    fn from(value: T) -> Self {
        Wrapper(value)
    }
}

impl Functor for Wrapper<PartiallyApplied> {
    type Layer<X> = Wrapper<X>;

    #[inline(always)]
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B> {
        input.map(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Wrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Wrapper").field(&self.0).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Wrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrapper({})", self.0)
    }
}
