use std::fmt::Debug;
use std::marker::PhantomData;

/// A container whose held values can be transformed via `fmap` without changing its shape.
///
/// # Motivation
///
/// [`crate::Wrapper`] and [`crate::Optional`] both expose an inherent `map` method. This trait
/// names that shared capability so that code can be written once and run over either kind,
/// eg the pointfree [`map`] helper or the [`Compose`] functor.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type: we can implement a
/// trait for `Optional<usize>` but not for just `Optional`. For this reason the trait is
/// implemented over the uninhabited [`PartiallyApplied`] marker, eg
///
/// ```rust
/// # use containers::{Functor, PartiallyApplied};
/// #[derive(Debug, PartialEq, Eq)]
/// struct Pair<A>(A, A);
///
/// impl Functor for Pair<PartiallyApplied> {
///     type Layer<X> = Pair<X>;
///
///     fn fmap<A, B>(input: Self::Layer<A>, mut f: impl FnMut(A) -> B) -> Self::Layer<B> {
///         Pair(f(input.0), f(input.1))
///     }
/// }
///
/// let mapped = Pair::<PartiallyApplied>::fmap(Pair(1, 2), |n| n * 10);
/// assert_eq!(mapped, Pair(10, 20));
/// ```
///
/// # Laws
///
/// Implementations must satisfy, for every layer `w` and functions `f`, `g`:
///
/// - identity: `fmap(w, |x| x)` is equal to `w`
/// - composition: `fmap(fmap(w, f), g)` is equal to `fmap(w, |x| g(f(x)))`
///
/// # Use
///
/// ```rust
/// # use containers::{Functor, Optional, PartiallyApplied, Wrapper};
/// let wrapped = Wrapper::<PartiallyApplied>::fmap(Wrapper::of(2), |n| n + 3);
/// assert_eq!(wrapped, Wrapper::of(5));
///
/// let absent = Optional::<PartiallyApplied>::fmap(Optional::<i32>::absent(), |n| n + 3);
/// assert!(absent.is_nothing());
/// ```
pub trait Functor {
    /// the container type that is mapped over by `fmap`
    type Layer<X>;

    /// Apply some function `f` to each value held inside a layer
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B>;
}

/// An uninhabited type used to define [`Functor`] instances for partially-applied types.
///
/// For example: the `Functor` instance for `Wrapper<A>` cannot be written over the
/// partially-applied type `Wrapper`, so instead we write it over `Wrapper<PartiallyApplied>`
#[derive(Clone, Copy, Debug)]
pub enum PartiallyApplied {}

impl Functor for Option<PartiallyApplied> {
    type Layer<X> = Option<X>;

    #[inline(always)]
    fn fmap<A, B>(input: Self::Layer<A>, f: impl FnMut(A) -> B) -> Self::Layer<B> {
        input.map(f)
    }
}

/// Two functors stacked on top of each other, mapped over as one: `F1::Layer<F2::Layer<X>>`.
pub struct Compose<F1, F2>(PhantomData<F1>, PhantomData<F2>);

impl<F1: Functor, F2: Functor> Functor for Compose<F1, F2> {
    type Layer<X> = F1::Layer<F2::Layer<X>>;

    fn fmap<A, B>(input: Self::Layer<A>, mut f: impl FnMut(A) -> B) -> Self::Layer<B> {
        F1::fmap(input, move |inner| F2::fmap(inner, &mut f))
    }
}

/// Curried, pointfree form of `fmap`: turns `A -> B` into `F<A> -> F<B>` for any functor `F`.
pub fn map<F: Functor, A, B>(mut f: impl FnMut(A) -> B) -> impl FnMut(F::Layer<A>) -> F::Layer<B> {
    move |layer| F::fmap(layer, &mut f)
}

pub fn identity<A>(a: A) -> A {
    a
}

/// `g ∘ f`: runs `f` first, then `g`.
pub fn compose<A, B, C>(
    mut g: impl FnMut(B) -> C,
    mut f: impl FnMut(A) -> B,
) -> impl FnMut(A) -> C {
    move |a| g(f(a))
}

/// Left-to-right composition, the mirror of [`compose`].
pub fn pipe<A, B, C>(f: impl FnMut(A) -> B, g: impl FnMut(B) -> C) -> impl FnMut(A) -> C {
    compose(g, f)
}

/// Render a value the way test assertions print it, eg `Wrapper(4)` or `Optional(Absent)`.
pub fn inspect<T: Debug + ?Sized>(x: &T) -> String {
    format!("{:?}", x)
}
