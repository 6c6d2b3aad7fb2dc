//! Structure-preserving wrapper types.
//!
//! [`Wrapper`] holds exactly one value; [`Optional`] holds a value or the absent marker and
//! skips every `map` once absent. Both implement [`Functor`], so helpers such as [`map`] and
//! [`Compose`] work over either kind. [`safe_head`] and [`safe_prop`] lift lookups that may
//! miss into [`Optional`].

mod accessors;
mod functor;
mod optional;
mod wrapper;

pub use accessors::{safe_head, safe_prop, Props};
pub use functor::{compose, identity, inspect, map, pipe, Compose, Functor, PartiallyApplied};
pub use optional::{maybe, Optional};
pub use wrapper::Wrapper;
