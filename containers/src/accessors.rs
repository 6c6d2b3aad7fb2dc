//! Lookups that may miss, lifted into [`Optional`] so a miss becomes absence instead of an error.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use log::trace;

use crate::optional::Optional;

/// Records that can look up a value by field name.
pub trait Props {
    type Value;

    fn lookup(&self, name: &str) -> Option<&Self::Value>;
}

impl<V, S: BuildHasher> Props for HashMap<String, V, S> {
    type Value = V;

    fn lookup(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Props for BTreeMap<String, V> {
    type Value = V;

    fn lookup(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

// non-object json values have no fields
#[cfg(feature = "serde")]
impl Props for serde_json::Value {
    type Value = serde_json::Value;

    fn lookup(&self, name: &str) -> Option<&serde_json::Value> {
        self.as_object().and_then(|fields| fields.get(name))
    }
}

/// First element of `xs`, absent when `xs` is empty.
pub fn safe_head<I: IntoIterator>(xs: I) -> Optional<I::Item> {
    let head = xs.into_iter().next();
    if head.is_none() {
        trace!("safe_head: empty sequence");
    }
    Optional::new(head)
}

/// Field `name` of `record`, absent when the record has no such field.
pub fn safe_prop<'a, R: Props + ?Sized>(name: &str, record: &'a R) -> Optional<&'a R::Value> {
    let value = record.lookup(name);
    if value.is_none() {
        trace!("safe_prop: no field {:?}", name);
    }
    Optional::new(value)
}
