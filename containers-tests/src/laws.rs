use std::cell::Cell;

use containers::{compose, identity, inspect, Functor, Optional, PartiallyApplied, Wrapper};
use proptest::prelude::*;

fn arb_optional() -> impl Strategy<Value = Optional<i64>> {
    proptest::option::of(any::<i64>()).prop_map(Optional::new)
}

// checks both laws through the trait, so any functor can be plugged in
fn identity_holds<F: Functor>(layer: F::Layer<i64>) -> bool
where
    F::Layer<i64>: Clone + PartialEq,
{
    F::fmap(layer.clone(), identity) == layer
}

fn composition_holds<F: Functor>(layer: F::Layer<i64>, m: i64, k: i64) -> bool
where
    F::Layer<i64>: Clone,
    F::Layer<String>: PartialEq,
{
    let f = move |x: i64| x.wrapping_mul(m);
    let g = move |x: i64| x.wrapping_add(k).to_string();
    F::fmap(F::fmap(layer.clone(), f), g) == F::fmap(layer, compose(g, f))
}

proptest! {
    #[test]
    fn wrapper_identity(v in any::<i64>()) {
        prop_assert!(identity_holds::<Wrapper<PartiallyApplied>>(Wrapper::of(v)));
    }

    #[test]
    fn wrapper_composition(v in any::<i64>(), m in any::<i64>(), k in any::<i64>()) {
        prop_assert!(composition_holds::<Wrapper<PartiallyApplied>>(Wrapper::of(v), m, k));
    }

    #[test]
    fn optional_identity(o in arb_optional()) {
        prop_assert!(identity_holds::<Optional<PartiallyApplied>>(o));
    }

    #[test]
    fn optional_composition(o in arb_optional(), m in any::<i64>(), k in any::<i64>()) {
        prop_assert!(composition_holds::<Optional<PartiallyApplied>>(o, m, k));
    }

    #[test]
    fn absent_short_circuits(m in any::<i64>()) {
        let calls = Cell::new(0);
        let out = Optional::<i64>::absent().map(|x| {
            calls.set(calls.get() + 1);
            x.wrapping_mul(m)
        });
        prop_assert!(out.is_nothing());
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn present_passes_through(v in any::<i64>(), m in any::<i64>()) {
        let seen = Cell::new(Vec::new());
        let out = Optional::of(v).map(|x| {
            let mut args = seen.take();
            args.push(x);
            seen.set(args);
            x.wrapping_mul(m)
        });
        prop_assert_eq!(out, Optional::of(v.wrapping_mul(m)));
        prop_assert_eq!(seen.take(), vec![v]);
    }

    #[test]
    fn nesting_unwraps_one_layer(v in any::<i64>()) {
        let inner = Wrapper::of(v);
        let seen = Wrapper::of(inner).map(|w| inspect(&w));
        prop_assert_eq!(seen, Wrapper::of(format!("Wrapper({})", v)));

        let seen = Optional::of(Optional::of(v)).map(|o| inspect(&o));
        prop_assert_eq!(seen, Optional::of(format!("Optional({})", v)));
    }
}
