//! Algebraic laws of the `Outcome` combinators.

use nebula_result::prelude::*;
use proptest::prelude::*;

fn outcome() -> impl Strategy<Value = Outcome<i32, u8>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::<i32, u8>::Ok),
        any::<u8>().prop_map(Outcome::<i32, u8>::Err),
    ]
}

fn halve(x: i32) -> Outcome<i32, u8> {
    if x % 2 == 0 { Outcome::Ok(x / 2) } else { Outcome::Err(1) }
}

fn shrink(x: i32) -> Outcome<i32, u8> {
    if x.unsigned_abs() < 1_000 { Outcome::Ok(x) } else { Outcome::Err(2) }
}

// ============================================================================
// FUNCTOR: map(id) == id, map(f).map(g) == map(g . f)
// ============================================================================

proptest! {
    #[test]
    fn map_identity(o in outcome()) {
        prop_assert_eq!(o.map(|x| x), o);
    }

    #[test]
    fn map_composition(o in outcome()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(o.map(f).map(g), o.map(|x| g(f(x))));
    }

    #[test]
    fn map_err_leaves_success(x in any::<i32>()) {
        prop_assert_eq!(Outcome::<i32, u8>::Ok(x).map_err(u16::from), Outcome::Ok(x));
    }
}

// ============================================================================
// MONAD: left identity, right identity, associativity
// ============================================================================

proptest! {
    #[test]
    fn and_then_left_identity(x in any::<i32>()) {
        prop_assert_eq!(Outcome::Ok(x).and_then(halve), halve(x));
    }

    #[test]
    fn and_then_right_identity(o in outcome()) {
        prop_assert_eq!(o.and_then(Outcome::Ok), o);
    }

    #[test]
    fn and_then_associativity(o in outcome()) {
        prop_assert_eq!(o.and_then(halve).and_then(shrink), o.and_then(|x| halve(x).and_then(shrink)));
    }

    #[test]
    fn or_else_mirrors_and_then(e in any::<u8>()) {
        let recovered: Outcome<i32, u8> = Outcome::Err(e).or_else(|e| Outcome::Ok(i32::from(e)));
        prop_assert_eq!(recovered, Outcome::Ok(i32::from(e)));
    }

    #[test]
    fn then_map_is_and_then_map(o in outcome()) {
        let direct = o.then_map(|x| halve(*x), |x, y| x.wrapping_add(y));
        let expanded = o.and_then(|x| halve(x).map(|y| x.wrapping_add(y)));
        prop_assert_eq!(direct, expanded);
    }
}

// ============================================================================
// EXTRACTION & AGGREGATION
// ============================================================================

proptest! {
    #[test]
    fn get_or_matches_std(o in outcome()) {
        let fallback = |e: u8| -i32::from(e);
        prop_assert_eq!(o.get_or(fallback), o.into_result().unwrap_or_else(fallback));
    }

    #[test]
    fn collect_agrees_with_std(items in prop::collection::vec(outcome(), 0..16)) {
        let ours = collect(items.clone()).into_result();
        let expected: Result<Vec<i32>, u8> = items.into_iter().map(Outcome::into_result).collect();
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn result_try_wraps_values(x in any::<i32>()) {
        prop_assert_eq!(result_try(|| x).ok(), Some(x));
    }
}
