//! Property-based tests for the composition algebra

use plumbline::predicate::prelude::*;
use plumbline::quantifier::Quantifier;
use plumbline::testing::Probe;
use proptest::prelude::*;

fn divisible_by_three(n: &i32) -> bool {
    n % 3 == 0
}

fn below_fifty(n: &i32) -> bool {
    *n < 50
}

proptest! {
    #[test]
    fn prop_or_invalid_is_identity(n in any::<i32>()) {
        prop_assert_eq!(divisible_by_three.or(invalid()).check(&n), divisible_by_three(&n));
        prop_assert_eq!(even().or(invalid_int()).check_int(n), even().check_int(n));
    }

    #[test]
    fn prop_and_valid_is_identity(n in any::<i32>()) {
        prop_assert_eq!(divisible_by_three.and(valid()).check(&n), divisible_by_three(&n));
        prop_assert_eq!(odd().and(valid_int()).check_int(n), odd().check_int(n));
    }

    #[test]
    fn prop_excluded_middle(n in any::<i32>()) {
        prop_assert!(divisible_by_three.or(divisible_by_three.not()).check(&n));
        prop_assert!(divisible_by_three.or_not(divisible_by_three).check(&n));
        prop_assert!(positive().or(positive().not()).check_int(n));
    }

    #[test]
    fn prop_non_contradiction(n in any::<i32>()) {
        prop_assert!(!divisible_by_three.and(divisible_by_three.not()).check(&n));
        prop_assert!(!divisible_by_three.and_not(divisible_by_three).check(&n));
        prop_assert!(!zero().and(zero().not()).check_int(n));
    }

    #[test]
    fn prop_de_morgan(n in any::<i32>()) {
        let lhs = divisible_by_three.or(below_fifty).not();
        let rhs = divisible_by_three.not().and(below_fifty.not());
        prop_assert_eq!(lhs.check(&n), rhs.check(&n));

        let lhs = even().and(negative()).not();
        let rhs = even().not().or(negative().not());
        prop_assert_eq!(lhs.check_int(n), rhs.check_int(n));
    }

    #[test]
    fn prop_double_negation(n in any::<i32>()) {
        prop_assert_eq!(below_fifty.not().not().check(&n), below_fifty(&n));
    }

    #[test]
    fn prop_converse_is_involution(a in any::<i32>(), b in any::<i32>()) {
        let back = lt().converse().converse();
        prop_assert_eq!(back.relates(&a, &b), lt().relates(&a, &b));
        prop_assert_eq!(gt_int().converse().relates_int(a, b), lt_int().relates_int(a, b));
    }

    #[test]
    fn prop_negate_complements(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_ne!(eq().negate().relates(&a, &b), eq().relates(&a, &b));
        prop_assert_eq!(lte_int().negate().relates_int(a, b), gt_int().relates_int(a, b));
    }

    #[test]
    fn prop_or_short_circuits(n in any::<i32>()) {
        let right = Probe::new(below_fifty);
        let calls = right.counter();
        let p = divisible_by_three.or(right);
        let _ = p.check(&n);
        let expected = usize::from(!divisible_by_three(&n));
        prop_assert_eq!(calls.get(), expected);
    }

    #[test]
    fn prop_and_short_circuits(n in any::<i32>()) {
        let right = Probe::new(valid_int());
        let calls = right.counter();
        let p = even().and(right);
        let _ = p.check_int(n);
        prop_assert_eq!(calls.get(), usize::from(n % 2 == 0));
    }

    #[test]
    fn prop_none_is_not_any(
        subjects in prop::collection::vec(-20i32..20, 1..10),
        value in -20i32..20
    ) {
        let none = invalid().or_none(subjects.clone(), |s: &i32, v: &i32| s == v).unwrap();
        let any = invalid().or_any(subjects, |s: &i32, v: &i32| s == v).unwrap();
        prop_assert_ne!(none.check(&value), any.check(&value));
    }

    #[test]
    fn prop_quantifier_matches_iterator(
        q in prop::sample::select(Quantifier::VALUES.to_vec()),
        objects in prop::collection::vec(any::<i32>(), 1..20),
        subject in any::<i32>()
    ) {
        let held = q.evaluate_int(subject, &gte_int(), &objects).unwrap();
        let expected = match q {
            Quantifier::All => objects.iter().all(|&o| subject >= o),
            Quantifier::Any => objects.iter().any(|&o| subject >= o),
            Quantifier::None => !objects.iter().any(|&o| subject >= o),
        };
        prop_assert_eq!(held, expected);
    }
}

#[test]
fn quantifier_examples() {
    let is_even = |n: &i32, _: &()| n % 2 == 0;
    assert!(Quantifier::All.evaluate(&(), &is_even.converse(), &Vec::<i32>::new()).is_err());
    assert_eq!(Quantifier::All.evaluate(&(), &is_even.converse(), &[2, 4, 6]), Ok(true));
    assert_eq!(Quantifier::Any.evaluate(&(), &is_even.converse(), &[1, 3, 5, 4]), Ok(true));
    assert_eq!(Quantifier::None.evaluate(&(), &is_even.converse(), &[1, 3, 5]), Ok(true));
    assert_eq!(Quantifier::All.evaluate(&(), &is_even.converse(), &[2, 3]), Ok(false));
}

#[test]
fn composition_is_lazy_and_reusable() {
    let base = even();
    let a = base.or_relation(gt_int(), 100);
    let b = base.and_relation(gt_int(), 100);
    assert!(a.check_int(7 * 20));
    assert!(!b.check_int(4));
    assert!(base.check_int(4));
}
