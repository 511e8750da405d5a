use asymint_core::{Ain, AinError};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn arb_ain() -> impl Strategy<Value = Ain> {
    (-1000.0f64..1000.0, 0.0f64..500.0, 0.0f64..=1.0).prop_map(|(lower, width, t)| {
        let upper = lower + width;
        let expected = (lower + t * width).clamp(lower, upper);
        Ain::new(lower, upper, expected).unwrap()
    })
}

fn arb_nonzero_ain() -> impl Strategy<Value = Ain> {
    (0.5f64..100.0, 0.0f64..100.0, 0.0f64..=1.0, any::<bool>()).prop_map(
        |(start, width, t, negative)| {
            let lower = start;
            let upper = start + width;
            let expected = (lower + t * width).clamp(lower, upper);
            let positive = Ain::new(lower, upper, expected).unwrap();
            if negative {
                -positive
            } else {
                positive
            }
        },
    )
}

fn arb_zero_crossing() -> impl Strategy<Value = Ain> {
    (-100.0f64..=0.0, 0.0f64..=100.0, 0.0f64..=1.0).prop_map(|(lower, upper, t)| {
        let expected = (lower + t * (upper - lower)).clamp(lower, upper);
        Ain::new(lower, upper, expected).unwrap()
    })
}

fn holds_invariant(ain: &Ain) -> bool {
    ain.lower() <= ain.expected() && ain.expected() <= ain.upper()
}

fn close(a: &Ain, b: &Ain) -> bool {
    let scale = 1.0
        + a.lower().abs().max(a.upper().abs())
        + b.lower().abs().max(b.upper().abs());
    a.approx_eq(b, TOLERANCE * scale)
}

// Property 1: Every operation preserves lower <= expected <= upper
proptest! {
    #[test]
    fn prop_invariant_preserved(
        a in arb_ain(),
        b in arb_ain(),
        divisor in arb_nonzero_ain(),
        k in -100.0f64..100.0
    ) {
        prop_assert!(holds_invariant(&a.negate()));
        prop_assert!(holds_invariant(&(a + b)));
        prop_assert!(holds_invariant(&(a - b)));
        prop_assert!(holds_invariant(&a.scale(k).unwrap()));
        prop_assert!(holds_invariant(&(a * b)));
        prop_assert!(holds_invariant(&a.divide(divisor).unwrap()));
        prop_assert!(holds_invariant(&divisor.reciprocal().unwrap()));
    }
}

// Property 2: Zero is the additive identity
proptest! {
    #[test]
    fn prop_additive_identity(a in arb_ain()) {
        prop_assert_eq!(a + Ain::ZERO, a);
    }
}

// Property 3: a + (-a) has zero expected value, is symmetric, and doubles the width
proptest! {
    #[test]
    fn prop_additive_inverse_shape(a in arb_ain()) {
        let diff = a + a.negate();
        prop_assert_eq!(diff.expected(), 0.0);
        prop_assert_eq!(diff.lower(), -diff.upper());
        prop_assert!((diff.width() - 2.0 * a.width()).abs() <= TOLERANCE * (1.0 + a.width()));
    }
}

// Property 4: Negation is an involution
proptest! {
    #[test]
    fn prop_negation_involution(a in arb_ain()) {
        prop_assert_eq!(a.negate().negate(), a);
    }
}

// Property 5: Addition is commutative and associative
proptest! {
    #[test]
    fn prop_addition_commutative(a in arb_ain(), b in arb_ain()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn prop_addition_associative(a in arb_ain(), b in arb_ain(), c in arb_ain()) {
        let left = (a + b) + c;
        let right = a + (b + c);
        prop_assert!(close(&left, &right), "{:?} != {:?}", left, right);
    }
}

// Property 6: Scaling identities and composition
proptest! {
    #[test]
    fn prop_scaling_identities(a in arb_ain()) {
        prop_assert_eq!(a.scale(1.0).unwrap(), a);
        prop_assert_eq!(a.scale(0.0).unwrap(), Ain::ZERO);
    }

    #[test]
    fn prop_scaling_composes(a in arb_ain(), k1 in -10.0f64..10.0, k2 in -10.0f64..10.0) {
        let stepwise = a.scale(k1).unwrap().scale(k2).unwrap();
        let direct = a.scale(k1 * k2).unwrap();
        prop_assert!(close(&stepwise, &direct), "{:?} != {:?}", stepwise, direct);
    }
}

// Property 7: Multiplication is commutative and contains every corner product
proptest! {
    #[test]
    fn prop_multiplication_commutative(a in arb_ain(), b in arb_ain()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn prop_multiplication_hull(a in arb_ain(), b in arb_ain()) {
        let product = a * b;
        for x in [a.lower(), a.upper()] {
            for y in [b.lower(), b.upper()] {
                prop_assert!(product.contains(x * y));
            }
        }
    }
}

// Property 8: Zero-crossing divisors are always rejected
proptest! {
    #[test]
    fn prop_division_by_zero_rejected(a in arb_ain(), divisor in arb_zero_crossing()) {
        let result = a.divide(divisor);
        prop_assert_eq!(
            result,
            Err(AinError::DivisionByZeroInterval {
                lower: divisor.lower(),
                upper: divisor.upper(),
            })
        );
    }
}

// Property 9: Dividing by a degenerate interval matches scalar division
proptest! {
    #[test]
    fn prop_divide_by_point_matches_scalar(a in arb_ain(), k in 0.5f64..50.0) {
        let point = Ain::degenerate(k).unwrap();
        let by_interval = a.divide(point).unwrap();
        let by_scalar = a.divide_scalar(k).unwrap();
        prop_assert!(close(&by_interval, &by_scalar), "{:?} != {:?}", by_interval, by_scalar);
    }
}
