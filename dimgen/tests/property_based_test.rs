use dimgen::{format_exponent, DimensionError, DimensionVector};
use proptest::prelude::*;

fn vectors(arity: usize) -> impl Strategy<Value = DimensionVector> {
    prop::collection::vec(-1000i32..1000, arity).prop_map(DimensionVector::new)
}

fn vector_pair() -> impl Strategy<Value = (DimensionVector, DimensionVector)> {
    (1usize..8).prop_flat_map(|arity| (vectors(arity), vectors(arity)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_keep_is_identity_on_equal_dimensions(d in (1usize..8).prop_flat_map(vectors)) {
        prop_assert_eq!(d.keep(&d).unwrap(), d);
    }

    #[test]
    fn prop_keep_rejects_unequal_dimensions((a, b) in vector_pair()) {
        prop_assume!(a != b);
        let is_incompatible = matches!(
            a.keep(&b),
            Err(DimensionError::IncompatibleDimensions { .. })
        );
        prop_assert!(is_incompatible);
    }

    #[test]
    fn prop_add_is_elementwise_and_commutative((a, b) in vector_pair()) {
        let sum = a.add(&b).unwrap();
        prop_assert_eq!(&sum, &b.add(&a).unwrap());
        for i in 0..a.arity() {
            prop_assert_eq!(sum.exponents()[i], a.exponents()[i] + b.exponents()[i]);
        }
    }

    #[test]
    fn prop_sub_is_elementwise((a, b) in vector_pair()) {
        let difference = a.sub(&b).unwrap();
        for i in 0..a.arity() {
            prop_assert_eq!(difference.exponents()[i], a.exponents()[i] - b.exponents()[i]);
        }
        prop_assert!(a.sub(&a).unwrap().is_dimensionless());
    }

    #[test]
    fn prop_sub_undoes_add((a, b) in vector_pair()) {
        prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }

    #[test]
    fn prop_scalar_mul_scales_every_position(
        d in (1usize..8).prop_flat_map(vectors),
        k in -50i32..50,
    ) {
        let scaled = d.scalar_mul(k).unwrap();
        for i in 0..d.arity() {
            prop_assert_eq!(scaled.exponents()[i], d.exponents()[i] * k);
        }
    }

    #[test]
    fn prop_scalar_div_inverts_scalar_mul(
        d in (1usize..8).prop_flat_map(vectors),
        k in 1i32..50,
    ) {
        prop_assert_eq!(d.scalar_mul(k).unwrap().scalar_div(k).unwrap(), d);
    }

    #[test]
    fn prop_scalar_div_defined_only_when_divisible(
        d in (1usize..8).prop_flat_map(vectors),
        k in 2i32..10,
    ) {
        let divisible = d.exponents().iter().all(|e| e % k == 0);
        match d.scalar_div(k) {
            Ok(root) => {
                prop_assert!(divisible);
                for i in 0..d.arity() {
                    prop_assert_eq!(root.exponents()[i], d.exponents()[i] / k);
                }
            }
            Err(DimensionError::NotDivisible { position, .. }) => {
                prop_assert!(!divisible);
                prop_assert!(d.exponents()[position] % k != 0);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn prop_format_whole_multiples_of_root(
        multiple in -20i32..20,
        root in 1u32..8,
    ) {
        prop_assume!(multiple != 0 && multiple != 1);
        let exponent = multiple * root as i32;
        prop_assert_eq!(
            format_exponent("x", exponent, root),
            format!("x^{}", multiple)
        );
    }
}
