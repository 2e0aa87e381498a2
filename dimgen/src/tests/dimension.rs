use crate::dimension::{DimensionError, DimensionVector};
use crate::operators::{CombinationOp, ScalarOp};

fn dim(exponents: &[i32]) -> DimensionVector {
    DimensionVector::new(exponents.to_vec())
}

#[test]
fn test_keep_same_dimension() {
    let velocity = dim(&[1, -1]);
    assert_eq!(velocity.keep(&velocity).unwrap(), velocity);
}

#[test]
fn test_keep_rejects_different_dimensions() {
    let err = dim(&[1, 0]).keep(&dim(&[0, 1])).unwrap_err();
    assert_eq!(
        err,
        DimensionError::IncompatibleDimensions {
            left: dim(&[1, 0]),
            right: dim(&[0, 1]),
        }
    );
}

#[test]
fn test_keep_is_exact_with_root_encoding() {
    // Half a centimeter and a whole centimeter in a root-2 system
    let err = dim(&[1]).keep(&dim(&[2])).unwrap_err();
    assert!(matches!(err, DimensionError::IncompatibleDimensions { .. }));
}

#[test]
fn test_add_models_multiplication() {
    let meter = dim(&[1, 0]);
    let per_second = dim(&[0, -1]);
    assert_eq!(meter.add(&per_second).unwrap(), dim(&[1, -1]));
    assert_eq!(per_second.add(&meter).unwrap(), dim(&[1, -1]));
}

#[test]
fn test_sub_models_division() {
    let meter = dim(&[1, 0]);
    let second = dim(&[0, 1]);
    assert_eq!(meter.sub(&second).unwrap(), dim(&[1, -1]));
    assert_eq!(second.sub(&meter).unwrap(), dim(&[-1, 1]));
}

#[test]
fn test_arity_mismatch() {
    let err = dim(&[1, 0]).add(&dim(&[1])).unwrap_err();
    assert_eq!(err, DimensionError::ArityMismatch { left: 2, right: 1 });
    assert!(dim(&[1]).keep(&dim(&[1, 0])).is_err());
}

#[test]
fn test_scalar_mul_raises_to_power() {
    assert_eq!(dim(&[1, -2, 0]).scalar_mul(3).unwrap(), dim(&[3, -6, 0]));
    assert_eq!(dim(&[1, -2]).scalar_mul(0).unwrap(), dim(&[0, 0]));
}

#[test]
fn test_scalar_div_requires_divisibility() {
    assert_eq!(dim(&[4, -2, 0]).scalar_div(2).unwrap(), dim(&[2, -1, 0]));

    let err = dim(&[4, 3]).scalar_div(2).unwrap_err();
    assert_eq!(
        err,
        DimensionError::NotDivisible {
            dimension: dim(&[4, 3]),
            divisor: 2,
            position: 1,
        }
    );
}

#[test]
fn test_scalar_div_by_zero() {
    assert_eq!(
        dim(&[2]).scalar_div(0).unwrap_err(),
        DimensionError::ZeroDivisor
    );
}

#[test]
fn test_overflow_is_reported() {
    assert_eq!(
        dim(&[i32::MAX]).add(&dim(&[1])).unwrap_err(),
        DimensionError::Overflow
    );
    assert_eq!(
        dim(&[i32::MAX]).scalar_mul(2).unwrap_err(),
        DimensionError::Overflow
    );
}

#[test]
fn test_recip_negates() {
    assert_eq!(dim(&[1, -1, 0]).recip().unwrap(), dim(&[-1, 1, 0]));
}

#[test]
fn test_unit_and_dimensionless_constructors() {
    assert_eq!(DimensionVector::dimensionless(3), dim(&[0, 0, 0]));
    assert!(DimensionVector::dimensionless(3).is_dimensionless());
    assert_eq!(DimensionVector::unit(3, 1, 2).unwrap(), dim(&[0, 2, 0]));
    assert_eq!(
        DimensionVector::unit(2, 2, 1).unwrap_err(),
        DimensionError::PositionOutOfRange {
            position: 2,
            arity: 2
        }
    );
}

#[test]
fn test_operators_apply_matches_methods() {
    let a = dim(&[2, -1]);
    let b = dim(&[1, 1]);
    assert_eq!(CombinationOp::Add.apply(&a, &b).unwrap(), dim(&[3, 0]));
    assert_eq!(CombinationOp::Sub.apply(&a, &b).unwrap(), dim(&[1, -2]));
    assert!(CombinationOp::Keep.apply(&a, &b).is_err());
    assert_eq!(ScalarOp::Mul.apply(&a, 2).unwrap(), dim(&[4, -2]));
    assert!(ScalarOp::Div.apply(&a, 2).is_err());
}

#[test]
fn test_display() {
    assert_eq!(dim(&[1, -1, 0]).to_string(), "[1, -1, 0]");
    assert_eq!(dim(&[]).to_string(), "[]");
}

#[test]
fn test_serializes_as_plain_list() {
    let json = serde_json::to_string(&dim(&[1, -2])).unwrap();
    assert_eq!(json, "[1,-2]");
    let back: DimensionVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dim(&[1, -2]));
}
