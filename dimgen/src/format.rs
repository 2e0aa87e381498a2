//! Canonical display of dimensions
//!
//! These functions produce the exact text the generated `DimToString`
//! implementation returns for the same concrete exponents.

use crate::dimension::{DimensionError, DimensionVector};
use crate::system::UnitSystemSpec;

/// Contribution of one base unit to a dimension string.
///
/// The exponent is in allowed-root units: `root` means one whole unit and
/// prints as the bare symbol. Any other non-zero exponent prints as the
/// quotient `exponent / root` formatted as `f64`, so `4/2` prints `2` and
/// `1/2` prints `0.5`.
pub fn format_exponent(symbol: &str, exponent: i32, root: u32) -> String {
    if exponent == 0 {
        String::new()
    } else if i64::from(exponent) == i64::from(root) {
        symbol.to_string()
    } else {
        format!("{}^{}", symbol, f64::from(exponent) / f64::from(root))
    }
}

/// Full dimension string: contributions of every base unit, in declaration
/// order, with no separator
pub fn format_dimension(
    spec: &UnitSystemSpec,
    dimension: &DimensionVector,
) -> Result<String, DimensionError> {
    if dimension.arity() != spec.arity() {
        return Err(DimensionError::ArityMismatch {
            left: spec.arity(),
            right: dimension.arity(),
        });
    }

    Ok(spec
        .base_units()
        .iter()
        .zip(dimension.exponents())
        .map(|(unit, &exponent)| format_exponent(&unit.symbol, exponent, spec.allowed_root()))
        .collect())
}
