use super::dimension_type;
use super::peano::peano_type;
use crate::system::{UnitSystemSpec, UNITLESS_ALIAS};
use std::fmt::{self, Write};

/// The dimensionless alias with its marker, then one alias per base unit
/// holding `allowed_root` at its own position.
pub fn emit_aliases(spec: &UnitSystemSpec, out: &mut String) -> fmt::Result {
    let zeros = vec![peano_type(0); spec.arity()];
    writeln!(
        out,
        "pub type {} = {};",
        UNITLESS_ALIAS,
        dimension_type(spec, &zeros)
    )?;
    writeln!(out, "impl Dimensionless for {} {{}}", UNITLESS_ALIAS)?;
    writeln!(out)?;

    let whole_unit = peano_type(i64::from(spec.allowed_root()));
    for (position, unit) in spec.base_units().iter().enumerate() {
        let mut exponents = zeros.clone();
        exponents[position] = whole_unit.clone();
        writeln!(
            out,
            "pub type {} = {};",
            unit.identifier,
            dimension_type(spec, &exponents)
        )?;
    }
    writeln!(out)
}

/// One constant per alias, each the identity literal of the scalar type
pub fn emit_constants(spec: &UnitSystemSpec, out: &mut String) -> fmt::Result {
    emit_constant(spec, spec.unitless_constant(), UNITLESS_ALIAS, out)?;
    for unit in spec.base_units() {
        emit_constant(spec, &unit.constant, &unit.identifier, out)?;
    }
    Ok(())
}

fn emit_constant(spec: &UnitSystemSpec, name: &str, alias: &str, out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "pub const {}: Dim<{}, {}> = Dim({}, PhantomData);",
        name,
        alias,
        spec.scalar_type(),
        spec.identity_literal()
    )
}
