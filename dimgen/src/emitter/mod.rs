//! Emitters for each section of a generated unit-system file
//!
//! Every emitter appends its block of Rust source to a shared buffer and
//! never touches the filesystem. The orchestrator in [`crate::generator`]
//! calls them in a fixed order:
//!
//! 1. [`header`]: provenance, lint suppression, imports, dimension type
//! 2. [`combination`]: `KeepDim`/`AddDim`/`SubDim` over pairs of dimensions
//! 3. [`scalar`]: `MulDim`/`DivDim` by a type-level integer
//! 4. [`formatter`]: `DimToString`
//! 5. [`aliases`]: type aliases, then value constants

use crate::system::UnitSystemSpec;

pub mod aliases;
pub mod combination;
pub mod formatter;
pub mod header;
pub mod peano;
pub mod scalar;

/// Bound every exponent parameter carries in generated code
pub(crate) const EXPONENT_BOUND: &str = "Peano";

/// Appended to unit names for the left and right operands of a combination
pub(crate) const LHS_SUFFIX: &str = "1";
pub(crate) const RHS_SUFFIX: &str = "2";

/// The unit identifiers, used as the dimension type's parameter names
pub(crate) fn unit_params(spec: &UnitSystemSpec) -> Vec<String> {
    spec.base_units()
        .iter()
        .map(|unit| unit.identifier.clone())
        .collect()
}

/// Parameter names for one operand of a binary impl: `Meter1`, `Second1`, ...
pub(crate) fn suffixed_params(spec: &UnitSystemSpec, suffix: &str) -> Vec<String> {
    spec.base_units()
        .iter()
        .map(|unit| format!("{}{}", unit.identifier, suffix))
        .collect()
}

/// `SI<A, B, C>`
pub(crate) fn dimension_type<S: AsRef<str>>(spec: &UnitSystemSpec, args: &[S]) -> String {
    format!("{}<{}>", spec.system_name(), join(args))
}

pub(crate) fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `<Lhs as Trait<Rhs>>::Output`
pub(crate) fn projection(lhs: &str, exponent_trait: &str, rhs: &str) -> String {
    format!("<{} as {}<{}>>::Output", lhs, exponent_trait, rhs)
}
