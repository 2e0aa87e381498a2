use super::{dimension_type, join, projection, unit_params, EXPONENT_BOUND};
use crate::operators::ScalarOp;
use crate::system::UnitSystemSpec;
use std::fmt::{self, Write};

/// Name of the free type-level integer in scalar blocks
pub(crate) const SCALAR_PARAM: &str = "RHS";

/// One impl block per operator, scaling every exponent by the same `RHS`.
/// A root whose degree does not divide some exponent resolves to no impl.
pub fn emit(spec: &UnitSystemSpec, operators: &[ScalarOp], out: &mut String) -> fmt::Result {
    for op in operators {
        emit_block(spec, *op, out)?;
    }
    Ok(())
}

fn emit_block(spec: &UnitSystemSpec, op: ScalarOp, out: &mut String) -> fmt::Result {
    let params = unit_params(spec);
    let exponent_trait = op.exponent_trait();

    let outputs: Vec<String> = params
        .iter()
        .map(|param| projection(param, exponent_trait, SCALAR_PARAM))
        .collect();

    let mut all_params = params.clone();
    all_params.push(SCALAR_PARAM.to_string());

    writeln!(
        out,
        "impl<{}> {}<{}> for {}",
        join(&all_params),
        op.dimension_trait(),
        SCALAR_PARAM,
        dimension_type(spec, &params)
    )?;
    writeln!(out, "where")?;
    for param in &params {
        writeln!(
            out,
            "    {}: {} + {}<{}>,",
            param, EXPONENT_BOUND, exponent_trait, SCALAR_PARAM
        )?;
    }
    writeln!(out, "    {}: {},", SCALAR_PARAM, EXPONENT_BOUND)?;
    for output in &outputs {
        writeln!(out, "    {}: {},", output, EXPONENT_BOUND)?;
    }
    writeln!(out, "{{")?;
    writeln!(out, "    type Output = {};", dimension_type(spec, &outputs))?;
    writeln!(out, "}}")?;
    writeln!(out)
}
