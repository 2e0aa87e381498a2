use super::{
    dimension_type, join, projection, suffixed_params, EXPONENT_BOUND, LHS_SUFFIX, RHS_SUFFIX,
};
use crate::operators::CombinationOp;
use crate::system::UnitSystemSpec;
use std::fmt::{self, Write};

/// One generic impl block per operator, parameterized over both operands'
/// exponents. Position `i` of the output is `<L_i as Op<R_i>>::Output`; the
/// consumer's exponent traits decide which pairings exist, so `Keep` of two
/// different dimensions simply has no impl.
pub fn emit(spec: &UnitSystemSpec, operators: &[CombinationOp], out: &mut String) -> fmt::Result {
    for op in operators {
        emit_block(spec, *op, out)?;
    }
    Ok(())
}

fn emit_block(spec: &UnitSystemSpec, op: CombinationOp, out: &mut String) -> fmt::Result {
    let lhs = suffixed_params(spec, LHS_SUFFIX);
    let rhs = suffixed_params(spec, RHS_SUFFIX);
    let exponent_trait = op.exponent_trait();

    let outputs: Vec<String> = lhs
        .iter()
        .zip(&rhs)
        .map(|(l, r)| projection(l, exponent_trait, r))
        .collect();

    let all_params: Vec<&String> = lhs.iter().chain(&rhs).collect();

    writeln!(
        out,
        "impl<{}> {}<{}> for {}",
        join(&all_params),
        op.dimension_trait(),
        dimension_type(spec, &rhs),
        dimension_type(spec, &lhs)
    )?;
    writeln!(out, "where")?;
    for (l, r) in lhs.iter().zip(&rhs) {
        writeln!(out, "    {}: {} + {}<{}>,", l, EXPONENT_BOUND, exponent_trait, r)?;
    }
    for r in &rhs {
        writeln!(out, "    {}: {},", r, EXPONENT_BOUND)?;
    }
    for output in &outputs {
        writeln!(out, "    {}: {},", output, EXPONENT_BOUND)?;
    }
    writeln!(out, "{{")?;
    writeln!(out, "    type Output = {};", dimension_type(spec, &outputs))?;
    writeln!(out, "}}")?;
    writeln!(out)
}
