//! Dimension expressions
//!
//! A product of powers of base units, e.g. `Kilogram * Meter / Second^2` or
//! `Centimeter^1/2`. Evaluating one against a unit system yields the
//! dimension vector the generated types would compute for the same
//! expression, or the error the consumer's compiler would report.

use crate::ast::Span;
use crate::dimension::DimensionVector;
use crate::error::DimgenError;
use crate::parser::parse_dimension_expression;
use crate::system::{UnitSystemSpec, UNITLESS_ALIAS};
use crate::DimgenResult;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimOperator {
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorBase {
    /// A base unit (or the dimensionless alias) by name
    Unit(String),
    /// The literal `1`
    One,
}

/// `base ^ (numerator / denominator)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimFactor {
    pub base: FactorBase,
    pub numerator: i32,
    pub denominator: i32,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionExpression {
    /// The first factor always carries `Multiply`
    pub factors: Vec<(DimOperator, DimFactor)>,
    pub source_text: Arc<str>,
}

impl DimensionExpression {
    pub fn evaluate(&self, spec: &UnitSystemSpec) -> DimgenResult<DimensionVector> {
        let mut result = spec.dimensionless();

        for (operator, factor) in &self.factors {
            let base = match &factor.base {
                FactorBase::One => spec.dimensionless(),
                FactorBase::Unit(name) if name == UNITLESS_ALIAS => spec.dimensionless(),
                FactorBase::Unit(name) => {
                    let position = spec.position_of(name).ok_or_else(|| {
                        DimgenError::parse_with_suggestion(
                            format!(
                                "unknown unit '{}' in system '{}'",
                                name,
                                spec.system_name()
                            ),
                            factor.span.clone(),
                            "<expression>",
                            self.source_text.clone(),
                            format!("Known units: {}", known_units(spec)),
                        )
                    })?;
                    DimensionVector::unit(spec.arity(), position, spec.allowed_root())?
                }
            };

            let powered = base
                .scalar_mul(factor.numerator)?
                .scalar_div(factor.denominator)?;

            result = match operator {
                DimOperator::Multiply => result.add(&powered)?,
                DimOperator::Divide => result.sub(&powered)?,
            };
        }

        Ok(result)
    }
}

fn known_units(spec: &UnitSystemSpec) -> String {
    spec.base_units()
        .iter()
        .map(|unit| unit.identifier.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and evaluate `text` against `spec`
pub fn evaluate_dimension(spec: &UnitSystemSpec, text: &str) -> DimgenResult<DimensionVector> {
    parse_dimension_expression(text)?.evaluate(spec)
}
