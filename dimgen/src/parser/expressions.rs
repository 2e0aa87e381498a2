use super::Rule;
use crate::ast::Span;
use crate::error::DimgenError;
use crate::expression::{DimFactor, DimOperator, DimensionExpression, FactorBase};
use pest::iterators::Pair;
use std::sync::Arc;

pub(crate) fn parse_dim_expression(
    pair: Pair<Rule>,
    source_text: Arc<str>,
) -> Result<DimensionExpression, DimgenError> {
    let mut factors = Vec::new();
    let mut operator = DimOperator::Multiply;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::dim_operator => {
                operator = if inner.as_str() == "/" {
                    DimOperator::Divide
                } else {
                    DimOperator::Multiply
                };
            }
            Rule::dim_factor => {
                factors.push((operator, parse_dim_factor(inner, &source_text)?));
            }
            _ => {}
        }
    }

    Ok(DimensionExpression {
        factors,
        source_text,
    })
}

fn parse_dim_factor(pair: Pair<Rule>, source_text: &Arc<str>) -> Result<DimFactor, DimgenError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut base = FactorBase::One;
    let mut numerator = 1;
    let mut denominator = 1;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::identifier => base = FactorBase::Unit(inner.as_str().to_string()),
            Rule::dim_one => base = FactorBase::One,
            Rule::dim_exponent => {
                for part in inner.into_inner() {
                    let value = parse_i32(&part, source_text)?;
                    match part.as_rule() {
                        Rule::integer => numerator = value,
                        Rule::positive => denominator = value,
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    Ok(DimFactor {
        base,
        numerator,
        denominator,
        span,
    })
}

fn parse_i32(pair: &Pair<Rule>, source_text: &Arc<str>) -> Result<i32, DimgenError> {
    pair.as_str().parse::<i32>().map_err(|_| {
        DimgenError::parse(
            format!("exponent '{}' is out of range", pair.as_str()),
            Span::from_pest_span(pair.as_span()),
            "<expression>",
            source_text.clone(),
        )
    })
}
