use crate::ast::Span;
use crate::error::DimgenError;
use crate::expression::DimensionExpression;
use crate::limits::GeneratorLimits;
use crate::system::UnitSystemDefinition;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod definitions;
pub mod expressions;

#[derive(Parser)]
#[grammar = "src/parser/units.pest"]
pub struct UnitsParser;

/// Parse every unit system declared in a `.units` source
pub fn parse(
    content: &str,
    filename: Option<String>,
    limits: &GeneratorLimits,
) -> Result<Vec<UnitSystemDefinition>, DimgenError> {
    if content.len() > limits.max_definition_bytes {
        return Err(DimgenError::ResourceLimitExceeded {
            limit_name: "max_definition_bytes".to_string(),
            limit_value: format!("{} bytes", limits.max_definition_bytes),
            actual_value: format!("{} bytes", content.len()),
            suggestion: "Split the definitions into several files".to_string(),
        });
    }

    let filename = filename.unwrap_or_else(|| "<input>".to_string());
    let source_text: Arc<str> = Arc::from(content);

    let pairs = UnitsParser::parse(Rule::units_file, content)
        .map_err(|e| pest_error(e, &filename, source_text.clone()))?;

    let mut systems = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::units_file {
            for inner_pair in pair.into_inner() {
                if inner_pair.as_rule() == Rule::system {
                    systems.push(definitions::parse_system(
                        inner_pair,
                        &filename,
                        source_text.clone(),
                    )?);
                }
            }
        }
    }

    Ok(systems)
}

/// Parse a dimension expression such as `Meter * Kilogram / Second^2`
pub fn parse_dimension_expression(text: &str) -> Result<DimensionExpression, DimgenError> {
    let source_text: Arc<str> = Arc::from(text);
    let mut pairs = UnitsParser::parse(Rule::dim_expression, text)
        .map_err(|e| pest_error(e, "<expression>", source_text.clone()))?;

    let pair = pairs.next().ok_or_else(|| {
        DimgenError::parse(
            "empty dimension expression",
            Span::default(),
            "<expression>",
            source_text.clone(),
        )
    })?;

    expressions::parse_dim_expression(pair, source_text)
}

pub(crate) fn pest_error(
    e: pest::error::Error<Rule>,
    source_id: &str,
    source_text: Arc<str>,
) -> DimgenError {
    let (start, end) = match e.location {
        pest::error::InputLocation::Pos(pos) => (pos, pos),
        pest::error::InputLocation::Span((start, end)) => (start, end),
    };
    let (line, col) = match e.line_col {
        pest::error::LineColLocation::Pos((line, col)) => (line, col),
        pest::error::LineColLocation::Span((start_line, start_col), _) => (start_line, start_col),
    };

    DimgenError::parse(
        format!("{}", e.variant.message()),
        Span {
            start,
            end,
            line,
            col,
        },
        source_id,
        source_text,
    )
}
