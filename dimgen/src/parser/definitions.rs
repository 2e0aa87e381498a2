use super::Rule;
use crate::ast::Span;
use crate::error::DimgenError;
use crate::system::{ExtraConstant, UnitSystemDefinition};
use pest::iterators::Pair;
use std::collections::HashSet;
use std::sync::Arc;

pub(crate) fn parse_system(
    pair: Pair<Rule>,
    filename: &str,
    source_text: Arc<str>,
) -> Result<UnitSystemDefinition, DimgenError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut definition: Option<UnitSystemDefinition> = None;
    let mut seen = HashSet::new();

    for item in pair.into_inner() {
        let rule = item.as_rule();
        let repeatable = matches!(rule, Rule::system_decl | Rule::extra_decl);

        if !repeatable && !seen.insert(rule) {
            return Err(DimgenError::parse_with_suggestion(
                format!("duplicate '{}' declaration", directive_name(rule)),
                Span::from_pest_span(item.as_span()),
                filename,
                source_text,
                "Declare each directive once per system; only 'extra' may repeat",
            ));
        }

        apply_item(&mut definition, item, filename, &source_text)?;
    }

    let definition = definition.ok_or_else(|| {
        DimgenError::parse(
            "system without a name",
            span.clone(),
            filename,
            source_text.clone(),
        )
    })?;

    Ok(definition
        .with_source(filename.to_string())
        .with_span(span))
}

fn apply_item(
    definition: &mut Option<UnitSystemDefinition>,
    item: Pair<Rule>,
    filename: &str,
    source_text: &Arc<str>,
) -> Result<(), DimgenError> {
    let rule = item.as_rule();
    let span = Span::from_pest_span(item.as_span());

    if rule == Rule::system_decl {
        let name = first_of(item, Rule::identifier)
            .map(|p| p.as_str().to_string())
            .unwrap_or_default();
        *definition = Some(UnitSystemDefinition::new(name));
        return Ok(());
    }

    let Some(system) = definition.as_mut() else {
        return Err(DimgenError::parse(
            "directive before 'system'",
            span,
            filename,
            source_text.clone(),
        ));
    };

    match rule {
        Rule::output_decl => {
            if let Some(string) = first_of(item, Rule::string) {
                system.output = Some(unquote(string));
            }
        }
        Rule::scalar_decl => {
            for inner in item.into_inner() {
                match inner.as_rule() {
                    Rule::scalar_type => system.scalar_type = inner.as_str().to_string(),
                    Rule::rest_of_line => {
                        system.identity_literal = inner.as_str().trim().to_string()
                    }
                    _ => {}
                }
            }
        }
        Rule::unitless_decl => {
            if let Some(identifier) = first_of(item, Rule::identifier) {
                system.unitless_constant = identifier.as_str().to_string();
            }
        }
        Rule::root_decl => {
            if let Some(integer) = first_of(item, Rule::integer) {
                system.allowed_root = integer.as_str().parse::<i64>().map_err(|_| {
                    DimgenError::parse(
                        format!("root '{}' is not a representable integer", integer.as_str()),
                        span.clone(),
                        filename,
                        source_text.clone(),
                    )
                })?;
            }
        }
        Rule::units_decl => system.units = identifier_list(item),
        Rule::symbols_decl => {
            system.symbols = first_of(item, Rule::symbol_list)
                .map(|list| list.into_inner().map(parse_symbol).collect())
                .unwrap_or_default();
        }
        Rule::constants_decl => system.constants = identifier_list(item),
        Rule::extra_decl => {
            let mut name = String::new();
            let mut expression = String::new();
            for inner in item.into_inner() {
                match inner.as_rule() {
                    Rule::identifier => name = inner.as_str().to_string(),
                    Rule::rest_of_line => expression = inner.as_str().trim().to_string(),
                    _ => {}
                }
            }
            system.extra_constants.push(ExtraConstant { name, expression });
        }
        _ => {}
    }

    Ok(())
}

fn directive_name(rule: Rule) -> &'static str {
    match rule {
        Rule::output_decl => "output",
        Rule::scalar_decl => "scalar",
        Rule::unitless_decl => "unitless",
        Rule::root_decl => "root",
        Rule::units_decl => "units",
        Rule::symbols_decl => "symbols",
        Rule::constants_decl => "constants",
        Rule::extra_decl => "extra",
        _ => "system",
    }
}

fn first_of(pair: Pair<Rule>, rule: Rule) -> Option<Pair<Rule>> {
    pair.into_inner().find(|inner| inner.as_rule() == rule)
}

fn identifier_list(item: Pair<Rule>) -> Vec<String> {
    first_of(item, Rule::identifier_list)
        .map(|list| {
            list.into_inner()
                .filter(|p| p.as_rule() == Rule::identifier)
                .map(|p| p.as_str().to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn parse_symbol(pair: Pair<Rule>) -> String {
    match pair.into_inner().next() {
        Some(inner) if inner.as_rule() == Rule::string => unquote(inner),
        Some(inner) => inner.as_str().to_string(),
        None => String::new(),
    }
}

fn unquote(string: Pair<Rule>) -> String {
    let raw = string
        .into_inner()
        .next()
        .map(|inner| inner.as_str())
        .unwrap_or_default();

    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some(other) => result.push(other),
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }
    result
}
