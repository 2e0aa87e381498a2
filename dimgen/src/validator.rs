use crate::emitter::{LHS_SUFFIX, RHS_SUFFIX};
use crate::system::{BaseUnitSpec, UnitSystemDefinition, UnitSystemSpec, UNITLESS_ALIAS};
use crate::{DimgenError, DimgenResult, GeneratorLimits};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Names the generated file already uses for its own items and imports.
/// A base unit with one of these names would shadow them.
const RESERVED_NAMES: &[&str] = &[
    "RHS",
    UNITLESS_ALIAS,
    "Zero",
    "Succ",
    "Pred",
    "Dim",
    "PhantomData",
    "Dimension",
    "Dimensionless",
    "DimToString",
    "KeepDim",
    "AddDim",
    "SubDim",
    "MulDim",
    "DivDim",
    "Peano",
    "KeepPeano",
    "AddPeano",
    "SubPeano",
    "MulPeano",
    "DivPeano",
    "ToInt",
    "String",
];

/// Primitive types a unit alias would shadow; the formatter casts with `as f64`
const PRIMITIVE_TYPES: &[&str] = &[
    "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64",
    "i128", "isize", "f32", "f64",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "try", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield",
];

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
    })
}

fn type_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(::)?[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
            .expect("type path pattern is valid")
    })
}

fn is_identifier(name: &str) -> bool {
    name != "_" && identifier_pattern().is_match(name) && !RUST_KEYWORDS.contains(&name)
}

/// Type names the generated file relies on besides its own items
fn is_reserved_type_name(name: &str, scalar_type: &str) -> bool {
    RESERVED_NAMES.contains(&name)
        || PRIMITIVE_TYPES.contains(&name)
        || scalar_type.rsplit("::").next() == Some(name)
}

/// Checks a [`UnitSystemDefinition`] and turns it into a [`UnitSystemSpec`]
///
/// Validation never touches the filesystem, so a rejected definition leaves
/// no trace.
#[derive(Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(
        &self,
        definition: &UnitSystemDefinition,
        limits: &GeneratorLimits,
    ) -> DimgenResult<UnitSystemSpec> {
        // Phase 1: the parallel base-unit lists must agree
        self.validate_list_lengths(definition)?;

        // Phase 2: stay within the configured limits
        self.validate_limits(definition, limits)?;

        // Phase 3: names must be usable in generated Rust
        let mut errors = Vec::new();
        self.validate_system_fields(definition, &mut errors);
        self.validate_unit_names(definition, &mut errors);
        if let Some(error) = DimgenError::collect(errors) {
            return Err(error);
        }

        let allowed_root = u32::try_from(definition.allowed_root).map_err(|_| {
            DimgenError::Specification(format!(
                "allowed root {} of system '{}' is out of range",
                definition.allowed_root, definition.name
            ))
        })?;

        let base_units = definition
            .units
            .iter()
            .zip(&definition.symbols)
            .zip(&definition.constants)
            .map(|((identifier, symbol), constant)| BaseUnitSpec {
                identifier: identifier.clone(),
                symbol: symbol.clone(),
                constant: constant.clone(),
            })
            .collect();

        Ok(UnitSystemSpec::new(
            definition.name.clone(),
            definition.output_target(),
            base_units,
            definition.scalar_type.clone(),
            definition.identity_literal.trim().to_string(),
            definition.unitless_constant.clone(),
            allowed_root,
            definition.extra_constants.clone(),
        ))
    }

    fn validate_list_lengths(&self, definition: &UnitSystemDefinition) -> DimgenResult<()> {
        let units = definition.units.len();
        let symbols = definition.symbols.len();
        let constants = definition.constants.len();
        if units != symbols || units != constants {
            return Err(DimgenError::Specification(format!(
                "system '{}' declares {} units, {} symbols and {} constants; \
                 every base unit needs exactly one of each",
                definition.name, units, symbols, constants
            )));
        }
        if units == 0 {
            return Err(DimgenError::Specification(format!(
                "system '{}' declares no base units",
                definition.name
            )));
        }
        Ok(())
    }

    fn validate_limits(
        &self,
        definition: &UnitSystemDefinition,
        limits: &GeneratorLimits,
    ) -> DimgenResult<()> {
        if definition.units.len() > limits.max_base_units {
            return Err(DimgenError::ResourceLimitExceeded {
                limit_name: "max_base_units".to_string(),
                limit_value: limits.max_base_units.to_string(),
                actual_value: definition.units.len().to_string(),
                suggestion: format!(
                    "Split system '{}' or raise max_base_units",
                    definition.name
                ),
            });
        }
        if definition.allowed_root > i64::from(limits.max_allowed_root) {
            return Err(DimgenError::ResourceLimitExceeded {
                limit_name: "max_allowed_root".to_string(),
                limit_value: limits.max_allowed_root.to_string(),
                actual_value: definition.allowed_root.to_string(),
                suggestion: "Deep successor chains exhaust the consumer's recursion limit; \
                             use a smaller root"
                    .to_string(),
            });
        }
        Ok(())
    }

    fn validate_system_fields(
        &self,
        definition: &UnitSystemDefinition,
        errors: &mut Vec<DimgenError>,
    ) {
        if !is_identifier(&definition.name) {
            errors.push(DimgenError::Specification(format!(
                "system name '{}' is not a valid Rust identifier",
                definition.name
            )));
        } else if is_reserved_type_name(&definition.name, &definition.scalar_type) {
            errors.push(DimgenError::Specification(format!(
                "system name '{}' is reserved by the generated code",
                definition.name
            )));
        } else if let Some(unit) = definition.units.iter().find(|unit| {
            [LHS_SUFFIX, RHS_SUFFIX]
                .iter()
                .any(|suffix| definition.name == format!("{}{}", unit, suffix))
        }) {
            errors.push(DimgenError::Specification(format!(
                "system name '{}' clashes with a type parameter generated for unit '{}'",
                definition.name, unit
            )));
        }

        if definition.allowed_root < 1 {
            errors.push(DimgenError::Specification(format!(
                "allowed root of system '{}' must be at least 1, got {}",
                definition.name, definition.allowed_root
            )));
        }

        if !type_path_pattern().is_match(&definition.scalar_type) {
            errors.push(DimgenError::Specification(format!(
                "scalar type '{}' of system '{}' is not a type path",
                definition.scalar_type, definition.name
            )));
        }

        if definition.identity_literal.trim().is_empty() {
            errors.push(DimgenError::Specification(format!(
                "system '{}' has an empty identity literal",
                definition.name
            )));
        }

        if !is_identifier(&definition.unitless_constant) {
            errors.push(DimgenError::Specification(format!(
                "unitless constant '{}' is not a valid Rust identifier",
                definition.unitless_constant
            )));
        }
    }

    fn validate_unit_names(&self, definition: &UnitSystemDefinition, errors: &mut Vec<DimgenError>) {
        let mut seen_units = HashSet::new();
        for unit in &definition.units {
            if !is_identifier(unit) {
                errors.push(DimgenError::Specification(format!(
                    "unit '{}' is not a valid Rust identifier",
                    unit
                )));
            } else if is_reserved_type_name(unit, &definition.scalar_type) || *unit == definition.name
            {
                errors.push(DimgenError::Specification(format!(
                    "unit name '{}' is reserved by the generated code",
                    unit
                )));
            }
            if !seen_units.insert(unit.as_str()) {
                errors.push(DimgenError::Specification(format!(
                    "unit '{}' is declared more than once in system '{}'",
                    unit, definition.name
                )));
            }
        }

        for symbol in &definition.symbols {
            if symbol.chars().any(char::is_control) {
                errors.push(DimgenError::Specification(format!(
                    "symbol {:?} of system '{}' contains a control character",
                    symbol, definition.name
                )));
            }
        }

        let mut seen_constants = HashSet::new();
        seen_constants.insert(definition.unitless_constant.as_str());
        for constant in &definition.constants {
            if !is_identifier(constant) {
                errors.push(DimgenError::Specification(format!(
                    "constant '{}' is not a valid Rust identifier",
                    constant
                )));
            }
            if !seen_constants.insert(constant.as_str()) {
                errors.push(DimgenError::Specification(format!(
                    "constant '{}' is declared more than once in system '{}'",
                    constant, definition.name
                )));
            }
        }
    }
}
