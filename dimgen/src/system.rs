use crate::ast::Span;
use crate::dimension::DimensionVector;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SCALAR_TYPE: &str = "f64";
pub const DEFAULT_IDENTITY_LITERAL: &str = "1.0";
pub const DEFAULT_UNITLESS_CONSTANT: &str = "one";
pub const DEFAULT_ALLOWED_ROOT: i64 = 1;

/// Name of the generated dimensionless alias
pub const UNITLESS_ALIAS: &str = "Unitless";

fn default_scalar_type() -> String {
    DEFAULT_SCALAR_TYPE.to_string()
}

fn default_identity_literal() -> String {
    DEFAULT_IDENTITY_LITERAL.to_string()
}

fn default_unitless_constant() -> String {
    DEFAULT_UNITLESS_CONSTANT.to_string()
}

fn default_allowed_root() -> i64 {
    DEFAULT_ALLOWED_ROOT
}

/// A named constant with an unevaluated value expression
///
/// Carried through validation untouched; the generator never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraConstant {
    pub name: String,
    pub expression: String,
}

/// A unit system as written by its author, before validation
///
/// The base units are given as three parallel lists, exactly as they appear
/// in a `.units` file. Nothing guarantees the lists agree in length until
/// the definition is validated into a [`UnitSystemSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSystemDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub units: Vec<String>,
    pub symbols: Vec<String>,
    pub constants: Vec<String>,
    #[serde(default = "default_scalar_type")]
    pub scalar_type: String,
    #[serde(default = "default_identity_literal")]
    pub identity_literal: String,
    #[serde(default = "default_unitless_constant")]
    pub unitless_constant: String,
    #[serde(default = "default_allowed_root")]
    pub allowed_root: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_constants: Vec<ExtraConstant>,
    #[serde(skip)]
    pub source: Option<String>,
    #[serde(skip)]
    pub span: Option<Span>,
}

impl UnitSystemDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: None,
            units: Vec::new(),
            symbols: Vec::new(),
            constants: Vec::new(),
            scalar_type: default_scalar_type(),
            identity_literal: default_identity_literal(),
            unitless_constant: default_unitless_constant(),
            allowed_root: DEFAULT_ALLOWED_ROOT,
            extra_constants: Vec::new(),
            source: None,
            span: None,
        }
    }

    pub fn with_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.units = units.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_constants<I, S>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constants = constants.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_scalar(
        mut self,
        scalar_type: impl Into<String>,
        identity_literal: impl Into<String>,
    ) -> Self {
        self.scalar_type = scalar_type.into();
        self.identity_literal = identity_literal.into();
        self
    }

    pub fn with_unitless_constant(mut self, name: impl Into<String>) -> Self {
        self.unitless_constant = name.into();
        self
    }

    pub fn with_allowed_root(mut self, root: i64) -> Self {
        self.allowed_root = root;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn add_extra_constant(
        mut self,
        name: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        self.extra_constants.push(ExtraConstant {
            name: name.into(),
            expression: expression.into(),
        });
        self
    }

    /// Where the generated file goes: the declared output, or the lowercased
    /// system name with an `.rs` extension
    pub fn output_target(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.rs", self.name.to_lowercase()))
    }
}

/// One base unit: its type name, its printed symbol and its constant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseUnitSpec {
    pub identifier: String,
    pub symbol: String,
    pub constant: String,
}

/// A validated unit system, ready for generation
///
/// Only obtainable through [`crate::Generator::validate`], so every value of
/// this type has at least one base unit, parallel attributes that agreed in
/// length, and names that are valid in generated Rust.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSystemSpec {
    system_name: String,
    output_target: String,
    base_units: Vec<BaseUnitSpec>,
    scalar_type: String,
    identity_literal: String,
    unitless_constant: String,
    allowed_root: u32,
    extra_constants: Vec<ExtraConstant>,
}

impl UnitSystemSpec {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        system_name: String,
        output_target: String,
        base_units: Vec<BaseUnitSpec>,
        scalar_type: String,
        identity_literal: String,
        unitless_constant: String,
        allowed_root: u32,
        extra_constants: Vec<ExtraConstant>,
    ) -> Self {
        Self {
            system_name,
            output_target,
            base_units,
            scalar_type,
            identity_literal,
            unitless_constant,
            allowed_root,
            extra_constants,
        }
    }

    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    pub fn output_target(&self) -> &str {
        &self.output_target
    }

    pub fn base_units(&self) -> &[BaseUnitSpec] {
        &self.base_units
    }

    pub fn scalar_type(&self) -> &str {
        &self.scalar_type
    }

    pub fn identity_literal(&self) -> &str {
        &self.identity_literal
    }

    pub fn unitless_constant(&self) -> &str {
        &self.unitless_constant
    }

    pub fn allowed_root(&self) -> u32 {
        self.allowed_root
    }

    pub fn extra_constants(&self) -> &[ExtraConstant] {
        &self.extra_constants
    }

    /// Number of exponents in every dimension vector of this system
    pub fn arity(&self) -> usize {
        self.base_units.len()
    }

    pub fn position_of(&self, identifier: &str) -> Option<usize> {
        self.base_units
            .iter()
            .position(|unit| unit.identifier == identifier)
    }

    pub fn dimensionless(&self) -> DimensionVector {
        DimensionVector::dimensionless(self.arity())
    }

    /// Dimension of one whole base unit, `None` for an unknown position
    pub fn unit_dimension(&self, position: usize) -> Option<DimensionVector> {
        DimensionVector::unit(self.arity(), position, self.allowed_root).ok()
    }
}
