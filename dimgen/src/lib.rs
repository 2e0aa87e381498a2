//! # dimgen
//!
//! **Dimensional analysis, checked by the compiler**
//!
//! dimgen compiles a description of a system of physical units (SI, CGS, ...)
//! into Rust source that encodes every physical dimension as a vector of
//! type-level integer exponents. Code built on the generated types fails to
//! compile when it adds meters to seconds, and multiplying meters by meters
//! yields square meters with no runtime cost.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dimgen::{parse, Generator, DimgenResult};
//!
//! fn main() -> DimgenResult<()> {
//!     let definitions = parse(r#"
//! system MS
//! units     Meter, Second
//! symbols   m, s
//! constants meter, second
//!     "#, Some("ms.units".to_string()), &Default::default())?;
//!
//!     let generator = Generator::new();
//!     let source = generator.generate(&definitions[0])?;
//!     assert!(source.contains("pub type Meter = MS<Succ<Zero>, Zero>;"));
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Unit systems
//! A unit system is an ordered list of base units. The order fixes the
//! position of each unit's exponent in every dimension vector.
//!
//! ### Dimension vectors
//! One signed exponent per base unit. `[1, -1]` over `(Meter, Second)` is a
//! velocity. The all-zero vector is dimensionless.
//!
//! ### Allowed root
//! Systems that need square roots of units encode one whole unit as the
//! exponent `root` instead of `1`, so `Centimeter^1/2` stays integral.

pub mod ast;
pub mod catalog;
pub mod dimension;
pub mod emitter;
pub mod error;
pub mod expression;
pub mod format;
pub mod generator;
pub mod limits;
pub mod operators;
pub mod parser;
pub mod system;
pub mod validator;

pub use ast::Span;
pub use dimension::{DimensionError, DimensionVector};
pub use error::DimgenError;
pub use expression::evaluate_dimension;
pub use format::{format_dimension, format_exponent};
pub use generator::{Generator, GeneratorOptions};
pub use limits::GeneratorLimits;
pub use operators::{CombinationOp, ScalarOp};
pub use parser::{parse, parse_dimension_expression};
pub use system::{BaseUnitSpec, ExtraConstant, UnitSystemDefinition, UnitSystemSpec};
pub use validator::Validator;

/// Result type for dimgen operations
pub type DimgenResult<T> = Result<T, DimgenError>;

#[cfg(test)]
mod tests;
