//! The operators the generated algebra implements
//!
//! Each operator pairs a runtime rule on [`DimensionVector`] with the names
//! of the consumer traits its generated impl block targets.

use crate::dimension::{DimensionError, DimensionVector};

/// Operators combining two full dimension vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinationOp {
    /// Addition and subtraction of quantities: both sides must agree
    Keep,
    /// Multiplication of quantities: exponents add
    Add,
    /// Division of quantities: exponents subtract
    Sub,
}

impl CombinationOp {
    /// Emission order of the combination blocks
    pub const ALL: [CombinationOp; 3] = [CombinationOp::Keep, CombinationOp::Add, CombinationOp::Sub];

    pub fn name(&self) -> &'static str {
        match self {
            CombinationOp::Keep => "keep",
            CombinationOp::Add => "add",
            CombinationOp::Sub => "sub",
        }
    }

    /// Consumer trait implemented on the dimension type
    pub fn dimension_trait(&self) -> &'static str {
        match self {
            CombinationOp::Keep => "KeepDim",
            CombinationOp::Add => "AddDim",
            CombinationOp::Sub => "SubDim",
        }
    }

    /// Consumer trait each exponent pair is resolved through
    pub fn exponent_trait(&self) -> &'static str {
        match self {
            CombinationOp::Keep => "KeepPeano",
            CombinationOp::Add => "AddPeano",
            CombinationOp::Sub => "SubPeano",
        }
    }

    pub fn apply(
        &self,
        lhs: &DimensionVector,
        rhs: &DimensionVector,
    ) -> Result<DimensionVector, DimensionError> {
        match self {
            CombinationOp::Keep => lhs.keep(rhs),
            CombinationOp::Add => lhs.add(rhs),
            CombinationOp::Sub => lhs.sub(rhs),
        }
    }
}

/// Operators scaling one dimension vector by a type-level integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarOp {
    /// Integer power of a quantity
    Mul,
    /// Integer root of a quantity
    Div,
}

impl ScalarOp {
    /// Emission order of the scalar blocks
    pub const ALL: [ScalarOp; 2] = [ScalarOp::Mul, ScalarOp::Div];

    pub fn name(&self) -> &'static str {
        match self {
            ScalarOp::Mul => "mul",
            ScalarOp::Div => "div",
        }
    }

    pub fn dimension_trait(&self) -> &'static str {
        match self {
            ScalarOp::Mul => "MulDim",
            ScalarOp::Div => "DivDim",
        }
    }

    pub fn exponent_trait(&self) -> &'static str {
        match self {
            ScalarOp::Mul => "MulPeano",
            ScalarOp::Div => "DivPeano",
        }
    }

    pub fn apply(&self, dimension: &DimensionVector, k: i32) -> Result<DimensionVector, DimensionError> {
        match self {
            ScalarOp::Mul => dimension.scalar_mul(k),
            ScalarOp::Div => dimension.scalar_div(k),
        }
    }
}
