//! Dimension vectors and their algebra
//!
//! A dimension is an ordered tuple of signed exponents, one per base unit of
//! the owning system. The operations here mirror the trait implementations
//! the emitters generate; where the generated code simply has no impl for a
//! pairing, the runtime rendition returns a [`DimensionError`] instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reasons an operation on dimension vectors has no result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// `keep` over two different dimensions (adding meters to seconds)
    IncompatibleDimensions {
        left: DimensionVector,
        right: DimensionVector,
    },
    /// Vectors belong to systems with a different number of base units
    ArityMismatch { left: usize, right: usize },
    /// `scalar_div` by a divisor that leaves a remainder in some position
    NotDivisible {
        dimension: DimensionVector,
        divisor: i32,
        position: usize,
    },
    ZeroDivisor,
    /// Exponent left the range of `i32`
    Overflow,
    /// Unit position beyond the arity of the system
    PositionOutOfRange { position: usize, arity: usize },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::IncompatibleDimensions { left, right } => write!(
                f,
                "incompatible dimensions {} and {}: both operands must share one dimension",
                left, right
            ),
            DimensionError::ArityMismatch { left, right } => write!(
                f,
                "dimension vectors of arity {} and {} cannot be combined",
                left, right
            ),
            DimensionError::NotDivisible {
                dimension,
                divisor,
                position,
            } => write!(
                f,
                "exponent {} at position {} of {} is not divisible by {}",
                dimension.0[*position], position, dimension, divisor
            ),
            DimensionError::ZeroDivisor => write!(f, "root of degree zero"),
            DimensionError::Overflow => write!(f, "exponent overflow"),
            DimensionError::PositionOutOfRange { position, arity } => write!(
                f,
                "unit position {} out of range for a system of {} base units",
                position, arity
            ),
        }
    }
}

impl std::error::Error for DimensionError {}

/// Exponent of each base unit, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionVector(Vec<i32>);

impl DimensionVector {
    pub fn new(exponents: Vec<i32>) -> Self {
        Self(exponents)
    }

    /// The all-zero vector of a system with `arity` base units
    pub fn dimensionless(arity: usize) -> Self {
        Self(vec![0; arity])
    }

    /// One whole unit: `root` at `position`, zero elsewhere
    pub fn unit(arity: usize, position: usize, root: u32) -> Result<Self, DimensionError> {
        if position >= arity {
            return Err(DimensionError::PositionOutOfRange { position, arity });
        }
        let root = i32::try_from(root).map_err(|_| DimensionError::Overflow)?;
        let mut exponents = vec![0; arity];
        exponents[position] = root;
        Ok(Self(exponents))
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn exponents(&self) -> &[i32] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Option<i32> {
        self.0.get(position).copied()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// The shared dimension of two addends
    pub fn keep(&self, rhs: &Self) -> Result<Self, DimensionError> {
        self.check_arity(rhs)?;
        if self != rhs {
            return Err(DimensionError::IncompatibleDimensions {
                left: self.clone(),
                right: rhs.clone(),
            });
        }
        Ok(self.clone())
    }

    /// Dimension of a product: exponents add
    pub fn add(&self, rhs: &Self) -> Result<Self, DimensionError> {
        self.zip_with(rhs, i32::checked_add)
    }

    /// Dimension of a quotient: exponents subtract
    pub fn sub(&self, rhs: &Self) -> Result<Self, DimensionError> {
        self.zip_with(rhs, i32::checked_sub)
    }

    /// Dimension of `self` raised to the integer power `k`
    pub fn scalar_mul(&self, k: i32) -> Result<Self, DimensionError> {
        self.0
            .iter()
            .map(|&e| e.checked_mul(k).ok_or(DimensionError::Overflow))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Dimension of the `k`-th root of `self`, defined only when `k` divides
    /// every exponent
    pub fn scalar_div(&self, k: i32) -> Result<Self, DimensionError> {
        if k == 0 {
            return Err(DimensionError::ZeroDivisor);
        }
        let mut exponents = Vec::with_capacity(self.0.len());
        for (position, &e) in self.0.iter().enumerate() {
            if e.checked_rem(k).ok_or(DimensionError::Overflow)? != 0 {
                return Err(DimensionError::NotDivisible {
                    dimension: self.clone(),
                    divisor: k,
                    position,
                });
            }
            exponents.push(e.checked_div(k).ok_or(DimensionError::Overflow)?);
        }
        Ok(Self(exponents))
    }

    /// Dimension of the reciprocal `1 / self`
    pub fn recip(&self) -> Result<Self, DimensionError> {
        self.scalar_mul(-1)
    }

    fn check_arity(&self, rhs: &Self) -> Result<(), DimensionError> {
        if self.0.len() != rhs.0.len() {
            return Err(DimensionError::ArityMismatch {
                left: self.0.len(),
                right: rhs.0.len(),
            });
        }
        Ok(())
    }

    fn zip_with(
        &self,
        rhs: &Self,
        op: fn(i32, i32) -> Option<i32>,
    ) -> Result<Self, DimensionError> {
        self.check_arity(rhs)?;
        self.0
            .iter()
            .zip(&rhs.0)
            .map(|(&a, &b)| op(a, b).ok_or(DimensionError::Overflow))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<i32>> for DimensionVector {
    fn from(exponents: Vec<i32>) -> Self {
        Self(exponents)
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}
