//! Dimension-generic Euclidean vector algebra.
//!
//! # Design
//!
//! `Vector` is an immutable value type: every operation returns a new vector
//! and never mutates its operands.  The dimension is fixed per value but not
//! per type — the same algebra serves 2-D visualization runs and higher-
//! dimensional embeddings without a type parameter.
//!
//! Binary operations assume both operands have equal dimension.  This is an
//! unchecked precondition (guarded by `debug_assert!` only): the checked
//! boundary is the simulation engine, which rejects ragged coordinate tables
//! at construction time.

use crate::rng::{DirectionSource, SimRng};

/// An ordered sequence of `f64` components of fixed dimension.
///
/// Serializes as a bare array (`[7.0, 4.0]`) with the `serde` feature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Wrap an owned component list.
    #[inline]
    pub fn new(components: Vec<f64>) -> Self {
        Vector(components)
    }

    /// The vector of the given dimension with every component 0.
    pub fn zero(dim: usize) -> Self {
        Vector(vec![0.0; dim])
    }

    /// A vector with each component drawn uniformly from [-0.5, 0.5).
    ///
    /// Used only as the symmetry-breaking fallback for coincident nodes at
    /// the origin; see [`DirectionSource`].
    pub fn random(dim: usize, rng: &mut SimRng) -> Self {
        Vector((0..dim).map(|_| rng.gen_range(-0.5..0.5)).collect())
    }

    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Borrow the components as a slice.
    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// `true` iff every component equals exactly 0.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Vector) -> Vector {
        debug_assert_eq!(self.dim(), other.dim());
        Vector(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Element-wise difference (`self - other`).
    pub fn diff(&self, other: &Vector) -> Vector {
        debug_assert_eq!(self.dim(), other.dim());
        Vector(self.0.iter().zip(&other.0).map(|(a, b)| a - b).collect())
    }

    /// Element-wise multiply by a scalar (which may be zero or negative).
    pub fn scale(&self, factor: f64) -> Vector {
        Vector(self.0.iter().map(|c| c * factor).collect())
    }

    /// Euclidean norm.  Always ≥ 0; exactly 0 iff this is the zero vector.
    pub fn magnitude(&self) -> f64 {
        self.0.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Euclidean distance to `other`.  Symmetric.
    #[inline]
    pub fn distance(&self, other: &Vector) -> f64 {
        self.diff(other).magnitude()
    }

    /// Unit vector pointing from `from` toward `self`.
    ///
    /// Three cases, in precedence order:
    ///
    /// 1. Both points are the origin → a random unit vector from the injected
    ///    [`DirectionSource`].  Two coincident nodes at the origin would
    ///    otherwise never separate.
    /// 2. The points coincide elsewhere → the zero vector.  Coincident
    ///    non-origin points have no well-defined direction and exert no
    ///    directional force.
    /// 3. Otherwise → `self - from`, normalized to unit magnitude.
    ///
    /// Case 2 also guards the normalization: the magnitude in case 3 is
    /// always strictly positive.
    pub fn direction_from<D: DirectionSource>(&self, from: &Vector, directions: &mut D) -> Vector {
        debug_assert_eq!(self.dim(), from.dim());
        if self.is_zero() && from.is_zero() {
            directions.unit_direction(self.dim())
        } else if self == from {
            Vector::zero(self.dim())
        } else {
            let d = self.diff(from);
            let mag = d.magnitude();
            d.scale(1.0 / mag)
        }
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(components: Vec<f64>) -> Self {
        Vector(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    #[inline]
    fn from(components: [f64; N]) -> Self {
        Vector(components.to_vec())
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f64;
    #[inline]
    fn index(&self, k: usize) -> &f64 {
        &self.0[k]
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (k, c) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:.4}")?;
        }
        write!(f, "]")
    }
}
