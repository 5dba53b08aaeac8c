//! Expression tree definitions, literal construction, predicates and accessors.

use std::fmt;
use std::ops::{Add, Mul};

use crate::error::{CasError, Result};
use crate::simplify::{make_exponentiation, make_product, make_sum};

/// An arithmetic expression over integer constants and named variables.
///
/// Each compound node owns its children. Build `Sum`, `Product` and
/// `Exponential` nodes through [`make_sum`], [`make_product`] and
/// [`make_exponentiation`] (or the operator sugar below) so the tree stays in
/// reduced form; the variants are public for pattern matching.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Expr {
    Constant(i64),
    Variable(String),
    Sum(Box<Expr>, Box<Expr>),
    Product(Box<Expr>, Box<Expr>),
    Exponential(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn constant(value: i64) -> Self {
        Expr::Constant(value)
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Raise `self` to `exponent` through [`make_exponentiation`].
    pub fn pow(self, exponent: impl Into<Expr>) -> Result<Expr> {
        make_exponentiation(self, exponent.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Expr::Constant(_) => "constant",
            Expr::Variable(_) => "variable",
            Expr::Sum(..) => "sum",
            Expr::Product(..) => "product",
            Expr::Exponential(..) => "exponential",
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Expr::Variable(_))
    }

    pub fn is_sum(&self) -> bool {
        matches!(self, Expr::Sum(..))
    }

    pub fn is_product(&self) -> bool {
        matches!(self, Expr::Product(..))
    }

    pub fn is_exponentiation(&self) -> bool {
        matches!(self, Expr::Exponential(..))
    }

    pub fn as_variable(&self) -> Option<&str> {
        if let Expr::Variable(name) = self {
            Some(name)
        } else {
            None
        }
    }

    pub fn as_constant(&self) -> Option<i64> {
        if let Expr::Constant(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// Left operand of a sum.
    pub fn addend(&self) -> Result<&Expr> {
        match self {
            Expr::Sum(a, _) => Ok(a),
            other => Err(mismatch("sum", other)),
        }
    }

    /// Right operand of a sum.
    pub fn augend(&self) -> Result<&Expr> {
        match self {
            Expr::Sum(_, b) => Ok(b),
            other => Err(mismatch("sum", other)),
        }
    }

    pub fn multiplier(&self) -> Result<&Expr> {
        match self {
            Expr::Product(a, _) => Ok(a),
            other => Err(mismatch("product", other)),
        }
    }

    pub fn multiplicand(&self) -> Result<&Expr> {
        match self {
            Expr::Product(_, b) => Ok(b),
            other => Err(mismatch("product", other)),
        }
    }

    pub fn base(&self) -> Result<&Expr> {
        match self {
            Expr::Exponential(b, _) => Ok(b),
            other => Err(mismatch("exponential", other)),
        }
    }

    pub fn exponent(&self) -> Result<&Expr> {
        match self {
            Expr::Exponential(_, e) => Ok(e),
            other => Err(mismatch("exponential", other)),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable(_) => 1,
            Expr::Sum(a, b) | Expr::Product(a, b) | Expr::Exponential(a, b) => {
                1 + a.size() + b.size()
            }
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable(_) => 1,
            Expr::Sum(a, b) | Expr::Product(a, b) | Expr::Exponential(a, b) => {
                1 + a.depth().max(b.depth())
            }
        }
    }
}

fn mismatch(expected: &'static str, found: &Expr) -> CasError {
    CasError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

/// True iff both expressions are variables with the same name.
pub fn is_same_variable(v1: &Expr, v2: &Expr) -> bool {
    matches!((v1, v2), (Expr::Variable(a), Expr::Variable(b)) if a == b)
}

pub fn zero() -> Expr {
    Expr::Constant(0)
}

pub fn one() -> Expr {
    Expr::Constant(1)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::render(self))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Constant(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Constant(value.into())
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::var(name)
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Variable(name)
    }
}

impl<T: Into<Expr>> Add<T> for Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Expr {
        make_sum(self, rhs.into())
    }
}

impl<T: Into<Expr>> Mul<T> for Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Expr {
        make_product(self, rhs.into())
    }
}

impl Add<Expr> for i64 {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        make_sum(Expr::Constant(self), rhs)
    }
}

impl Mul<Expr> for i64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        make_product(Expr::Constant(self), rhs)
    }
}
