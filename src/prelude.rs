//! Everything needed to build, differentiate and print expressions.

pub use crate::calculus::{deriv, differentiate};
pub use crate::error::{CasError, Result};
pub use crate::expr::{Expr, is_same_variable, one, zero};
pub use crate::format::render;
pub use crate::simplify::{make_exponentiation, make_product, make_sum, simplify, substitute};
