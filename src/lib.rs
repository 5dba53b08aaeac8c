//! Symbolic expression trees over integer constants and named variables, with
//! simplifying constructors and rule-based differentiation.

pub mod calculus;
pub mod error;
pub mod expr;
pub mod format;
pub mod prelude;
pub mod simplify;

pub use calculus::{deriv, differentiate};
pub use error::{CasError, Result};
pub use expr::{Expr, is_same_variable, one, zero};
pub use format::render;
pub use simplify::{make_exponentiation, make_product, make_sum, simplify, substitute};
