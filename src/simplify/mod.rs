//! Simplifying constructors, canonicalization, and substitution.

mod rules;
mod substitute;

pub use rules::{make_exponentiation, make_product, make_sum, simplify};
pub use substitute::substitute;
