use crate::error::Result;
use crate::expr::Expr;
use crate::simplify::{make_exponentiation, make_product, make_sum};

/// Substitute variable `var` with `replacement` throughout `expr`, reducing
/// each rebuilt node on the way up.
pub fn substitute(expr: &Expr, var: &str, replacement: &Expr) -> Result<Expr> {
    Ok(match expr {
        Expr::Variable(name) if name == var => replacement.clone(),
        Expr::Sum(a, b) => make_sum(
            substitute(a, var, replacement)?,
            substitute(b, var, replacement)?,
        ),
        Expr::Product(a, b) => make_product(
            substitute(a, var, replacement)?,
            substitute(b, var, replacement)?,
        ),
        Expr::Exponential(a, b) => make_exponentiation(
            substitute(a, var, replacement)?,
            substitute(b, var, replacement)?,
        )?,
        _ => expr.clone(),
    })
}
