use log::{debug, trace};

use crate::error::Result;
use crate::expr::{Expr, is_same_variable, one, zero};
use crate::simplify::{make_exponentiation, make_product, make_sum};

/// Derivative of `expr` with respect to `variable`, built through the smart
/// constructors so the result is already reduced.
///
/// `variable` is normally an [`Expr::Variable`]; anything else matches no
/// variable and every derivative collapses to zero. Powers use the constant
/// exponent rule `d(u^n) = n * u^(n-1) * du` even when `n` is symbolic, so a
/// result is only meaningful when the exponent does not depend on `variable`.
pub fn deriv(expr: &Expr, variable: &Expr) -> Result<Expr> {
    let result = Differentiator { variable }.derive(expr)?;
    debug!(
        "d/d{variable} of {} nodes (depth {}) -> {} nodes",
        expr.size(),
        expr.depth(),
        result.size()
    );
    Ok(result)
}

/// Shorthand for [`deriv`] against the variable called `var`.
pub fn differentiate(var: &str, expr: &Expr) -> Result<Expr> {
    deriv(expr, &Expr::var(var))
}

struct Differentiator<'a> {
    variable: &'a Expr,
}

impl<'a> Differentiator<'a> {
    fn derive(&self, expr: &Expr) -> Result<Expr> {
        trace!("derive {}", expr.kind());
        match expr {
            Expr::Constant(_) => Ok(zero()),
            Expr::Variable(_) if is_same_variable(expr, self.variable) => Ok(one()),
            Expr::Variable(_) => Ok(zero()),
            Expr::Sum(a, b) => Ok(make_sum(self.derive(a)?, self.derive(b)?)),
            Expr::Product(a, b) => self.product_rule(a, b),
            Expr::Exponential(base, exp) => self.power_rule(base, exp),
        }
    }

    fn product_rule(&self, m1: &Expr, m2: &Expr) -> Result<Expr> {
        Ok(make_sum(
            make_product(m1.clone(), self.derive(m2)?),
            make_product(self.derive(m1)?, m2.clone()),
        ))
    }

    fn power_rule(&self, base: &Expr, exp: &Expr) -> Result<Expr> {
        let lowered = make_exponentiation(
            base.clone(),
            make_sum(exp.clone(), Expr::constant(-1)),
        )?;
        Ok(make_product(
            make_product(exp.clone(), lowered),
            self.derive(base)?,
        ))
    }
}
