use log::debug;

use crate::error::{CasError, Result};
use crate::expr::{Expr, one, zero};

/// Rebuild `expr` bottom-up through the smart constructors.
///
/// Trees assembled from raw variants come out in reduced form; a tree that is
/// already reduced comes back unchanged.
pub fn simplify(expr: Expr) -> Result<Expr> {
    match expr {
        Expr::Sum(a, b) => Ok(make_sum(simplify(*a)?, simplify(*b)?)),
        Expr::Product(a, b) => Ok(make_product(simplify(*a)?, simplify(*b)?)),
        Expr::Exponential(a, b) => make_exponentiation(simplify(*a)?, simplify(*b)?),
        leaf => Ok(leaf),
    }
}

/// Build `a1 + a2`, dropping a zero operand and folding two constants.
///
/// Constants whose sum does not fit in an `i64` are kept as an unfolded sum.
pub fn make_sum(a1: Expr, a2: Expr) -> Expr {
    match (a1, a2) {
        (Expr::Constant(0), y) => y,
        (x, Expr::Constant(0)) => x,
        (Expr::Constant(x), Expr::Constant(y)) => match x.checked_add(y) {
            Some(total) => Expr::Constant(total),
            None => {
                debug!("{x} + {y} overflows i64, leaving it unfolded");
                Expr::Sum(Expr::Constant(x).boxed(), Expr::Constant(y).boxed())
            }
        },
        (x, y) => Expr::Sum(x.boxed(), y.boxed()),
    }
}

/// Build `m1 * m2`. Zero annihilates before one is dropped; constants fold,
/// and a constant multiplier is merged into a product that itself leads
/// with a constant.
///
/// Coefficients whose product does not fit in an `i64` are left unfolded.
pub fn make_product(m1: Expr, m2: Expr) -> Expr {
    match (m1, m2) {
        (Expr::Constant(0), _) | (_, Expr::Constant(0)) => zero(),
        (Expr::Constant(1), y) => y,
        (x, Expr::Constant(1)) => x,
        (Expr::Constant(x), Expr::Constant(y)) => match x.checked_mul(y) {
            Some(product) => Expr::Constant(product),
            None => {
                debug!("{x} * {y} overflows i64, leaving it unfolded");
                Expr::Product(Expr::Constant(x).boxed(), Expr::Constant(y).boxed())
            }
        },
        (Expr::Constant(c), Expr::Product(a, b)) => match *a {
            Expr::Constant(k) => match c.checked_mul(k) {
                Some(merged) => make_product(Expr::Constant(merged), *b),
                None => {
                    debug!("{c} * {k} overflows i64, keeping coefficients apart");
                    let inner = Expr::Product(Expr::Constant(k).boxed(), b);
                    Expr::Product(Expr::Constant(c).boxed(), inner.boxed())
                }
            },
            a => {
                let inner = Expr::Product(a.boxed(), b);
                Expr::Product(Expr::Constant(c).boxed(), inner.boxed())
            }
        },
        (x, y) => Expr::Product(x.boxed(), y.boxed()),
    }
}

/// Build `base ** exponent`.
///
/// A zero exponent wins over everything, so `0 ** 0` is `1`. Two constants
/// fold exactly; a negative constant exponent has no integer result and is
/// rejected with [`CasError::Unsupported`].
pub fn make_exponentiation(base: Expr, exponent: Expr) -> Result<Expr> {
    match (base, exponent) {
        (_, Expr::Constant(0)) => Ok(one()),
        (b, Expr::Constant(1)) => Ok(b),
        (Expr::Constant(b), Expr::Constant(e)) => integer_power(b, e).map(Expr::Constant),
        (b, e) => Ok(Expr::Exponential(b.boxed(), e.boxed())),
    }
}

fn integer_power(base: i64, exponent: i64) -> Result<i64> {
    if exponent < 0 {
        debug!("refusing to fold {base} ** {exponent}");
        return Err(CasError::Unsupported(format!(
            "constant folding {base} ** {exponent} needs a non-negative exponent"
        )));
    }
    usize::try_from(exponent)
        .ok()
        .and_then(|e| num_traits::checked_pow(base, e))
        .ok_or_else(|| {
            debug!("{base} ** {exponent} overflows i64");
            CasError::Overflow(format!("{base} ** {exponent} does not fit in 64 bits"))
        })
}
