use crate::expr::Expr;

/// Fully parenthesized text form: `(a + b)`, `(a * b)`, `(a ** b)`.
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(expr, &mut out);
    out
}

fn write_expr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Constant(c) => out.push_str(&c.to_string()),
        Expr::Variable(v) => out.push_str(v),
        Expr::Sum(a, b) => write_binary(a, " + ", b, out),
        Expr::Product(a, b) => write_binary(a, " * ", b, out),
        Expr::Exponential(a, b) => write_binary(a, " ** ", b, out),
    }
}

fn write_binary(lhs: &Expr, op: &str, rhs: &Expr, out: &mut String) {
    out.push('(');
    write_expr(lhs, out);
    out.push_str(op);
    write_expr(rhs, out);
    out.push(')');
}
