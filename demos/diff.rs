use symdiff::prelude::*;

fn main() {
    let expr = make_product(Expr::constant(2), Expr::var("x"));
    let derivative = make_exponentiation(expr.clone(), Expr::constant(3))
        .and_then(|cube| deriv(&cube, &Expr::var("x")));
    match derivative {
        Ok(result) => println!("d/dx ({expr} ** 3) = {result}"),
        Err(err) => eprintln!("cannot differentiate: {err}"),
    }
}
