use symdiff::{Expr, simplify, substitute};

fn main() {
    let raw = Expr::Sum(
        Expr::Product(Expr::constant(1).boxed(), Expr::var("x").boxed()).boxed(),
        Expr::Exponential(Expr::constant(2).boxed(), Expr::constant(5).boxed()).boxed(),
    );
    println!("raw:        {raw}");
    match simplify(raw.clone()) {
        Ok(reduced) => println!("simplified: {reduced}"),
        Err(err) => eprintln!("simplify failed: {err}"),
    }
    match substitute(&raw, "x", &Expr::constant(10)) {
        Ok(value) => println!("at x = 10:  {value}"),
        Err(err) => eprintln!("substitute failed: {err}"),
    }
}
