use env_logger::Env;
use symdiff::{Expr, Result, differentiate};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let x = || Expr::var("x");
    let y = || Expr::var("y");

    let cases = [
        (x() + 3, "x"),
        (x() * y(), "x"),
        ((x() * y()) * (x() + 3), "x"),
        (2 * x().pow(4)? + 6 * y().pow(2)?, "y"),
        (x() + 3 * (x() + (y() + 2)), "x"),
        (x() + 3 * (x() + y() + 2), "x"),
    ];

    for (expr, var) in &cases {
        println!("d/d{var} {expr} = {}", differentiate(var, expr)?);
    }
    Ok(())
}
