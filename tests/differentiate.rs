use symdiff::{Expr, deriv, differentiate, make_exponentiation, make_product, make_sum, render};

fn x() -> Expr {
    Expr::var("x")
}

fn y() -> Expr {
    Expr::var("y")
}

fn assert_deriv_renders(expr: &Expr, var: &str, expected: &str) {
    let got = differentiate(var, expr).expect("differentiate");
    assert_eq!(render(&got), expected, "d/d{var} {expr}");
}

#[test]
fn sum_with_constant() {
    assert_deriv_renders(&(x() + 3), "x", "1");
}

#[test]
fn product_of_variables() {
    assert_deriv_renders(&(x() * y()), "x", "y");
}

#[test]
fn product_rule_on_nested_product() {
    let expr = (x() * y()) * (x() + 3);
    assert_deriv_renders(&expr, "x", "((x * y) + (y * (x + 3)))");
}

#[test]
fn power_rule_merges_coefficients() {
    let expr = make_product(
        Expr::constant(2),
        make_exponentiation(x(), Expr::constant(4)).unwrap(),
    );
    assert_deriv_renders(&expr, "x", "(8 * (x ** 3))");
}

#[test]
fn constant_power_folds_on_construction() {
    let expr = make_exponentiation(Expr::constant(2), Expr::constant(3)).unwrap();
    assert_eq!(render(&expr), "8");
}

#[test]
fn polynomial_in_other_variable() {
    let expr = 2 * x().pow(4).unwrap() + 6 * y().pow(2).unwrap();
    assert_deriv_renders(&expr, "y", "(12 * y)");
    assert_deriv_renders(&expr, "x", "(8 * (x ** 3))");
}

#[test]
fn nested_sums_collapse_to_constant() {
    let expr = x() + 3 * (x() + (y() + 2));
    assert_deriv_renders(&expr, "x", "4");

    let left_nested = x() + 3 * (x() + y() + 2);
    assert_deriv_renders(&left_nested, "x", "4");
}

#[test]
fn constants_and_variables() {
    let var = x();
    assert_eq!(deriv(&Expr::constant(42), &var), Ok(Expr::constant(0)));
    assert_eq!(deriv(&x(), &var), Ok(Expr::constant(1)));
    assert_eq!(deriv(&y(), &var), Ok(Expr::constant(0)));
}

#[test]
fn derivative_is_already_reduced() {
    let expr = (x() * x()) * x().pow(3).unwrap() + y();
    let got = differentiate("x", &expr).unwrap();
    assert_eq!(symdiff::simplify(got.clone()), Ok(got));
}

#[test]
fn linearity_over_sums() {
    let u = x().pow(3).unwrap() * y();
    let v = 5 * x();
    let lhs = differentiate("x", &make_sum(u.clone(), v.clone())).unwrap();
    let rhs = make_sum(
        differentiate("x", &u).unwrap(),
        differentiate("x", &v).unwrap(),
    );
    assert_eq!(lhs, rhs);
}

#[test]
fn input_tree_is_left_untouched() {
    let expr = (x() * y()) * (x() + 3);
    let before = expr.clone();
    let _ = differentiate("x", &expr).unwrap();
    assert_eq!(expr, before);
}

#[test]
fn power_rule_at_the_integer_boundary() {
    let expr = x().pow(i64::MIN).unwrap();
    let got = differentiate("x", &expr).unwrap();
    let min = Expr::constant(i64::MIN);
    let lowered = Expr::Sum(min.clone().boxed(), Expr::constant(-1).boxed());
    let power = Expr::Exponential(x().boxed(), lowered.boxed());
    assert_eq!(got, Expr::Product(min.boxed(), power.boxed()));
}
