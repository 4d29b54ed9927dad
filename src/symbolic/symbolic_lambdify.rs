use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Converts a single-variable symbolic expression into an executable Rust closure.
    ///
    /// This is the bridge between the parsed equation and numerical sampling:
    /// the recursive closure structure mirrors the expression tree, so no
    /// parsing or interpretation happens at call time. Whatever the variable is
    /// called in the source string ("x", "t", ...), it is bound to the single
    /// closure argument; a constant expression ignores the argument.
    ///
    /// Division by zero, logarithms of non-positive values and similar domain
    /// violations follow IEEE semantics and surface as NaN or infinities; the
    /// sampler downstream deals with them.
    ///
    /// # Examples
    /// ```
    /// use graphmotion::symbolic::symbolic_engine::Expr;
    /// let f = Expr::parse_expression("x^2").unwrap().lambdify1D();
    /// assert_eq!(f(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64 + Send + Sync> {
        match self {
            Expr::Var(_) => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                let exp_fn = exp.lambdify1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::sqrt(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sqrt())
            }
            Expr::abs(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).abs())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::tg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).tan())
            }
            Expr::ctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| 1.0 / expr_fn(x).tan())
            }
            Expr::arcsin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).asin())
            }
            Expr::arccos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).acos())
            }
            Expr::arctg(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).atan())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_lambdify1d_single_variable() {
        let x = Expr::Var("x".to_string());
        let func = x.lambdify1D();
        assert_eq!(func(5.0), 5.0);
    }

    #[test]
    fn test_lambdify1d_constant() {
        let c = Expr::Const(42.0);
        let func = c.lambdify1D();
        assert_eq!(func(100.0), 42.0);
    }

    #[test]
    fn test_lambdify1d_polynomial() {
        let x = Expr::Var("x".to_string());
        let expr = x.clone() * x.clone() + x.clone() * Expr::Const(2.0) + Expr::Const(1.0); // x^2 + 2x + 1
        let func = expr.lambdify1D();
        assert_eq!(func(3.0), 16.0); // 9 + 6 + 1 = 16
    }

    #[test]
    fn test_lambdify1d_trigonometric() {
        let x = Expr::Var("x".to_string());
        let expr = Expr::sin(Box::new(x));
        let func = expr.lambdify1D();
        assert!((func(0.0) - 0.0).abs() < 1e-10);
        assert!((func(PI / 2.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_lambdify1d_exponential() {
        let x = Expr::Var("x".to_string());
        let expr = Expr::Exp(Box::new(x));
        let func = expr.lambdify1D();
        assert!((func(0.0) - 1.0).abs() < 1e-10);
        assert!((func(1.0) - std::f64::consts::E).abs() < 1e-10);
    }

    #[test]
    fn test_lambdify1d_sqrt_and_abs() {
        let func = Expr::parse_expression("sqrt(abs(x))").unwrap().lambdify1D();
        assert_eq!(func(-4.0), 2.0);
    }

    #[test]
    fn test_lambdify1d_domain_violations_yield_non_finite() {
        let func = Expr::parse_expression("1/x").unwrap().lambdify1D();
        assert!(func(0.0).is_infinite());
        let func = Expr::parse_expression("ln(x)").unwrap().lambdify1D();
        assert!(func(-1.0).is_nan());
        let func = Expr::parse_expression("sqrt(x)").unwrap().lambdify1D();
        assert!(func(-1.0).is_nan());
    }

    #[test]
    fn test_lambdify1d_variable_name_does_not_matter() {
        let func = Expr::parse_expression("t^3").unwrap().lambdify1D();
        assert_eq!(func(2.0), 8.0);
    }
}
