use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    brackets_are_balanced, find_char_position_outside_brackets, find_matching_bracket,
};
use std::f64::consts::{E, PI};
/// a module turns a String equation into a symbolic expression
///# Example
/// ```
/// use graphmotion::symbolic::symbolic_engine::Expr;
/// let input = "sin(x) + x**2"; // python-style power notation is accepted
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D();
/// println!("{}, Rust function at 2.0: {}  \n", input, parsed_function(2.0));
/// ```
//                  search recursion diagram
//                "sin(x)+x^2/2-1"                  |
//                |       left  | right             |
//                |_________________________________|
//                |       div by rightmost +/-      |
//                |_________________________________|
//                | sin(x)+x^2/2|   1               |
//                |       |     |   Ok              |
//                |______\|/____|___________________|
//                |       div by rightmost +/-      |
//                |_________________________________|
//                |   sin(x)    |  x^2/2            |
//                |  fn prefix  |  div by * /       |
//                |     x Ok    |  x^2 | 2 Ok       |
//                |_____________|_______|___________|
//                  etc...

/// unary function call syntax accepted by the parser; longer names first so that
/// e.g. "arcsin(" is never matched as a prefix of a shorter name
const FUNCTIONS: [(&str, fn(Box<Expr>) -> Expr); 18] = [
    ("arcsin", Expr::arcsin),
    ("arccos", Expr::arccos),
    ("arctan", Expr::arctg),
    ("arctg", Expr::arctg),
    ("asin", Expr::arcsin),
    ("acos", Expr::arccos),
    ("atan", Expr::arctg),
    ("sqrt", Expr::sqrt),
    ("sin", Expr::sin),
    ("cos", Expr::cos),
    ("tan", Expr::tg),
    ("cot", Expr::ctg),
    ("abs", Expr::abs),
    ("exp", Expr::Exp),
    ("ctg", Expr::ctg),
    ("log", Expr::Ln),
    ("tg", Expr::tg),
    ("ln", Expr::Ln),
];

impl Expr {
    /// Parses a string equation into a symbolic expression.
    ///
    /// Accepts the notation of the interactive prompt: `+ - * / ^` operators,
    /// python-style `**` for powers, unary minus, brackets, the function names
    /// listed in [`FUNCTIONS`] (both `tan`/`tg` spellings), and the named
    /// constants `pi` and `e`.
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        // normalize python power notation and strip whitespace so that the
        // recursive splitting below can look at single characters
        let normalized: String = input
            .replace("**", "^")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if normalized.is_empty() {
            return Err("empty expression".to_string());
        }
        if !brackets_are_balanced(&normalized) {
            return Err(format!("unbalanced brackets in '{}'", input.trim()));
        }
        parse_fragment(&normalized)
    }
}

// a '+' or '-' is a binary operator only when something evaluable stands on its
// left: not at the start, not after another operator or an opening bracket, and
// not inside scientific notation like 1e-5
fn is_binary_sign(input: &str, pos: usize) -> bool {
    if pos == 0 {
        return false;
    }
    let bytes = input.as_bytes();
    let prev = bytes[pos - 1] as char;
    if matches!(prev, '+' | '-' | '*' | '/' | '^' | '(') {
        return false;
    }
    if (prev == 'e' || prev == 'E') && pos >= 2 {
        let before = bytes[pos - 2] as char;
        if before.is_ascii_digit() || before == '.' {
            return false;
        }
    }
    true
}

// find the rightmost operator of the given set outside brackets; splitting at
// the rightmost occurrence makes the operators left-associative
fn find_rightmost_operator_outside_brackets(
    input: &str,
    operators: &[char],
    sign_aware: bool,
) -> Option<(usize, char)> {
    let mut bracket_depth = 0;
    let mut last_op: Option<(usize, char)> = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                if !sign_aware || is_binary_sign(input, i) {
                    last_op = Some((i, c));
                }
            }
            _ => {}
        }
    }
    last_op
}

fn parse_fragment(input: &str) -> Result<Expr, String> {
    if input.is_empty() {
        return Err("empty expression fragment".to_string());
    }

    // addition and subtraction
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['+', '-'], true) {
        let left = parse_fragment(&input[..pos])?;
        let right = parse_fragment(&input[pos + 1..])?;
        return Ok(match op {
            '+' => Expr::Add(left.boxed(), right.boxed()),
            _ => Expr::Sub(left.boxed(), right.boxed()),
        });
    }

    // multiplication and division
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/'], false) {
        let left = parse_fragment(&input[..pos])?;
        let right = parse_fragment(&input[pos + 1..])?;
        return Ok(match op {
            '*' => Expr::Mul(left.boxed(), right.boxed()),
            _ => Expr::Div(left.boxed(), right.boxed()),
        });
    }

    // unary sign applied to a whole fragment, e.g. "-sin(x)" or "-x^2";
    // checked before the power split so that -x^2 means -(x^2), as in python
    if let Some(rest) = input.strip_prefix('-') {
        return Ok(Expr::Mul(
            Expr::Const(-1.0).boxed(),
            parse_fragment(rest)?.boxed(),
        ));
    }
    if let Some(rest) = input.strip_prefix('+') {
        return Ok(parse_fragment(rest)?);
    }

    // powers; splitting at the leftmost '^' makes the operator right-associative
    if let Some(pos) = find_char_position_outside_brackets(input, '^') {
        let base = parse_fragment(&input[..pos])?;
        let exponent = parse_fragment(&input[pos + 1..])?;
        return Ok(Expr::Pow(base.boxed(), exponent.boxed()));
    }

    // function calls like sin(...), where the bracket after the name closes at
    // the very end of the fragment
    for (name, constructor) in FUNCTIONS {
        if input.len() > name.len() + 1
            && input.starts_with(name)
            && input.as_bytes()[name.len()] == b'('
            && find_matching_bracket(input, name.len()) == Some(input.len() - 1)
        {
            let inner = parse_fragment(&input[name.len() + 1..input.len() - 1])?;
            return Ok(constructor(inner.boxed()));
        }
    }

    // a fragment that is entirely wrapped in brackets
    if input.starts_with('(') && find_matching_bracket(input, 0) == Some(input.len() - 1) {
        return parse_fragment(&input[1..input.len() - 1]);
    }

    // constants and variables
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }
    match input {
        "pi" | "PI" | "Pi" => return Ok(Expr::Const(PI)),
        "e" | "E" => return Ok(Expr::Const(E)),
        _ => {}
    }
    let mut chars = input.chars();
    let head_is_alpha = chars
        .next()
        .map(|c| c.is_alphabetic() || c == '_')
        .unwrap_or(false);
    if head_is_alpha && chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Ok(Expr::Var(input.to_string()));
    }

    Err(format!("invalid expression fragment '{}'", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        let expr = Expr::parse_expression("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_variable() {
        let expr = Expr::parse_expression("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = Expr::parse_expression("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_subtraction() {
        let expr = Expr::parse_expression("x - 2").unwrap();
        assert_eq!(
            expr,
            Expr::Sub(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_power() {
        let expr = Expr::parse_expression("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_python_power_notation() {
        let expr = Expr::parse_expression("x**2").unwrap();
        assert_eq!(expr, Expr::parse_expression("x^2").unwrap());
    }

    #[test]
    fn test_parse_exponential() {
        let expr = Expr::parse_expression("exp(x)").unwrap();
        assert_eq!(expr, Expr::Exp(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_logarithm() {
        let expr = Expr::parse_expression("log(x)").unwrap();
        assert_eq!(expr, Expr::Ln(Box::new(Expr::Var("x".to_string()))));
        assert_eq!(expr, Expr::parse_expression("ln(x)").unwrap());
    }

    #[test]
    fn test_parse_sqrt_and_abs() {
        let expr = Expr::parse_expression("sqrt(x) + abs(x)").unwrap();
        let x = || Box::new(Expr::Var("x".to_string()));
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::sqrt(x())),
                Box::new(Expr::abs(x()))
            )
        );
    }

    #[test]
    fn test_parse_expression_with_brackets() {
        let expr = Expr::parse_expression("(x + 1) * x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Const(1.0))
                )),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_division_is_left_associative() {
        // a/b/c must mean (a/b)/c
        let expr = Expr::parse_expression("8/4/2").unwrap();
        let f = expr.lambdify1D();
        assert_eq!(f(0.0), 1.0);
    }

    #[test]
    fn test_parse_power_is_right_associative() {
        // 2^3^2 must mean 2^(3^2) = 512
        let expr = Expr::parse_expression("2^3^2").unwrap();
        let f = expr.lambdify1D();
        assert_eq!(f(0.0), 512.0);
    }

    #[test]
    fn test_parse_unary_minus() {
        let expr = Expr::parse_expression("-x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_leading_minus_before_function() {
        let expr = Expr::parse_expression("-sin(x)").unwrap();
        let f = expr.lambdify1D();
        assert!((f(std::f64::consts::FRAC_PI_2) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_minus_after_operator_is_a_sign() {
        let expr = Expr::parse_expression("x*-2").unwrap();
        let f = expr.lambdify1D();
        assert_eq!(f(3.0), -6.0);
    }

    #[test]
    fn test_parse_minus_binds_looser_than_power() {
        // -x^2 must mean -(x^2)
        let expr = Expr::parse_expression("-x^2").unwrap();
        let f = expr.lambdify1D();
        assert_eq!(f(3.0), -9.0);
    }

    #[test]
    fn test_parse_scientific_notation() {
        let expr = Expr::parse_expression("1e-3 + x").unwrap();
        let f = expr.lambdify1D();
        assert!((f(0.0) - 1e-3).abs() < 1e-15);
    }

    #[test]
    fn test_parse_named_constants() {
        let expr = Expr::parse_expression("pi").unwrap();
        assert_eq!(expr, Expr::Const(PI));
        let expr = Expr::parse_expression("e^x").unwrap();
        let f = expr.lambdify1D();
        assert!((f(1.0) - E).abs() < 1e-12);
    }

    #[test]
    fn test_parse_mixed_trig_expression() {
        let expr = Expr::parse_expression("sin(x) + x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::sin(Box::new(Expr::Var("x".to_string())))),
                Box::new(Expr::Pow(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Const(2.0))
                ))
            )
        );
    }

    #[test]
    fn test_parse_nested_trig() {
        let expr = Expr::parse_expression("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::sin(Box::new(Expr::cos(Box::new(Expr::Var("x".to_string())))))
        );
    }

    #[test]
    fn test_parse_tan_and_tg_are_the_same() {
        assert_eq!(
            Expr::parse_expression("tan(x)").unwrap(),
            Expr::parse_expression("tg(x)").unwrap()
        );
    }

    #[test]
    fn test_invalid_expression() {
        assert!(Expr::parse_expression("(x +").is_err());
        assert!(Expr::parse_expression("x + ").is_err());
        assert!(Expr::parse_expression("").is_err());
        assert!(Expr::parse_expression("2 $ 3").is_err());
    }

    #[test]
    fn test_unmatched_brackets() {
        assert!(Expr::parse_expression("(x + 1").is_err());
        assert!(Expr::parse_expression("x + 1)").is_err());
    }
}
