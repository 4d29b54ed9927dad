#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String equation into a symbolic expression
///
///# Example
/// ```
/// use graphmotion::symbolic::symbolic_engine::Expr;
/// let input = "sin(x) + x^2";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D();
/// println!("{}, Rust function at 1.0: {}  \n", input, parsed_function(1.0));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the symbolic expression tree
/// 2) turns a symbolic expression into a string expression for printing and control results
///# Example#
/// ```
/// use graphmotion::symbolic::symbolic_engine::Expr;
/// let input = "exp(x) + 1/x";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// // the expression knows its variables
/// let vars = parsed_expression.variables();
/// assert_eq!(vars, vec!["x".to_string()]);
/// // substitute the variable with a constant and print
/// let with_const = parsed_expression.set_variable("x", 1.0);
/// println!("{}", with_const);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
///________________________________________________________________________________________________________________________________
/// turn a symbolic expression into a regular Rust function of one argument
/// ________________________________________________________________________________________________________________________________
pub mod symbolic_lambdify;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
