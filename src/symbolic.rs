/// expression tree, named functions and constants
///
///# Example
/// ```
/// use RustedMathKit::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let f = x.clone() * x + Expr::Const(1.0);
/// assert_eq!(f.to_string(), "((x * x) + 1)");
/// ```
pub mod symbolic_engine;
///____________________________________________________________________________________________________________________________
/// tokenizer and recursive-descent parser turning a string into an [`symbolic_engine::Expr`]
///
///# Example
/// ```
/// use RustedMathKit::symbolic::symbolic_engine::Expr;
/// // implicit multiplication, right-associative power, functions and constants
/// let parsed = Expr::parse_expression_in("2x^2 + sin(pi x)", "x").unwrap();
/// let f = parsed.lambdify1D("x");
/// assert!((f(0.5) - 1.5).abs() < 1e-12);
/// // identifiers other than the free variable are rejected
/// assert!(Expr::parse_expression_in("2y", "x").is_err());
/// ```
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// turns a symbolic expression into a Rust closure and evaluates it
///
///# Example
/// ```
/// use RustedMathKit::symbolic::symbolic_lambdify::evaluate_expression;
/// assert_eq!(evaluate_expression("2x", "x", 3.0), 6.0);
/// // the variable `e` does not clobber `exp`
/// assert!((evaluate_expression("exp(e)", "e", 1.0) - std::f64::consts::E).abs() < 1e-12);
/// assert!(evaluate_expression("2 +", "x", 1.0).is_nan());
/// ```
pub mod symbolic_lambdify;
///____________________________________________________________________________________________________________________________
/// plain and LaTeX polynomial equations to dense coefficient vectors and back
pub mod polynomial_parser;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
pub mod utils;
