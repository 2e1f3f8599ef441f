use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::symbolic_engine::Expr;
use log::debug;

impl Expr {
    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Converts a single-variable symbolic expression into an executable Rust closure.
    ///
    /// The closure mirrors the expression tree; any variable other than `var` evaluates
    /// to NaN. Arithmetic follows IEEE-754: `1/0` is infinite, `sqrt(-1)` and `ln(-1)`
    /// are NaN, `ln(0)` is `-inf`.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.pow(Expr::Const(2.0)); // x^2
    /// let func = f.lambdify1D("x");
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self, var: &str) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Box::new(|x| x)
                } else {
                    Box::new(|_| f64::NAN)
                }
            }
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D(var);
                let rhs_fn = rhs.lambdify1D(var);
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D(var);
                let rhs_fn = rhs.lambdify1D(var);
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D(var);
                let rhs_fn = rhs.lambdify1D(var);
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D(var);
                let rhs_fn = rhs.lambdify1D(var);
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D(var);
                // integer exponents keep negative bases real: (-2)^3 = -8
                if let Expr::Const(n) = **exp {
                    if n.fract() == 0.0 && n.abs() <= i32::MAX as f64 {
                        let n = n as i32;
                        return Box::new(move |x| base_fn(x).powi(n));
                    }
                }
                let exp_fn = exp.lambdify1D(var);
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Neg(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| -expr_fn(x))
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).exp())
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::Log10(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).log10())
            }
            Expr::Sqrt(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).sqrt())
            }
            Expr::Abs(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).abs())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::tg(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).tan())
            }
            Expr::arcsin(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).asin())
            }
            Expr::arccos(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).acos())
            }
            Expr::arctg(expr) => {
                let expr_fn = expr.lambdify1D(var);
                Box::new(move |x| expr_fn(x).atan())
            }
        } // end of match
    } // end of lambdify1D

    /// Evaluates the expression at `var = value` without building a closure.
    pub fn eval1D(&self, var: &str, value: f64) -> f64 {
        self.lambdify1D(var)(value)
    }

    /// Tabulates the expression over `values`.
    pub fn lambdify1D_from_linspace(&self, var: &str, values: &[f64]) -> Vec<f64> {
        let f = self.lambdify1D(var);
        values.iter().map(|&x| f(x)).collect()
    }
}

/// Parses and evaluates `expr` at `var = value`, reporting parse failures.
pub fn try_evaluate_expression(expr: &str, var: &str, value: f64) -> Result<f64, ParseError> {
    let parsed = Expr::parse_expression_in(expr, var)?;
    Ok(parsed.eval1D(var, value))
}

/// Parses and evaluates `expr` at `var = value`; NaN on any parse failure.
///
/// ```
/// use RustedMathKit::symbolic::symbolic_lambdify::evaluate_expression;
/// assert_eq!(evaluate_expression("2x", "x", 3.0), 6.0);
/// assert!(evaluate_expression("2x +", "x", 3.0).is_nan());
/// ```
pub fn evaluate_expression(expr: &str, var: &str, value: f64) -> f64 {
    match try_evaluate_expression(expr, var, value) {
        Ok(result) => result,
        Err(e) => {
            debug!("failed to evaluate '{}': {}", expr, e);
            f64::NAN
        }
    }
}
