//! # Symbolic Engine Module
//!
//! Expression tree for single-variable arithmetic expressions. Trees are produced by the
//! recursive-descent parser in [`crate::symbolic::parse_expr`] and turned into plain Rust
//! closures by the lambdification routines in [`crate::symbolic::symbolic_lambdify`].
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - the free variable of the expression ("x", "t", "theta")
//! - **Constants**: `Const(f64)` - numbers and the named constants `pi`, `e`
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow`, `Neg`
//! - **Functions**: `Exp`, `Ln`, `Log10`, `Sqrt`, `Abs`, `sin`, `cos`, `tg`, `arcsin`, `arccos`, `arctg`
//!
//! ### `MathFunction` Enum
//! The closed set of function names the parser recognises. Names are matched as whole
//! identifier tokens, so a variable called `e` or `s` can never clobber `exp` or `sin`.
//!
//! Trigonometric variants keep the mathematical notation (`tg` for tangent, `arctg` for
//! arctangent).

#![allow(non_camel_case_types)]

use std::collections::HashSet;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Expression tree over one free variable.
///
/// # Examples
/// ```rust, ignore
/// use RustedMathKit::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// assert_eq!(expr.eval1D("x", 1.0), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x", "t")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Unary minus
    Neg(Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Decimal logarithm: log10(x)
    Log10(Box<Expr>),
    /// Square root
    Sqrt(Box<Expr>),
    /// Absolute value
    Abs(Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Tangent function: tan(x) - uses mathematical notation 'tg'
    tg(Box<Expr>),
    /// Arcsine function: arcsin(x)
    arcsin(Box<Expr>),
    /// Arccosine function: arccos(x)
    arccos(Box<Expr>),
    /// Arctangent function: arctan(x) - uses mathematical notation 'arctg'
    arctg(Box<Expr>),
}

/// Function names accepted by the expression parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MathFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Exp,
    /// natural logarithm
    Log,
    Ln,
    Log10,
    Abs,
    Pow,
}

impl MathFunction {
    /// Number of arguments the function takes.
    pub fn arity(&self) -> usize {
        match self {
            MathFunction::Pow => 2,
            _ => 1,
        }
    }

    /// Builds the expression node for this function applied to `args`.
    /// The caller guarantees `args.len() == self.arity()`.
    pub fn apply(&self, mut args: Vec<Expr>) -> Expr {
        if let MathFunction::Pow = self {
            let exponent = args.pop().unwrap_or(Expr::Const(f64::NAN));
            let base = args.pop().unwrap_or(Expr::Const(f64::NAN));
            return Expr::Pow(base.boxed(), exponent.boxed());
        }
        let arg = args.pop().unwrap_or(Expr::Const(f64::NAN)).boxed();
        match self {
            MathFunction::Sin => Expr::sin(arg),
            MathFunction::Cos => Expr::cos(arg),
            MathFunction::Tan => Expr::tg(arg),
            MathFunction::Asin => Expr::arcsin(arg),
            MathFunction::Acos => Expr::arccos(arg),
            MathFunction::Atan => Expr::arctg(arg),
            MathFunction::Sqrt => Expr::Sqrt(arg),
            MathFunction::Exp => Expr::Exp(arg),
            MathFunction::Log | MathFunction::Ln => Expr::Ln(arg),
            MathFunction::Log10 => Expr::Log10(arg),
            MathFunction::Abs => Expr::Abs(arg),
            MathFunction::Pow => unreachable!(),
        }
    }
}

/// Named constants of the expression grammar.
pub fn named_constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Fully parenthesised, so the printed form parses back into the same tree as long as
/// every constant is finite (`inf` and `NaN` print as identifiers).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Neg(expr) => write!(f, "(-{})", expr),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::Log10(expr) => write!(f, "log10({})", expr),
            Expr::Sqrt(expr) => write!(f, "sqrt({})", expr),
            Expr::Abs(expr) => write!(f, "abs({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tan({})", expr),
            Expr::arcsin(expr) => write!(f, "asin({})", expr),
            Expr::arccos(expr) => write!(f, "acos({})", expr),
            Expr::arctg(expr) => write!(f, "atan({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Neg(self.boxed())
    }
}

impl Expr {
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    pub fn exp(self) -> Expr {
        Expr::Exp(self.boxed())
    }

    pub fn ln(self) -> Expr {
        Expr::Ln(self.boxed())
    }

    /// Operands of the node, left to right.
    fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Var(_) | Expr::Const(_) => Vec::new(),
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => vec![lhs, rhs],
            Expr::Neg(expr)
            | Expr::Exp(expr)
            | Expr::Ln(expr)
            | Expr::Log10(expr)
            | Expr::Sqrt(expr)
            | Expr::Abs(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tg(expr)
            | Expr::arcsin(expr)
            | Expr::arccos(expr)
            | Expr::arctg(expr) => vec![expr],
        }
    }

    /// Returns true if the expression mentions `var_name` anywhere.
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            _ => self
                .children()
                .into_iter()
                .any(|child| child.contains_variable(var_name)),
        }
    }

    /// Sorted, deduplicated list of variable names found in the expression.
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut found = HashSet::new();
        self.collect_variables(&mut found);
        let mut vars: Vec<String> = found.into_iter().collect();
        vars.sort();
        vars
    }

    fn collect_variables(&self, found: &mut HashSet<String>) {
        if let Expr::Var(name) = self {
            found.insert(name.clone());
            return;
        }
        for child in self.children() {
            child.collect_variables(found);
        }
    }

    /// Substitutes `value` for the variable `var`, leaving a constant tree.
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        match self {
            Expr::Var(name) if name == var => Expr::Const(value),
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => lhs.set_variable(var, value) + rhs.set_variable(var, value),
            Expr::Sub(lhs, rhs) => lhs.set_variable(var, value) - rhs.set_variable(var, value),
            Expr::Mul(lhs, rhs) => lhs.set_variable(var, value) * rhs.set_variable(var, value),
            Expr::Div(lhs, rhs) => lhs.set_variable(var, value) / rhs.set_variable(var, value),
            Expr::Pow(base, exp) => base.set_variable(var, value).pow(exp.set_variable(var, value)),
            Expr::Neg(expr) => -expr.set_variable(var, value),
            Expr::Exp(expr) => Expr::Exp(expr.set_variable(var, value).boxed()),
            Expr::Ln(expr) => Expr::Ln(expr.set_variable(var, value).boxed()),
            Expr::Log10(expr) => Expr::Log10(expr.set_variable(var, value).boxed()),
            Expr::Sqrt(expr) => Expr::Sqrt(expr.set_variable(var, value).boxed()),
            Expr::Abs(expr) => Expr::Abs(expr.set_variable(var, value).boxed()),
            Expr::sin(expr) => Expr::sin(expr.set_variable(var, value).boxed()),
            Expr::cos(expr) => Expr::cos(expr.set_variable(var, value).boxed()),
            Expr::tg(expr) => Expr::tg(expr.set_variable(var, value).boxed()),
            Expr::arcsin(expr) => Expr::arcsin(expr.set_variable(var, value).boxed()),
            Expr::arccos(expr) => Expr::arccos(expr.set_variable(var, value).boxed()),
            Expr::arctg(expr) => Expr::arctg(expr.set_variable(var, value).boxed()),
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 0.0)
    }
}
