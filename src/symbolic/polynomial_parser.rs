//! Turns a polynomial equation written in plain or LaTeX-like notation into a dense
//! coefficient vector, index 0 = highest power, and back into text.
//!
//! Terms are collected in one pass into a sparse `power -> coefficient` map which is then
//! materialised, so degree detection and term extraction can not disagree. Only the
//! left-hand side of the equation is read: the right-hand side is taken to be zero.
//!
//! # Example
//! ```
//! use RustedMathKit::symbolic::polynomial_parser::{parse_latex_equation, parse_polynomial};
//! let parsed = parse_latex_equation(r"2x^{3} - 4 \cdot x + 1 = 0").unwrap();
//! assert_eq!(parsed.degree, 3);
//! assert_eq!(parsed.coefficients, vec![2.0, 0.0, -4.0, 1.0]);
//! assert_eq!(parse_polynomial("x^2 - 5x + 6"), Some(vec![1.0, -5.0, 6.0]));
//! ```
use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::utils::{find_char_positions, normalize_symbols, split_signed_terms};
use itertools::Itertools;
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// default free variable of a polynomial equation
pub const DEFAULT_VARIABLE: char = 'x';
/// highest power accepted in equation text
pub const MAX_DEGREE: usize = 1000;

static LATEX_MUL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(cdot|times|ast)").unwrap());
static LATEX_SIZING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(left|right|,|;|!|quad)").unwrap());
static BRACED_EXPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^\{([^{}]*)\}").unwrap());
// sign, coefficient, then optionally `*`, a one-letter variable and an integer power
static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>[+-]?)(?P<coef>\d+\.?\d*|\.\d+)?(?:(?P<star>\*)?(?P<var>[A-Za-z])(?:\^(?P<pow>\d+))?)?$")
        .unwrap()
});

/// Result of parsing a polynomial equation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEquation {
    pub degree: usize,
    /// `degree + 1` coefficients, highest power first
    pub coefficients: Vec<f64>,
}

/// Removes LaTeX markup: multiplication commands become `*`, `^{n}` becomes `^n`,
/// sizing commands, leftover braces and whitespace are dropped.
pub fn strip_latex(latex: &str) -> String {
    let text = normalize_symbols(latex);
    let text = LATEX_MUL.replace_all(&text, "*");
    let text = LATEX_SIZING.replace_all(&text, "");
    let text = BRACED_EXPONENT.replace_all(&text, "^$1");
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '{' && *c != '}')
        .collect::<String>()
        .replace("**", "^")
}

/// Parses one signed term into `(power, coefficient)`.
fn parse_term(term: &str, var: char) -> Result<(usize, f64), ParseError> {
    let invalid = || ParseError::InvalidTerm(term.to_string());
    let caps = TERM.captures(term).ok_or_else(invalid)?;
    let coef = caps.name("coef");
    let variable = caps.name("var");
    if coef.is_none() && variable.is_none() {
        return Err(invalid());
    }
    // `*x` without a number in front
    if coef.is_none() && caps.name("star").is_some() {
        return Err(invalid());
    }
    if let Some(v) = variable {
        if !v.as_str().starts_with(var) {
            return Err(ParseError::UnknownIdentifier(v.as_str().to_string()));
        }
    }
    let magnitude = match coef {
        Some(c) => c.as_str().parse::<f64>().map_err(|_| invalid())?,
        None => 1.0,
    };
    let sign = if &caps["sign"] == "-" { -1.0 } else { 1.0 };
    let power = match (variable, caps.name("pow")) {
        (None, _) => 0,
        (Some(_), None) => 1,
        (Some(_), Some(p)) => p.as_str().parse::<usize>().map_err(|_| invalid())?,
    };
    if power > MAX_DEGREE {
        return Err(invalid());
    }
    Ok((power, sign * magnitude))
}

/// Single pass over the terms of `lhs`, summing coefficients of equal powers.
fn collect_terms(lhs: &str, var: char) -> Result<BTreeMap<usize, f64>, ParseError> {
    let mut terms = BTreeMap::new();
    for term in split_signed_terms(lhs) {
        let (power, coefficient) = parse_term(&term, var)?;
        *terms.entry(power).or_insert(0.0) += coefficient;
    }
    if terms.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(terms)
}

fn to_dense(terms: &BTreeMap<usize, f64>) -> Result<ParsedEquation, ParseError> {
    let degree = terms.keys().next_back().copied().unwrap_or(0);
    let len = degree
        .checked_add(1)
        .ok_or_else(|| ParseError::InvalidTerm(format!("x^{}", degree)))?;
    let mut coefficients = vec![0.0; len];
    for (&power, &coefficient) in terms {
        coefficients[degree - power] += coefficient;
    }
    Ok(ParsedEquation {
        degree,
        coefficients,
    })
}

/// Parses `lhs = rhs` in the variable `var`; exactly one `=` is required and only the
/// left-hand side is read.
pub fn parse_latex_equation_in(latex: &str, var: char) -> Result<ParsedEquation, ParseError> {
    let text = strip_latex(latex);
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let eq_positions = find_char_positions(&text, '=');
    if eq_positions.len() != 1 {
        return Err(ParseError::InvalidEquationFormat);
    }
    let lhs = &text[..eq_positions[0]];
    let terms = collect_terms(lhs, var)?;
    let parsed = to_dense(&terms)?;
    debug!(
        "parsed equation '{}' -> degree {}, coefficients {:?}",
        latex, parsed.degree, parsed.coefficients
    );
    Ok(parsed)
}

/// Parses a LaTeX or plain polynomial equation in `x`.
///
/// Fails with [`ParseError::InvalidEquationFormat`] unless exactly one `=` is present.
pub fn parse_latex_equation(latex: &str) -> Result<ParsedEquation, ParseError> {
    parse_latex_equation_in(latex, DEFAULT_VARIABLE)
}

/// Parses a polynomial in `var`, given either as an expression or as an equation whose
/// left-hand side is the polynomial. `None` if the text is not a polynomial.
pub fn parse_polynomial_in(text: &str, var: char) -> Option<Vec<f64>> {
    let text = strip_latex(text);
    let lhs = match find_char_positions(&text, '=').as_slice() {
        [] => text.as_str(),
        [pos] => &text[..*pos],
        _ => return None,
    };
    match collect_terms(lhs, var).and_then(|terms| to_dense(&terms)) {
        Ok(parsed) => Some(parsed.coefficients),
        Err(e) => {
            debug!("'{}' is not a polynomial: {}", text, e);
            None
        }
    }
}

/// Parses a polynomial in `x`. See [`parse_polynomial_in`].
pub fn parse_polynomial(text: &str) -> Option<Vec<f64>> {
    parse_polynomial_in(text, DEFAULT_VARIABLE)
}

/// Renders descending coefficients as `2x^3 - x + 0.5`. Zero terms are omitted, unit
/// coefficients are written bare, the zero polynomial is `0`.
pub fn format_polynomial(coefficients: &[f64], var: &str) -> String {
    if coefficients.is_empty() {
        return "0".to_string();
    }
    let degree = coefficients.len() - 1;
    let body = coefficients
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != 0.0)
        .enumerate()
        .map(|(k, (i, &c))| {
            let power = degree - i;
            let magnitude = c.abs();
            let sign = match (k, c < 0.0) {
                (0, true) => "-",
                (0, false) => "",
                (_, true) => " - ",
                (_, false) => " + ",
            };
            let term = match power {
                0 => format!("{}", magnitude),
                _ => {
                    let coef = if magnitude == 1.0 {
                        String::new()
                    } else {
                        format!("{}", magnitude)
                    };
                    if power == 1 {
                        format!("{}{}", coef, var)
                    } else {
                        format!("{}{}^{}", coef, var, power)
                    }
                }
            };
            format!("{}{}", sign, term)
        })
        .join("");
    if body.is_empty() { "0".to_string() } else { body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_latex() {
        assert_eq!(strip_latex(r"3 \cdot x^{2} + 2 \times x = 0"), "3*x^2+2*x=0");
        assert_eq!(strip_latex(r"\left(x\right)^{10}"), "(x)^10");
        assert_eq!(strip_latex("x**2"), "x^2");
    }

    #[test]
    fn test_parse_latex_quadratic() {
        let parsed = parse_latex_equation(r"x^{2} - 5x + 6 = 0").unwrap();
        assert_eq!(parsed.degree, 2);
        assert_eq!(parsed.coefficients, vec![1.0, -5.0, 6.0]);
    }

    #[test]
    fn test_parse_latex_missing_powers_filled_with_zero() {
        let parsed = parse_latex_equation(r"x^4 - 5 \cdot x^2 + 4 = 0").unwrap();
        assert_eq!(parsed.degree, 4);
        assert_eq!(parsed.coefficients, vec![1.0, 0.0, -5.0, 0.0, 4.0]);
    }

    #[test]
    fn test_parse_latex_bare_variable_implies_degree_one() {
        let parsed = parse_latex_equation("-x + 3 = 0").unwrap();
        assert_eq!(parsed.degree, 1);
        assert_eq!(parsed.coefficients, vec![-1.0, 3.0]);
    }

    #[test]
    fn test_parse_latex_combines_like_terms() {
        let parsed = parse_latex_equation("x^2 + 2x^2 - x + 3x - 1 = 0").unwrap();
        assert_eq!(parsed.coefficients, vec![3.0, 2.0, -1.0]);
    }

    #[test]
    fn test_parse_latex_decimals_and_explicit_star() {
        let parsed = parse_latex_equation("0.5*x^3 + .25x = 0").unwrap();
        assert_eq!(parsed.coefficients, vec![0.5, 0.0, 0.25, 0.0]);
    }

    #[test]
    fn test_parse_latex_right_hand_side_ignored() {
        let parsed = parse_latex_equation("x^2 - 1 = 7").unwrap();
        assert_eq!(parsed.coefficients, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_parse_latex_requires_single_equals() {
        assert_eq!(
            parse_latex_equation("x^2 - 1"),
            Err(ParseError::InvalidEquationFormat)
        );
        assert_eq!(
            parse_latex_equation("x = 1 = 2"),
            Err(ParseError::InvalidEquationFormat)
        );
        assert_eq!(parse_latex_equation("  "), Err(ParseError::EmptyInput));
        assert_eq!(parse_latex_equation("= 0"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_latex_invalid_terms() {
        assert!(matches!(
            parse_latex_equation("x^2 + sin(x) = 0"),
            Err(ParseError::InvalidTerm(_))
        ));
        assert!(matches!(
            parse_latex_equation("2* + 1 = 0"),
            Err(ParseError::InvalidTerm(_))
        ));
        assert_eq!(
            parse_latex_equation("y^2 + 1 = 0"),
            Err(ParseError::UnknownIdentifier("y".to_string()))
        );
    }

    #[test]
    fn test_huge_powers_are_rejected() {
        assert!(matches!(
            parse_latex_equation("x^18446744073709551615 = 0"),
            Err(ParseError::InvalidTerm(_))
        ));
        assert!(matches!(
            parse_latex_equation("x^100000000000 + 1 = 0"),
            Err(ParseError::InvalidTerm(_))
        ));
        assert!(matches!(
            parse_latex_equation("x^99999999999999999999999 = 0"),
            Err(ParseError::InvalidTerm(_))
        ));
        assert_eq!(parse_polynomial("x^18446744073709551615 + 1"), None);
        assert_eq!(parse_polynomial("x^100000000000"), None);
        let parsed = parse_latex_equation(&format!("x^{} = 0", MAX_DEGREE)).unwrap();
        assert_eq!(parsed.degree, MAX_DEGREE);
        assert_eq!(parsed.coefficients.len(), MAX_DEGREE + 1);
        assert_eq!(parsed.coefficients[0], 1.0);
    }

    #[test]
    fn test_parse_in_other_variable() {
        let parsed = parse_latex_equation_in("t^3 - t = 0", 't').unwrap();
        assert_eq!(parsed.coefficients, vec![1.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_parse_polynomial_expression_or_equation() {
        assert_eq!(parse_polynomial("3x^2+2x+1"), Some(vec![3.0, 2.0, 1.0]));
        assert_eq!(parse_polynomial("3x^2+2x+1 = 0"), Some(vec![3.0, 2.0, 1.0]));
        assert_eq!(parse_polynomial("7"), Some(vec![7.0]));
        assert_eq!(parse_polynomial("x = 1 = 2"), None);
        assert_eq!(parse_polynomial("x^2 + foo"), None);
        assert_eq!(parse_polynomial(""), None);
    }

    #[test]
    fn test_format_polynomial() {
        assert_eq!(format_polynomial(&[2.0, 0.0, -1.0, 0.5], "x"), "2x^3 - x + 0.5");
        assert_eq!(format_polynomial(&[-1.0, 0.0, 0.0], "x"), "-x^2");
        assert_eq!(format_polynomial(&[0.0, 0.0], "x"), "0");
        assert_eq!(format_polynomial(&[], "x"), "0");
        assert_eq!(format_polynomial(&[1.0, -3.0], "t"), "t - 3");
    }

    #[test]
    fn test_format_then_parse_round_trip() {
        let cases: Vec<Vec<f64>> = vec![
            vec![1.0, -6.0, 11.0, -6.0],
            vec![-2.5, 0.0, 0.125],
            vec![3.0, 0.1, 0.0, -7.75, 1.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0, 0.0, -1.0],
            vec![4.0],
        ];
        for coefficients in cases {
            let text = format_polynomial(&coefficients, "x");
            assert_eq!(parse_polynomial(&text), Some(coefficients.clone()), "{}", text);
        }
    }
}
