use crate::symbolic::parse_expr::tokenize;
use crate::symbolic::polynomial_parser::{
    format_polynomial, parse_latex_equation, parse_polynomial,
};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_lambdify::{evaluate_expression, try_evaluate_expression};
use crate::symbolic::utils::linspace;

#[allow(dead_code)]
pub fn sym_examples(example: usize) {
    match example {
        0 => {
            // FUNCTION OF 1 VARIABLE
            // parse expression from string to symbolic expression
            let input = "2x^2 - 3sin(x)/x + e^(-x)";
            match Expr::parse_expression_in(input, "x") {
                Ok(parsed_expression) => {
                    println!("parsed_expression {}", parsed_expression);
                    // convert symbolic expression to a Rust function and evaluate it
                    let f = parsed_expression.lambdify1D("x");
                    println!("f(1.5) = {}", f(1.5));
                    // evaluate on a grid
                    let grid = linspace(0.5, 2.5, 5);
                    let values = parsed_expression.lambdify1D_from_linspace("x", &grid);
                    for (x, y) in grid.iter().zip(values) {
                        println!("f({}) = {}", x, y);
                    }
                }
                Err(e) => println!("could not parse {}: {}", input, e),
            }
        }
        1 => {
            // the token stream behind the parser, implicit multiplication not yet inserted
            match tokenize("2(x+1)sin(pi x)") {
                Ok(tokens) => {
                    let shown: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
                    println!("tokens: {}", shown.join(" "));
                }
                Err(e) => println!("tokenizer error: {}", e),
            }
            // the steady-state evaluator never fails: bad input gives NaN
            println!("2x at x = 3: {}", evaluate_expression("2x", "x", 3.0));
            println!("exp(e) with variable e = 1: {}", evaluate_expression("exp(e)", "e", 1.0));
            println!("broken input: {}", evaluate_expression("sin(", "x", 1.0));
            // the Result form tells why
            if let Err(e) = try_evaluate_expression("sin(", "x", 1.0) {
                println!("because: {}", e);
            }
        }
        2 => {
            // POLYNOMIAL EQUATIONS IN LATEX
            let latex = r"3x^{3} - \frac12 x + 2 \cdot x^{2} - 7 = 0";
            match parse_latex_equation(latex) {
                Ok(parsed) => println!(
                    "{} -> degree {}, coefficients {:?}",
                    latex, parsed.degree, parsed.coefficients
                ),
                Err(e) => println!("{} is rejected: {}", latex, e),
            }
            let latex = r"3x^{3} + 2 \cdot x^{2} - 7 = 0";
            if let Ok(parsed) = parse_latex_equation(latex) {
                println!(
                    "{} -> degree {}, coefficients {:?}",
                    latex, parsed.degree, parsed.coefficients
                );
                // and back to text
                println!("formatted: {}", format_polynomial(&parsed.coefficients, "x"));
            }
            // an equation needs exactly one '='
            if let Err(e) = parse_latex_equation("x^2 - 1") {
                println!("x^2 - 1 is rejected: {}", e);
            }
            // the plain parser accepts bare polynomials
            println!("{:?}", parse_polynomial("x^4 - 5x^2 + 4"));
        }
        _ => {
            println!("no such example: {}", example);
        }
    }
}
