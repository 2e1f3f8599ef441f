use crate::numerical::closed_form::{solve_cubic_complex, solve_quadratic_complex};
use crate::numerical::complex_kernel::format_complex_default;
use crate::numerical::durand_kerner::{MAX_ITERATIONS, TOLERANCE, durand_kerner};
use crate::numerical::poly_algebra::divide_polynomials;
use crate::numerical::poly_solver::PolySolver;
use crate::numerical::roots::{find_polynomial_roots_complex, separate_roots};
use crate::numerical::solver_config::SolverConfig;

fn print_roots(label: &str, coefficients: &[f64]) {
    let roots = find_polynomial_roots_complex(coefficients);
    let shown: Vec<String> = roots.iter().map(|r| format_complex_default(*r)).collect();
    println!("{}: {}", label, shown.join(", "));
    let separated = separate_roots(&roots);
    println!(
        "   real roots {:?}, complex roots (one per conjugate pair) {:?}",
        separated.real_roots,
        separated
            .complex_roots
            .iter()
            .map(|r| format_complex_default(*r))
            .collect::<Vec<_>>()
    );
}

#[allow(dead_code)]
pub fn roots_examples(example: usize) {
    match example {
        0 => {
            // CLOSED FORMS
            // quadratic: "+" root first
            for r in solve_quadratic_complex(1.0, -2.0, 5.0) {
                println!("x^2 - 2x + 5: {}", format_complex_default(r));
            }
            // cubic with three real roots, computed through complex intermediates
            for r in solve_cubic_complex(1.0, -6.0, 11.0, -6.0) {
                println!("x^3 - 6x^2 + 11x - 6: {}", format_complex_default(r));
            }
            // zero leading coefficient demotes the cubic to a quadratic
            println!("{:?}", solve_cubic_complex(0.0, 1.0, -5.0, 6.0));
        }
        1 => {
            // DISPATCH BY DEGREE
            print_roots("x - 4", &[1.0, -4.0]);
            print_roots("x^2 + 1", &[1.0, 0.0, 1.0]);
            print_roots("x^3 + 8", &[1.0, 0.0, 0.0, 8.0]);
            print_roots("x^4 - 5x^2 + 4", &[1.0, 0.0, -5.0, 0.0, 4.0]);
            print_roots("x^5 - x", &[1.0, 0.0, 0.0, 0.0, -1.0, 0.0]);
        }
        2 => {
            // DURAND-KERNER WITH ITS DIAGNOSTICS
            let coefficients = [1.0, -1.0, 2.0, -2.0, 3.0, -3.0];
            let outcome = durand_kerner(&coefficients, TOLERANCE, MAX_ITERATIONS);
            println!(
                "converged: {} after {} iterations",
                outcome.converged, outcome.iterations
            );
            for r in &outcome.roots {
                println!("   {}", format_complex_default(*r));
            }
            // a repeated root converges slowly; a tight cap shows the best estimate so far
            let outcome = durand_kerner(&[1.0, -4.0, 6.0, -4.0, 1.0], TOLERANCE, 10);
            println!(
                "(x - 1)^4 with 10 iterations: converged = {}, roots {:?}",
                outcome.converged, outcome.roots
            );
        }
        3 => {
            // SOLVER FRONT END: logging, configuration and a summary table
            let mut solver = PolySolver::new();
            let mut config = SolverConfig::default();
            config.set_loglevel(Some("info"));
            config.set_tolerance(1e-10);
            solver.set_config(config);
            match solver.set_equation(r"x^{4} + x^{3} - 5 \cdot x^{2} + x - 6 = 0") {
                Ok(()) => match solver.solve() {
                    Ok(report) => println!(
                        "method {}, real roots {:?}",
                        report.method, report.real_roots
                    ),
                    Err(e) => println!("solver error: {}", e),
                },
                Err(e) => println!("parse error: {}", e),
            }
        }
        4 => {
            // POLYNOMIAL DIVISION: deflate a known root
            if let Some(division) = divide_polynomials(&[1.0, -6.0, 11.0, -6.0], &[1.0, -1.0]) {
                println!(
                    "quotient {:?}, remainder {:?}",
                    division.quotient, division.remainder
                );
            }
            println!("{:?}", divide_polynomials(&[1.0, 2.0], &[0.0]));
        }
        _ => {
            println!("no such example: {}", example);
        }
    }
}
