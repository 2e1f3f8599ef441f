use crate::numerical::calculus::{
    IntegrationMethod, Side, derivative, integrate, limit, one_sided_limit, taylor_coefficients,
};
use crate::numerical::errors::SolverError;

#[allow(dead_code)]
pub fn calculus_examples(example: usize) {
    let run = || -> Result<(), SolverError> {
        match example {
            0 => {
                // LIMITS
                println!("sin(x)/x at 0: {}", limit("sin(x)/x", "x", 0.0)?);
                println!("(x^2-1)/(x-1) at 1: {}", limit("(x^2-1)/(x-1)", "x", 1.0)?);
                println!("1/x^2 at 0: {}", limit("1/x^2", "x", 0.0)?);
                // sides disagree: no limit
                println!("1/x at 0: {}", limit("1/x", "x", 0.0)?);
                println!(
                    "1/x at 0 from the left: {}",
                    one_sided_limit("1/x", "x", 0.0, Side::Left)?
                );
            }
            1 => {
                // DERIVATIVES AND TAYLOR SERIES
                for order in 0..4 {
                    println!(
                        "d^{} / dt^{} of t^3 at t = 2: {}",
                        order,
                        order,
                        derivative("t^3", "t", 2.0, order)?
                    );
                }
                println!(
                    "Taylor coefficients of cos(x) at 0: {:?}",
                    taylor_coefficients("cos(x)", "x", 0.0, 4)?
                );
            }
            2 => {
                // INTEGRALS
                let simpson = integrate(
                    "sin(x)",
                    "x",
                    0.0,
                    std::f64::consts::PI,
                    IntegrationMethod::Simpson { intervals: 100 },
                )?;
                let gauss = integrate(
                    "sin(x)",
                    "x",
                    0.0,
                    std::f64::consts::PI,
                    IntegrationMethod::GaussLegendre { degree: 12 },
                )?;
                println!("Simpson {}, Gauss-Legendre {}", simpson, gauss);
            }
            _ => println!("no such example: {}", example),
        }
        Ok(())
    };
    if let Err(e) = run() {
        println!("example {} failed: {}", example, e);
    }
}
