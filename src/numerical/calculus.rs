//! Numerical calculus on single-variable expressions: limits, finite-difference
//! derivatives, Taylor coefficients and definite integrals.
//!
//! Every function parses `expr` once with `var` as the only free variable and then works
//! on the lambdified closure. Parse failures are the only errors; non-finite values
//! propagate through the arithmetic.
use crate::numerical::errors::SolverError;
use crate::symbolic::symbolic_engine::Expr;
use gauss_quad::GaussLegendre;
use log::debug;

/// steps `10^-k` used when approaching a point
const LIMIT_STEPS: std::ops::RangeInclusive<i32> = 1..=7;
/// one-sided values beyond this magnitude count as diverging
const DIVERGENCE_THRESHOLD: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMethod {
    /// composite Simpson rule; an odd interval count is rounded up
    Simpson { intervals: usize },
    /// Gauss-Legendre quadrature with `degree` nodes (at least 2)
    GaussLegendre { degree: usize },
}

impl Default for IntegrationMethod {
    fn default() -> Self {
        IntegrationMethod::Simpson { intervals: 1000 }
    }
}

fn lambdify(expr: &str, var: &str) -> Result<Box<dyn Fn(f64) -> f64>, SolverError> {
    let parsed = Expr::parse_expression_in(expr, var)?;
    Ok(parsed.lambdify1D(var))
}

/// Values of `f` approaching `point` from one side, for steps 1e-1 down to 1e-7.
fn approach(f: &dyn Fn(f64) -> f64, point: f64, side: Side) -> Vec<f64> {
    LIMIT_STEPS
        .map(|k| {
            let h = 10f64.powi(-k);
            match side {
                Side::Left => f(point - h),
                Side::Right => f(point + h),
            }
        })
        .collect()
}

/// The last value of an approach sequence, or the matching infinity when the sequence
/// is large and still growing.
fn one_side_value(values: &[f64]) -> f64 {
    let n = values.len();
    let last = values[n - 1];
    let previous = values[n - 2];
    if last.is_infinite() {
        return last;
    }
    if last.abs() > DIVERGENCE_THRESHOLD && last.abs() > previous.abs() {
        return f64::INFINITY.copysign(last);
    }
    last
}

fn limit_of(f: &dyn Fn(f64) -> f64, point: f64) -> f64 {
    let direct = f(point);
    if direct.is_finite() {
        return direct;
    }
    let left = one_side_value(&approach(f, point, Side::Left));
    let right = one_side_value(&approach(f, point, Side::Right));
    debug!("limit at {}: left {}, right {}", point, left, right);
    if left.is_infinite() || right.is_infinite() {
        return if left == right { left } else { f64::NAN };
    }
    let mean = 0.5 * (left + right);
    if (left - right).abs() <= 1e-6 * (1.0 + mean.abs()) {
        mean
    } else {
        f64::NAN
    }
}

/// Limit of `expr` as `var -> point`.
///
/// A finite value at the point itself is returned directly. Otherwise the point is
/// approached from both sides: matching sides give their mean, matching divergence gives
/// `+inf` or `-inf`, anything else gives NaN.
pub fn limit(expr: &str, var: &str, point: f64) -> Result<f64, SolverError> {
    let f = lambdify(expr, var)?;
    Ok(limit_of(&*f, point))
}

/// Limit of `expr` as `var` approaches `point` from one side only.
pub fn one_sided_limit(expr: &str, var: &str, point: f64, side: Side) -> Result<f64, SolverError> {
    let f = lambdify(expr, var)?;
    let direct = f(point);
    if direct.is_finite() {
        return Ok(direct);
    }
    Ok(one_side_value(&approach(&*f, point, side)))
}

/// Central finite difference of order `order` at `x`:
/// `h^-n * sum_k (-1)^k C(n, k) f(x + (n/2 - k) h)`.
fn finite_difference(f: &dyn Fn(f64) -> f64, x: f64, order: u32) -> f64 {
    if order == 0 {
        return f(x);
    }
    let n = order as f64;
    let h = f64::EPSILON.powf(1.0 / (n + 2.0)) * x.abs().max(1.0);
    let mut binomial = 1.0;
    let mut sum = 0.0;
    for k in 0..=order {
        let kf = k as f64;
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        sum += sign * binomial * f(x + (0.5 * n - kf) * h);
        binomial = binomial * (n - kf) / (kf + 1.0);
    }
    sum / h.powi(order as i32)
}

/// `order`-th derivative of `expr` at `x` by central finite differences.
///
/// The step is `eps^(1/(order+2)) * max(1, |x|)`. Accuracy drops with the order: roughly
/// 1e-10 for the first derivative, 1e-7 for the second, 1e-4 by the fourth.
pub fn derivative(expr: &str, var: &str, x: f64, order: u32) -> Result<f64, SolverError> {
    let f = lambdify(expr, var)?;
    Ok(finite_difference(&*f, x, order))
}

/// Taylor coefficients `c_k = f^(k)(center) / k!` for `k = 0..=order`, lowest power first.
pub fn taylor_coefficients(
    expr: &str,
    var: &str,
    center: f64,
    order: u32,
) -> Result<Vec<f64>, SolverError> {
    let f = lambdify(expr, var)?;
    let mut factorial = 1.0;
    let coefficients = (0..=order)
        .map(|k| {
            if k > 0 {
                factorial *= k as f64;
            }
            finite_difference(&*f, center, k) / factorial
        })
        .collect();
    Ok(coefficients)
}

fn simpson(f: &dyn Fn(f64) -> f64, a: f64, b: f64, intervals: usize) -> f64 {
    let n = if intervals % 2 == 1 { intervals + 1 } else { intervals };
    let h = (b - a) / n as f64;
    let inner: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(a + i as f64 * h)
        })
        .sum();
    h / 3.0 * (f(a) + inner + f(b))
}

/// Definite integral of `expr` over `[a, b]`.
///
/// `b < a` gives the negated integral over `[b, a]`.
pub fn integrate(
    expr: &str,
    var: &str,
    a: f64,
    b: f64,
    method: IntegrationMethod,
) -> Result<f64, SolverError> {
    let f = lambdify(expr, var)?;
    match method {
        IntegrationMethod::Simpson { intervals } => {
            if intervals == 0 {
                return Err(SolverError::InvalidConfig(
                    "Simpson rule needs at least one interval".to_string(),
                ));
            }
            Ok(simpson(&*f, a, b, intervals))
        }
        IntegrationMethod::GaussLegendre { degree } => {
            let quad = GaussLegendre::new(degree).map_err(|e| {
                SolverError::InvalidConfig(format!(
                    "Failed to create Gauss-Legendre quadrature: {:?}",
                    e
                ))
            })?;
            Ok(quad.integrate(a, b, &f))
        }
    }
}
