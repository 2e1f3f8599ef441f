//! Complex arithmetic used by the polynomial solvers.
//!
//! Values are `num_complex::Complex64`; the free functions below pin down the exact
//! semantics the solvers rely on: division by an exact zero gives `(NaN, NaN)` instead
//! of panicking, the square root always takes the branch with non-negative real part
//! (and positive imaginary part on the negative real axis, so `sqrt(-4) = 2i`), and
//! "is real"/"is zero" checks use the absolute tolerance [`EPSILON`].
use num_complex::Complex64;
use num_traits::{One, Zero};

pub type Complex = Complex64;

/// absolute tolerance for "is real" and "is zero" checks
pub const EPSILON: f64 = 1e-9;

pub fn complex(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

pub fn complex_add(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re + b.re, a.im + b.im)
}

pub fn complex_sub(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re - b.re, a.im - b.im)
}

pub fn complex_mul(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

/// Quotient `a / b`; `(NaN, NaN)` when `b` is exactly zero.
pub fn complex_div(a: Complex, b: Complex) -> Complex {
    let denominator = b.re * b.re + b.im * b.im;
    if denominator == 0.0 {
        return Complex::new(f64::NAN, f64::NAN);
    }
    Complex::new(
        (a.re * b.re + a.im * b.im) / denominator,
        (a.im * b.re - a.re * b.im) / denominator,
    )
}

pub fn complex_scale(a: Complex, k: f64) -> Complex {
    Complex::new(a.re * k, a.im * k)
}

/// `z^n` by repeated multiplication; `z^0 = 1`.
pub fn complex_pow(z: Complex, n: u32) -> Complex {
    (0..n).fold(Complex::one(), |acc, _| complex_mul(acc, z))
}

/// Principal square root via the half-angle formulas.
pub fn complex_sqrt(z: Complex) -> Complex {
    let r = complex_abs(z);
    let re = ((r + z.re) / 2.0).max(0.0).sqrt();
    let im = ((r - z.re) / 2.0).max(0.0).sqrt();
    if z.im < 0.0 {
        Complex::new(re, -im)
    } else {
        Complex::new(re, im)
    }
}

/// Principal cube root: modulus^(1/3) at a third of the argument.
pub fn complex_cbrt(z: Complex) -> Complex {
    if z.is_zero() {
        return Complex::zero();
    }
    let r = complex_abs(z).cbrt();
    let theta = z.im.atan2(z.re) / 3.0;
    Complex::new(r * theta.cos(), r * theta.sin())
}

pub fn complex_abs(z: Complex) -> f64 {
    (z.re * z.re + z.im * z.im).sqrt()
}

pub fn complex_conjugate(z: Complex) -> Complex {
    Complex::new(z.re, -z.im)
}

pub fn is_essentially_real(z: Complex) -> bool {
    z.im.abs() < EPSILON
}

pub fn is_essentially_zero(z: Complex) -> bool {
    z.re.abs() < EPSILON && z.im.abs() < EPSILON
}

/// Renders `z` with `decimals` fixed decimal places: `"0"`, `"2.5000"`, `"i"`, `"-3.0000i"`,
/// `"3.0000 + 4.0000i"`, `"1.0000 - i"`.
pub fn format_complex(z: Complex, decimals: usize) -> String {
    if is_essentially_zero(z) {
        return "0".to_string();
    }
    if is_essentially_real(z) {
        return format!("{:.*}", decimals, z.re);
    }
    let unit_imaginary = (z.im.abs() - 1.0).abs() < EPSILON;
    if z.re.abs() < EPSILON {
        return match (unit_imaginary, z.im < 0.0) {
            (true, false) => "i".to_string(),
            (true, true) => "-i".to_string(),
            (false, _) => format!("{:.*}i", decimals, z.im),
        };
    }
    let sign = if z.im < 0.0 { "-" } else { "+" };
    if unit_imaginary {
        format!("{:.*} {} i", decimals, z.re, sign)
    } else {
        format!("{:.*} {} {:.*}i", decimals, z.re, sign, decimals, z.im.abs())
    }
}

/// [`format_complex`] with four decimals.
pub fn format_complex_default(z: Complex) -> String {
    format_complex(z, 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_operations() {
        let a = complex(1.0, 2.0);
        let b = complex(3.0, -1.0);
        assert_eq!(complex_add(a, b), complex(4.0, 1.0));
        assert_eq!(complex_sub(a, b), complex(-2.0, 3.0));
        assert_eq!(complex_mul(a, b), complex(5.0, 5.0));
        assert_eq!(complex_scale(a, 2.0), complex(2.0, 4.0));
        assert_eq!(complex_conjugate(a), complex(1.0, -2.0));
        assert_relative_eq!(complex_abs(complex(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_division() {
        let q = complex_div(complex(5.0, 5.0), complex(3.0, -1.0));
        assert_relative_eq!(q.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(q.im, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_division_by_zero_is_nan() {
        let q = complex_div(complex(1.0, 1.0), complex(0.0, 0.0));
        assert!(q.re.is_nan());
        assert!(q.im.is_nan());
    }

    #[test]
    fn test_pow() {
        assert_eq!(complex_pow(complex(0.0, 1.0), 0), complex(1.0, 0.0));
        assert_eq!(complex_pow(complex(0.0, 1.0), 2), complex(-1.0, 0.0));
        assert_eq!(complex_pow(complex(1.0, 1.0), 4), complex(-4.0, 0.0));
    }

    #[test]
    fn test_sqrt_branches() {
        assert_eq!(complex_sqrt(complex(-4.0, 0.0)), complex(0.0, 2.0));
        assert_eq!(complex_sqrt(complex(-1.0, 0.0)), complex(0.0, 1.0));
        assert_eq!(complex_sqrt(complex(-4.0, -0.0)), complex(0.0, 2.0));
        assert_eq!(complex_sqrt(complex(9.0, 0.0)), complex(3.0, 0.0));
        let s = complex_sqrt(complex(3.0, -4.0));
        assert_relative_eq!(s.re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(s.im, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cbrt_principal() {
        let c = complex_cbrt(complex(8.0, 0.0));
        assert_relative_eq!(c.re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.im, 0.0, epsilon = 1e-12);
        // principal root of a negative real lies at 60 degrees
        let c = complex_cbrt(complex(-8.0, 0.0));
        assert_relative_eq!(c.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.im, 3.0f64.sqrt(), epsilon = 1e-12);
        assert_eq!(complex_cbrt(complex(0.0, 0.0)), complex(0.0, 0.0));
    }

    #[test]
    fn test_predicates() {
        assert!(is_essentially_real(complex(2.0, 1e-12)));
        assert!(!is_essentially_real(complex(2.0, 1e-6)));
        assert!(is_essentially_zero(complex(1e-10, -1e-10)));
        assert!(!is_essentially_zero(complex(1e-10, 1e-3)));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_complex_default(complex(3.0, 4.0)), "3.0000 + 4.0000i");
        assert_eq!(format_complex_default(complex(3.0, -4.0)), "3.0000 - 4.0000i");
        assert_eq!(format_complex_default(complex(0.0, 0.0)), "0");
        assert_eq!(format_complex_default(complex(0.0, 1.0)), "i");
        assert_eq!(format_complex_default(complex(0.0, -1.0)), "-i");
        assert_eq!(format_complex_default(complex(0.0, 2.5)), "2.5000i");
        assert_eq!(format_complex_default(complex(-1.5, 0.0)), "-1.5000");
        assert_eq!(format_complex_default(complex(1.0, -1.0)), "1.0000 - i");
        assert_eq!(format_complex(complex(1.0, 0.5), 2), "1.00 + 0.50i");
    }
}
