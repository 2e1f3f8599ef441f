#[cfg(test)]
mod tests {
    use crate::numerical::closed_form::{solve_cubic_complex, solve_quadratic_complex};
    use crate::numerical::complex_kernel::{Complex, complex, complex_abs, complex_sub};
    use crate::numerical::errors::SolverError;
    use crate::numerical::poly_algebra::{evaluate_polynomial_complex, polynomial_from_roots};
    use crate::numerical::roots::*;
    use crate::numerical::solver_config::SolverConfig;
    use approx::assert_relative_eq;

    fn has_conjugate(roots: &[Complex], z: Complex) -> bool {
        roots
            .iter()
            .any(|r| (r.re - z.re).abs() < 1e-6 && (r.im + z.im).abs() < 1e-6)
    }

    //////////////////////////////////separation//////////////////////////////////////////

    #[test]
    fn test_separate_sorts_real_roots() {
        let roots = [complex(3.0, 0.0), complex(-1.0, 1e-12), complex(2.0, -0.0)];
        let separated = separate_roots(&roots);
        assert_eq!(separated.real_roots, vec![-1.0, 2.0, 3.0]);
        assert!(separated.complex_roots.is_empty());
    }

    #[test]
    fn test_separate_keeps_positive_member_of_pair() {
        let roots = [
            complex(1.0, -2.0),
            complex(5.0, 0.0),
            complex(1.0, 2.0),
            complex(-0.5, 0.25),
            complex(-0.5, -0.25),
        ];
        let separated = separate_roots(&roots);
        assert_eq!(separated.real_roots, vec![5.0]);
        assert_eq!(
            separated.complex_roots,
            vec![complex(1.0, 2.0), complex(-0.5, 0.25)]
        );
    }

    #[test]
    fn test_separate_pairs_up_to_rounding() {
        let roots = [complex(1.0, 2.0 + 1e-9), complex(1.0 + 1e-9, -2.0)];
        let separated = separate_roots(&roots);
        assert_eq!(separated.complex_roots.len(), 1);
        assert!(separated.complex_roots[0].im > 0.0);
    }

    #[test]
    fn test_separate_keeps_unpaired_root() {
        let roots = [complex(0.0, -3.0), complex(1.0, 1.0)];
        let separated = separate_roots(&roots);
        assert_eq!(separated.complex_roots, roots.to_vec());
    }

    #[test]
    fn test_separate_with_custom_epsilon() {
        let roots = [complex(1.0, 1e-5), complex(1.0, -1e-5)];
        assert_eq!(separate_roots(&roots).complex_roots.len(), 1);
        let loose = separate_roots_with(&roots, 1e-4);
        assert_eq!(loose.real_roots, vec![1.0, 1.0]);
        assert!(loose.complex_roots.is_empty());
    }

    //////////////////////////////////dispatch/////////////////////////////////////////////

    #[test]
    fn test_dispatch_matches_closed_forms() {
        assert_eq!(
            find_polynomial_roots_complex(&[1.0, -5.0, 6.0]),
            solve_quadratic_complex(1.0, -5.0, 6.0)
        );
        assert_eq!(
            find_polynomial_roots_complex(&[1.0, -6.0, 11.0, -6.0]),
            solve_cubic_complex(1.0, -6.0, 11.0, -6.0)
        );
        assert_eq!(find_polynomial_roots_complex(&[4.0, 2.0]), vec![complex(-0.5, 0.0)]);
    }

    #[test]
    fn test_degenerate_inputs_give_no_roots() {
        assert!(find_polynomial_roots_complex(&[]).is_empty());
        assert!(find_polynomial_roots_complex(&[0.0, 0.0]).is_empty());
        assert!(find_polynomial_roots_complex(&[7.0]).is_empty());
    }

    #[test]
    fn test_errors_from_configured_entry_point() {
        let config = SolverConfig::default();
        assert_eq!(
            find_polynomial_roots_with(&[], &config),
            Err(SolverError::EmptyPolynomial)
        );
        assert_eq!(
            find_polynomial_roots_with(&[0.0, 0.0, 0.0], &config),
            Err(SolverError::ZeroPolynomial)
        );
        let report = find_polynomial_roots_with(&[3.0], &config).unwrap();
        assert_eq!(report.method, SolveMethod::Constant);
        assert!(report.roots.is_empty());
    }

    #[test]
    fn test_leading_zero_demotes_quartic_to_cubic() {
        let report =
            find_polynomial_roots_with(&[0.0, 1.0, -6.0, 11.0, -6.0], &SolverConfig::default())
                .unwrap();
        assert_eq!(report.method, SolveMethod::Cubic);
        assert_eq!(report.iterations, None);
        assert_eq!(report.roots.len(), 3);
    }

    #[test]
    fn test_biquadratic_report() {
        let report =
            find_polynomial_roots_with(&[1.0, 0.0, -5.0, 0.0, 4.0], &SolverConfig::default())
                .unwrap();
        assert_eq!(report.method, SolveMethod::DurandKerner);
        assert!(report.converged);
        assert!(report.iterations.unwrap() <= 100);
        assert_eq!(report.real_roots.len(), 4);
        for (got, want) in report.real_roots.iter().zip([-2.0, -1.0, 1.0, 2.0]) {
            assert_relative_eq!(*got, want, epsilon = 0.1);
        }
        assert!(report.complex_roots.is_empty());
    }

    #[test]
    fn test_conjugate_pairs_for_real_coefficients() {
        let polynomials: [&[f64]; 5] = [
            &[1.0, 0.0, 1.0],
            &[1.0, 2.0, 1.0, 2.0],
            &[1.0, 0.0, 0.0, 0.0, 1.0],
            &[1.0, -1.0, 2.0, -2.0, 3.0, -3.0],
            &[2.0, 3.0, 0.0, 1.0, 5.0],
        ];
        for coefficients in polynomials {
            let roots = find_polynomial_roots_complex(coefficients);
            assert_eq!(roots.len(), coefficients.len() - 1);
            let non_real: Vec<Complex> =
                roots.iter().copied().filter(|r| r.im.abs() >= 1e-9).collect();
            for z in &non_real {
                assert!(has_conjugate(&roots, *z), "{} lacks a conjugate", z);
            }
            let separated = separate_roots(&roots);
            assert_eq!(separated.complex_roots.len() * 2, non_real.len());
            for z in &roots {
                let residual = complex_abs(evaluate_polynomial_complex(coefficients, *z));
                assert!(residual < 1e-6, "p({}) = {}", z, residual);
            }
        }
    }

    #[test]
    fn test_quintic_from_known_roots() {
        let want = [-3.0, -1.5, 0.5, 2.0, 4.0];
        let coefficients = polynomial_from_roots(&want);
        let report = find_polynomial_roots_with(&coefficients, &SolverConfig::default()).unwrap();
        assert_eq!(report.method, SolveMethod::DurandKerner);
        assert_eq!(report.real_roots.len(), 5);
        for (got, want) in report.real_roots.iter().zip(want) {
            assert_relative_eq!(*got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_tight_iteration_cap_is_reported() {
        let mut config = SolverConfig::default();
        config.set_max_iterations(2);
        config.set_tolerance(1e-14);
        let report = find_polynomial_roots_with(&[1.0, 0.0, -5.0, 0.0, 4.0], &config).unwrap();
        assert!(!report.converged);
        assert_eq!(report.iterations, Some(2));
        assert_eq!(report.roots.len(), 4);
    }

    #[test]
    fn test_roots_near_expected_values() {
        // (x^2 + 1)(x - 2)(x + 3)
        let roots = find_polynomial_roots_complex(&[1.0, 1.0, -5.0, 1.0, -6.0]);
        for want in [
            complex(0.0, 1.0),
            complex(0.0, -1.0),
            complex(2.0, 0.0),
            complex(-3.0, 0.0),
        ] {
            assert!(roots.iter().any(|r| complex_abs(complex_sub(*r, want)) < 1e-6));
        }
    }

    #[test]
    fn test_method_names() {
        assert_eq!(SolveMethod::DurandKerner.to_string(), "Durand-Kerner");
        assert_eq!(SolveMethod::Cubic.to_string(), "Cardano");
    }
}
