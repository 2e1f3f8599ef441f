//! Front end for solving one polynomial equation with logging and a summary table.
//!
//! # Example
//! ```
//! use RustedMathKit::numerical::poly_solver::PolySolver;
//! use RustedMathKit::numerical::solver_config::SolverConfig;
//! let mut config = SolverConfig::default();
//! config.set_loglevel(Some("off"));
//! let mut solver = PolySolver::new();
//! solver.set_config(config);
//! solver.set_equation(r"x^{4} - 5x^{2} + 4 = 0").unwrap();
//! let report = solver.solve().unwrap();
//! assert_eq!(report.real_roots.len(), 4);
//! ```
use crate::Utils::logger::init_logger;
use crate::numerical::complex_kernel::format_complex_default;
use crate::numerical::errors::SolverError;
use crate::numerical::roots::{RootReport, find_polynomial_roots_with};
use crate::numerical::solver_config::SolverConfig;
use crate::symbolic::polynomial_parser::{
    DEFAULT_VARIABLE, format_polynomial, parse_latex_equation,
};
use log::info;
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

pub struct PolySolver {
    pub config: SolverConfig,
    /// highest power first
    pub coefficients: Vec<f64>,
    /// source text when the coefficients came from [`PolySolver::set_equation`]
    pub equation: Option<String>,
    /// log file written by the last [`PolySolver::solve`], if any
    pub log_file: Option<PathBuf>,
    result: Option<RootReport>,
}

impl Default for PolySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PolySolver {
    pub fn new() -> Self {
        PolySolver {
            config: SolverConfig::default(),
            coefficients: Vec::new(),
            equation: None,
            log_file: None,
            result: None,
        }
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    pub fn set_coefficients(&mut self, coefficients: Vec<f64>) {
        self.coefficients = coefficients;
        self.equation = None;
        self.result = None;
    }

    /// Parses a plain or LaTeX equation in `x` and stores its coefficients.
    pub fn set_equation(&mut self, equation: &str) -> Result<(), SolverError> {
        let parsed = parse_latex_equation(equation)?;
        self.coefficients = parsed.coefficients;
        self.equation = Some(equation.to_string());
        self.result = None;
        Ok(())
    }

    /// Validates the configuration, sets up logging, solves and keeps the report.
    pub fn solve(&mut self) -> Result<&RootReport, SolverError> {
        self.config.validate()?;
        let log_dir = if self.config.log_to_file {
            Some(std::env::current_dir().map_err(|e| SolverError::Logger(e.to_string()))?)
        } else {
            None
        };
        self.log_file = init_logger(self.config.loglevel.as_deref(), log_dir.as_deref())?;

        let var = DEFAULT_VARIABLE.to_string();
        match &self.equation {
            Some(equation) => info!("solving {}", equation),
            None => info!(
                "solving {} = 0",
                format_polynomial(&self.coefficients, &var)
            ),
        }
        let report = find_polynomial_roots_with(&self.coefficients, &self.config)?;
        info!("\n \n ROOTS \n \n {}", report_table(&report));
        Ok(&*self.result.insert(report))
    }

    pub fn get_result(&self) -> Option<&RootReport> {
        self.result.as_ref()
    }
}

/// Summary of a report as a rounded table: method, iterations, then one row per root.
pub fn report_table(report: &RootReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["".to_string(), "value".to_string()]);
    builder.push_record(["method".to_string(), report.method.to_string()]);
    let iterations = report
        .iterations
        .map_or_else(|| "-".to_string(), |i| i.to_string());
    builder.push_record(["iterations".to_string(), iterations]);
    builder.push_record(["converged".to_string(), report.converged.to_string()]);
    for (i, root) in report.real_roots.iter().enumerate() {
        builder.push_record([format!("real root {}", i + 1), format!("{:.6}", root)]);
    }
    for (i, root) in report.complex_roots.iter().enumerate() {
        builder.push_record([
            format!("complex pair {}", i + 1),
            format!("{} and conjugate", format_complex_default(*root)),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}
