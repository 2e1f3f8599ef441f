use crate::Utils::logger::parse_log_level;
use crate::Utils::task_parser::{Value, parse_task_document};
use crate::numerical::complex_kernel::EPSILON;
use crate::numerical::durand_kerner::{MAX_ITERATIONS, TOLERANCE};
use crate::numerical::errors::SolverError;

/// Settings for [`crate::numerical::poly_solver::PolySolver`] and
/// [`crate::numerical::roots::find_polynomial_roots_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Durand-Kerner stops when the largest correction in a sweep is below this
    pub tolerance: f64,
    /// cap on Durand-Kerner sweeps
    pub max_iterations: usize,
    /// imaginary parts below this classify a root as real
    pub epsilon: f64,
    /// debug, info, warn, error, off/none; None means info
    pub loglevel: Option<String>,
    /// write a log file into the working directory as well as to the terminal
    pub log_to_file: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            epsilon: EPSILON,
            loglevel: Some("info".to_string()),
            log_to_file: false,
        }
    }
}

fn single_value<'a>(key: &str, values: &'a [Value]) -> Result<&'a Value, SolverError> {
    match values {
        [value] => Ok(value),
        _ => Err(SolverError::InvalidConfig(format!(
            "'{}' takes exactly one value, got {}",
            key,
            values.len()
        ))),
    }
}

fn float_value(key: &str, values: &[Value]) -> Result<f64, SolverError> {
    let value = single_value(key, values)?;
    value.as_float().ok_or_else(|| {
        SolverError::InvalidConfig(format!("'{}' must be a number, got '{}'", key, value))
    })
}

fn count_value(key: &str, values: &[Value]) -> Result<usize, SolverError> {
    let value = single_value(key, values)?;
    value
        .as_integer()
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| {
            SolverError::InvalidConfig(format!(
                "'{}' must be a non-negative integer, got '{}'",
                key, value
            ))
        })
}

fn bool_value(key: &str, values: &[Value]) -> Result<bool, SolverError> {
    let value = single_value(key, values)?;
    value.as_boolean().ok_or_else(|| {
        SolverError::InvalidConfig(format!("'{}' must be true or false, got '{}'", key, value))
    })
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    pub fn set_loglevel(&mut self, loglevel: Option<&str>) {
        self.loglevel = loglevel.map(str::to_string);
    }

    pub fn set_log_to_file(&mut self, log_to_file: bool) {
        self.log_to_file = log_to_file;
    }

    /// Checks that the numeric settings are positive and the log level is known.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance > 0.0) {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        if !(self.epsilon > 0.0) {
            return Err(SolverError::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        parse_log_level(self.loglevel.as_deref())?;
        Ok(())
    }

    /// Reads a task document with `solver` and `logging` sections:
    ///
    /// ```text
    /// solver tolerance: 1e-8 max_iterations: 200 epsilon: 1e-9
    /// logging loglevel: warn log_to_file: false
    /// ```
    ///
    /// Missing keys keep their defaults. Unknown sections or keys are rejected.
    pub fn from_task_document(input: &str) -> Result<Self, SolverError> {
        let document = parse_task_document(input).map_err(SolverError::InvalidConfig)?;
        let mut config = SolverConfig::default();
        for (section, pairs) in &document {
            for (key, values) in pairs {
                match (section.as_str(), key.as_str()) {
                    ("solver", "tolerance") => config.tolerance = float_value(key, values)?,
                    ("solver", "max_iterations") => {
                        config.max_iterations = count_value(key, values)?
                    }
                    ("solver", "epsilon") => config.epsilon = float_value(key, values)?,
                    ("logging", "loglevel") => {
                        let value = single_value(key, values)?;
                        config.loglevel = Some(value.to_string());
                    }
                    ("logging", "log_to_file") => config.log_to_file = bool_value(key, values)?,
                    ("solver", _) | ("logging", _) => {
                        return Err(SolverError::InvalidConfig(format!(
                            "unknown key '{}' in section '{}'",
                            key, section
                        )));
                    }
                    _ => {
                        return Err(SolverError::InvalidConfig(format!(
                            "unknown section '{}'",
                            section
                        )));
                    }
                }
            }
        }
        config.validate()?;
        Ok(config)
    }
}
