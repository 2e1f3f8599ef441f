//! examples of usage of RustedMathKit
/// limits, derivatives, Taylor coefficients and integrals
pub mod calculus_examples;
/// closed forms, Durand-Kerner and the solver front end
pub mod roots_examples;
/// expression parsing, evaluation and polynomial text
pub mod symbolic_examples;
/// task documents and solver configuration
pub mod utils_examples;
