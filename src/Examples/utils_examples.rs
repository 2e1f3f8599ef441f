use crate::Utils::task_parser::parse_task_document;
use crate::numerical::solver_config::SolverConfig;

#[allow(dead_code)]
pub fn utils_examples(example: usize) {
    match example {
        0 => {
            // TASK DOCUMENTS
            let input = r#"
                // settings for a run with clustered roots
                solver
                tolerance: 1e-10
                max_iterations: 400
                # quiet terminal
                logging loglevel: warn log_to_file: false
                "#;
            match parse_task_document(input) {
                Ok(document) => println!("{:?}", document),
                Err(e) => println!("{}", e),
            }
        }
        1 => {
            let input = "solver tolerance: 1e-10 max_iterations: 400\nlogging loglevel: warn";
            match SolverConfig::from_task_document(input) {
                Ok(config) => println!("{:?}", config),
                Err(e) => println!("{}", e),
            }
            // unknown keys are rejected
            if let Err(e) = SolverConfig::from_task_document("solver step: 0.1") {
                println!("{}", e);
            }
        }
        _ => {
            println!("no such example: {}", example);
        }
    }
}
