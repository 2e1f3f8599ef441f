#![allow(non_snake_case)]
use RustedMathKit::Examples::calculus_examples::calculus_examples;
use RustedMathKit::Examples::roots_examples::roots_examples;
use RustedMathKit::Examples::symbolic_examples::sym_examples;
use RustedMathKit::Examples::utils_examples::utils_examples;

fn main() {
    let example = 3;
    match example {
        0 => sym_examples(0),
        1 => sym_examples(1),
        2 => sym_examples(2),
        3 => roots_examples(3),
        4 => {
            for task in 0..3 {
                roots_examples(task);
            }
            roots_examples(4);
        }
        5 => {
            for task in 0..3 {
                calculus_examples(task);
            }
        }
        6 => {
            utils_examples(0);
            utils_examples(1);
        }
        _ => {
            println!("example {} does not exist", example);
        }
    }
}
