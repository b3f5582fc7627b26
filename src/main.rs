use std::{env, fs::read_to_string, process::exit, time::Instant};

use minilang::{display_error, lexer::lexer::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let tokens = tokenize(source.clone(), Some(String::from(file_name)));

    match tokens {
        Ok(tokens) => {
            for token in &tokens {
                println!("{}", token);
            }
            println!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());
        }
        Err(error) => {
            display_error(error, &source, file_name);
            exit(1);
        }
    }
}
