use std::env;

use loxide::{Lox, RunStatus};

fn main() -> Result<(), anyhow::Error> {
    let mut args = env::args().skip(1).collect::<Vec<_>>();

    let mut lox = Lox::new();
    match args.len() {
        1 => {
            let filename = args.pop().unwrap();
            match lox.run_file(filename.as_ref())? {
                RunStatus::Ok => Ok(()),
                RunStatus::SyntaxError => std::process::exit(65),
                RunStatus::RuntimeError => std::process::exit(70),
            }
        }
        2.. => {
            println!("Usage: loxide [script]");
            std::process::exit(64);
        }
        _ => lox.run_prompt(),
    }
}
