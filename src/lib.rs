mod ast;
mod environment;
mod error;
mod interpreter;
mod object;
mod parser;
mod printer;
mod scanner;
mod token;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::environment::Environment;
    pub use crate::error::*;
    pub use crate::interpreter::*;
    pub use crate::object::*;
    pub use crate::parser::*;
    pub use crate::printer::*;
    pub use crate::scanner::*;
    pub use crate::token::*;
}

use std::io::{BufRead, Write};

use prelude::{Interpreter, Parser, Scanner, TokenType};

/// How one run of a source text ended. The driver maps these to exit codes;
/// the REPL discards them so one bad line never blocks the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    SyntaxError,
    RuntimeError,
}

pub struct Lox {
    interpreter: Interpreter,
}

impl Lox {
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::new(),
        }
    }

    pub fn run_file(&mut self, filename: &str) -> Result<RunStatus, anyhow::Error> {
        let content = std::fs::read_to_string(filename)?;
        Ok(self.run(content.as_ref()))
    }

    pub fn run_prompt(&mut self) -> Result<(), anyhow::Error> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // EOF
                return Ok(());
            }

            // Each line is a complete mini-program. Errors were already
            // reported; the interpreter (and its globals) lives on.
            self.run(&line);
        }
    }

    pub fn run(&mut self, input: &str) -> RunStatus {
        let mut scanner = Scanner::new(input);
        let (tokens, scan_errors) = scanner.scan_tokens();

        let had_error = !scan_errors.is_empty();
        for e in &scan_errors {
            report(e.line, "", &e.message);
        }

        let statements = match Parser::new(tokens).parse() {
            Ok(stmts) => stmts,
            Err(errors) => {
                for e in errors {
                    if e.token.token_type == TokenType::EOF {
                        report(e.token.line, " at end", &e.message);
                    } else {
                        report(e.token.line, &format!(" at '{}'", e.token.lexeme), &e.message);
                    }
                }
                return RunStatus::SyntaxError;
            }
        };

        // A program with any lexical error is never executed
        if had_error {
            return RunStatus::SyntaxError;
        }

        if let Err(e) = self.interpreter.interpret(&statements) {
            eprintln!("{e}");
            return RunStatus::RuntimeError;
        }

        RunStatus::Ok
    }
}

impl Default for Lox {
    fn default() -> Self {
        Self::new()
    }
}

fn report(line: i32, location: &str, message: &str) {
    eprintln!("[line {line}] Error{location}: {message}");
}
