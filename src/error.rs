use std::fmt::Display;

use crate::token::Token;

/// A run-time failure. Interpretation unwinds to the top of the interpret
/// loop as soon as one of these is raised; side effects already performed
/// stay in effect.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    InvalidOperand { operator: Token, msg: String },
    UndefinedVariable { name: Token },
    LoopControlOutsideLoop { token: Token },
}

impl RuntimeError {
    pub fn invalid_operand(operator: &Token, msg: &str) -> Self {
        Self::InvalidOperand {
            operator: operator.clone(),
            msg: msg.to_owned(),
        }
    }

    pub fn undefined_variable(name: &Token) -> Self {
        Self::UndefinedVariable { name: name.clone() }
    }

    pub fn line(&self) -> i32 {
        match self {
            Self::InvalidOperand { operator, .. } => operator.line,
            Self::UndefinedVariable { name } => name.line,
            Self::LoopControlOutsideLoop { token } => token.line,
        }
    }
}

impl Display for RuntimeError {
    // Runtime errors report as the message first, then the line
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { msg, .. } => {
                write!(f, "{}\n[line {}]", msg, self.line())
            }
            Self::UndefinedVariable { name } => {
                write!(
                    f,
                    "Undefined variable '{}'.\n[line {}]",
                    name.lexeme,
                    name.line
                )
            }
            Self::LoopControlOutsideLoop { token } => {
                write!(
                    f,
                    "Cannot use '{}' outside of a loop.\n[line {}]",
                    token.lexeme,
                    token.line
                )
            }
        }
    }
}
