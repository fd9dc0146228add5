use crate::prelude::*;

type EvalResult = Result<Object, RuntimeError>;

/// How a statement finished. `break` and `continue` travel on this channel,
/// not on the error channel, so nested blocks and conditionals re-propagate
/// them untouched until the nearest loop intercepts them.
#[derive(Debug, PartialEq)]
pub enum Flow {
    Normal,
    Break(Token),
    Continue(Token),
}

pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Execute top-level statements in order, stopping at the first runtime
    /// error. A `break`/`continue` that escapes every loop surfaces as a
    /// runtime error here.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            match self.execute(stmt)? {
                Flow::Normal => {}
                Flow::Break(token) | Flow::Continue(token) => {
                    return Err(RuntimeError::LoopControlOutsideLoop { token });
                }
            }
        }

        Ok(())
    }

    pub fn execute(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        match stmt {
            Stmt::Expression { expr } => {
                self.evaluate_expr(expr)?;
            }
            Stmt::Print { expr } => {
                let value = self.evaluate_expr(expr)?;
                println!("{value}");
            }
            Stmt::Var { name, initializer } => {
                let value = if let Some(expr) = initializer {
                    self.evaluate_expr(expr)?
                } else {
                    Object::Nil
                };

                self.environment.define(&name.lexeme, value);
            }
            Stmt::Block { statements } => {
                return self.execute_block(statements);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition_result = self.evaluate_expr(condition)?;

                if condition_result.is_truthy() {
                    return self.execute(then_branch);
                } else if let Some(stmt) = else_branch {
                    return self.execute(stmt);
                }
            }
            Stmt::While {
                condition, body, ..
            } => loop {
                let value = self.evaluate_expr(condition)?;
                if !value.is_truthy() {
                    break;
                }

                match self.execute(body)? {
                    // A break ends the loop with no further condition check;
                    // a continue falls through to the next condition check.
                    Flow::Break(_) => break,
                    Flow::Continue(_) | Flow::Normal => {}
                }
            },
            Stmt::Break { token } => return Ok(Flow::Break(token.clone())),
            Stmt::Continue { token } => return Ok(Flow::Continue(token.clone())),
        };

        Ok(Flow::Normal)
    }

    fn execute_block(&mut self, statements: &[Stmt]) -> Result<Flow, RuntimeError> {
        self.environment.push_scope();

        for stmt in statements {
            match self.execute(stmt) {
                Ok(Flow::Normal) => {}
                other => {
                    // The scope is discarded even when we unwind through it
                    self.environment.pop_scope();
                    return other;
                }
            }
        }

        self.environment.pop_scope();
        Ok(Flow::Normal)
    }

    pub fn evaluate_expr(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Grouping { expr: inner } => self.evaluate_expr(inner.as_ref()),
            Expr::Unary { operator, right } => self.evaluate_unary(operator, right),
            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),
            Expr::Ternary {
                condition,
                left,
                right,
            } => {
                // Deliberately not short-circuiting: the condition and both
                // branches all evaluate, left then right, every time.
                let condition = self.evaluate_expr(condition)?;
                let left = self.evaluate_expr(left)?;
                let right = self.evaluate_expr(right)?;

                if condition.is_truthy() {
                    Ok(left)
                } else {
                    Ok(right)
                }
            }
            Expr::Variable { name } => self.environment.get(name),
            Expr::Assignment { name, value } => {
                let value = self.evaluate_expr(value.as_ref())?;
                self.environment.assign(name, value.clone())?;

                // Assignment is an expression; it yields the assigned value
                Ok(value)
            }
        }
    }

    fn evaluate_unary(&mut self, operator: &Token, right: &Expr) -> EvalResult {
        let value = self.evaluate_expr(right)?;
        match operator.token_type {
            TokenType::Minus => {
                if let Object::Number(n) = value {
                    Ok(Object::Number(-n))
                } else {
                    Err(RuntimeError::invalid_operand(
                        operator,
                        "Operand must be a number.",
                    ))
                }
            }
            TokenType::Bang => Ok(Object::Boolean(!value.is_truthy())),

            // Unreachable code. We don't have any unary expression except the ones above.
            _ => Ok(Object::Nil),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> EvalResult {
        let left_value = self.evaluate_expr(left)?;
        let right_value = self.evaluate_expr(right)?;

        match operator.token_type {
            TokenType::Plus => self.evaluate_plus(operator, left_value, right_value),
            TokenType::Minus => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Number(l - r)),
            TokenType::Star => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Number(l * r)),
            // Division by zero follows IEEE-754: it yields an infinity or NaN
            TokenType::Slash => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Number(l / r)),
            TokenType::Greater => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Boolean(l > r)),
            TokenType::GreaterEqual => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Boolean(l >= r)),
            TokenType::Less => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Boolean(l < r)),
            TokenType::LessEqual => self
                .check_number_operands(operator, &left_value, &right_value)
                .map(|(l, r)| Object::Boolean(l <= r)),

            TokenType::EqualEqual => Ok(Object::Boolean(left_value == right_value)),
            TokenType::BangEqual => Ok(Object::Boolean(left_value != right_value)),

            // Unreachable code
            _ => Ok(Object::Nil),
        }
    }

    /// `+` adds two numbers, or concatenates when either side is a string.
    /// In the mixed case the number side is converted to its display text.
    fn evaluate_plus(&self, operator: &Token, left: Object, right: Object) -> EvalResult {
        match (&left, &right) {
            (Object::Number(l), Object::Number(r)) => Ok(Object::Number(l + r)),
            (Object::String(l), Object::String(r)) => Ok(Object::String(format!("{l}{r}"))),
            (Object::String(l), Object::Number(r)) => Ok(Object::String(format!("{l}{r}"))),
            (Object::Number(l), Object::String(r)) => Ok(Object::String(format!("{l}{r}"))),
            _ => Err(RuntimeError::invalid_operand(
                operator,
                "Operands must be two numbers or two strings.",
            )),
        }
    }

    fn check_number_operands(
        &self,
        operator: &Token,
        left: &Object,
        right: &Object,
    ) -> Result<(f64, f64), RuntimeError> {
        if let (Some(l), Some(r)) = (left.number(), right.number()) {
            Ok((l, r))
        } else {
            Err(RuntimeError::invalid_operand(
                operator,
                "Operands must be numbers.",
            ))
        }
    }
}
