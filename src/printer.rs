use crate::prelude::*;

#[allow(unused)]
pub struct AstPrinter;

impl AstPrinter {
    #[allow(unused)]
    pub fn to_string(expr: &Expr) -> String {
        match expr {
            Expr::Binary { left, operator, right } => {
                format!(
                    "({} {} {})",
                    operator.lexeme,
                    Self::to_string(left),
                    Self::to_string(right)
                )
            }
            Expr::Ternary { condition, left, right } => {
                format!(
                    "(?: {} {} {})",
                    Self::to_string(condition),
                    Self::to_string(left),
                    Self::to_string(right)
                )
            }
            Expr::Grouping { expr } => format!("(group {})", Self::to_string(expr)),
            Expr::Literal { value } => format!("{value}"),
            Expr::Unary { operator, right } => {
                format!("({} {})", operator.lexeme, Self::to_string(right))
            }
            Expr::Variable { name } => name.lexeme.clone(),
            Expr::Assignment { name, value } => {
                format!("{} = {}", name.lexeme, Self::to_string(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;

    #[test]
    fn print_an_ast() {
        // This is '-123 * (45.67)'
        let expr = Expr::Binary {
            left: Box::new(Expr::Unary {
                operator: Token::new(TokenType::Minus, "-", None, 1),
                right: Box::new(Expr::number_literal(123.0)),
            }),
            operator: Token::new(TokenType::Star, "*", None, 1),
            right: Box::new(Expr::Grouping { expr: Box::new(Expr::number_literal(45.67)) }),
        };

        let res = AstPrinter::to_string(&expr);
        assert_eq!(res, "(* (- 123) (group 45.67))".to_owned());
    }

    #[test]
    fn print_a_ternary() {
        let expr = Expr::Ternary {
            condition: Box::new(Expr::Literal { value: Object::Boolean(true) }),
            left: Box::new(Expr::number_literal(1.0)),
            right: Box::new(Expr::number_literal(2.0)),
        };

        assert_eq!(AstPrinter::to_string(&expr), "(?: true 1 2)".to_owned());
    }
}
