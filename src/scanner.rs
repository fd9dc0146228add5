use crate::prelude::*;

/// A lexical error. The scanner records these and keeps going, so one pass
/// can accumulate several of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub line: i32,
    pub message: String,
}

#[derive(Debug)]
pub struct Scanner {
    source_chars: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
    start: usize,
    current: usize,
    line: i32,
    // Line on which the current lexeme started. Tokens are tagged with this,
    // not with `line`, so a multi-line string reports its opening quote.
    start_line: i32,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source_chars: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    pub fn scan_tokens(&mut self) -> (Vec<Token>, Vec<ScanError>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenType::EOF, "", None, self.line));

        // Take our temporary vectors out. They will be replaced by the
        // default() value for the vector
        (
            std::mem::take(&mut self.tokens),
            std::mem::take(&mut self.errors),
        )
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source_chars.len()
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),
            '?' => self.add_token(TokenType::Question),
            ':' => self.add_token(TokenType::Colon),
            '!' => {
                let token_type = if self.match_next('=') {
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                };
                self.add_token(token_type);
            }
            '=' => {
                let token_type = if self.match_next('=') {
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                };
                self.add_token(token_type);
            }
            '<' => {
                let token_type = if self.match_next('=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.add_token(token_type);
            }
            '>' => {
                let token_type = if self.match_next('=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.add_token(token_type);
            }
            '/' => {
                if self.match_next('/') {
                    // Go until end of the commented line
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else if self.match_next('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenType::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
            }
            '"' => self.string(),
            '0'..='9' => self.number(),
            c if is_alpha(c) => self.identifier(),
            _ => self.error("Unexpected character."),
        }
    }

    fn error(&mut self, message: &str) {
        self.errors.push(ScanError {
            line: self.start_line,
            message: message.to_owned(),
        });
    }

    fn advance(&mut self) -> char {
        let ch = self.source_chars.get(self.current);
        self.current += 1;

        *ch.expect("failed to read char!")
    }

    fn add_token(&mut self, token_type: TokenType) {
        self.add_token_with_literal(token_type, None);
    }

    fn source_substring(&self, start: usize, end: usize) -> String {
        self.source_chars.get(start..end).unwrap().iter().collect()
    }

    fn add_token_with_literal(&mut self, token_type: TokenType, literal_value: Option<Object>) {
        let text = self.source_substring(self.start, self.current);
        let token = Token::new(token_type, &text, literal_value, self.start_line);
        self.tokens.push(token);
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.is_at_end() {
            return false;
        }

        if let Some(c) = self.source_chars.get(self.current) {
            if c == &expected {
                self.current += 1;
                return true;
            }
        }

        false
    }

    fn peek(&self) -> char {
        *self.source_chars.get(self.current).unwrap_or(&'\0')
    }

    fn peek_next(&self) -> char {
        *self.source_chars.get(self.current + 1).unwrap_or(&'\0')
    }

    /// Discard everything up to and including the closing `*/`. The comment
    /// only ends on the adjacent pair; a lone `*` or `/` inside is content.
    fn block_comment(&mut self) {
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }

            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        self.error("Unterminated block comment.");
    }

    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error("Unterminated string.");
            return;
        }

        // The closing "
        self.advance();

        // Skip the quote marks
        let text = self.source_substring(self.start + 1, self.current - 1);
        self.add_token_with_literal(TokenType::StringLiteral, Some(Object::String(text)));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A '.' is part of the literal only when a digit follows it
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            // Consume '.'
            self.advance();

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.source_substring(self.start, self.current);
        let value = text
            .parse::<f64>()
            .unwrap_or_else(|_| panic!("failed to parse number: {}", text));

        self.add_token_with_literal(TokenType::Number, Some(Object::Number(value)));
    }

    fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let text = self.source_substring(self.start, self.current);
        let token_type = get_keyword(&text).unwrap_or(TokenType::Identifier);
        self.add_token(token_type);
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

fn get_keyword(text: &str) -> Option<TokenType> {
    match text {
        "and" => Some(TokenType::And),
        "class" => Some(TokenType::Class),
        "else" => Some(TokenType::Else),
        "false" => Some(TokenType::False),
        "for" => Some(TokenType::For),
        "fun" => Some(TokenType::Fun),
        "if" => Some(TokenType::If),
        "nil" => Some(TokenType::Nil),
        "or" => Some(TokenType::Or),
        "print" => Some(TokenType::Print),
        "return" => Some(TokenType::Return),
        "super" => Some(TokenType::Super),
        "this" => Some(TokenType::This),
        "true" => Some(TokenType::True),
        "var" => Some(TokenType::Var),
        "while" => Some(TokenType::While),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> (Vec<Token>, Vec<ScanError>) {
        Scanner::new(source).scan_tokens()
    }

    fn scan_ok(source: &str) -> Vec<Token> {
        let (tokens, errors) = scan(source);
        assert!(errors.is_empty(), "unexpected scan errors: {:?}", errors);
        tokens
    }

    fn token_types(source: &str) -> Vec<TokenType> {
        scan_ok(source).into_iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn every_keyword_scans_as_its_own_type() {
        let cases = [
            ("and", TokenType::And),
            ("class", TokenType::Class),
            ("else", TokenType::Else),
            ("false", TokenType::False),
            ("for", TokenType::For),
            ("fun", TokenType::Fun),
            ("if", TokenType::If),
            ("nil", TokenType::Nil),
            ("or", TokenType::Or),
            ("print", TokenType::Print),
            ("return", TokenType::Return),
            ("super", TokenType::Super),
            ("this", TokenType::This),
            ("true", TokenType::True),
            ("var", TokenType::Var),
            ("while", TokenType::While),
        ];

        for (text, expected) in cases {
            let tokens = scan_ok(text);
            assert_eq!(tokens[0].token_type, expected, "keyword {}", text);
            assert_eq!(tokens[0].lexeme, text);
        }
    }

    #[test]
    fn non_keywords_scan_as_identifiers() {
        // Note that break/continue are not reserved words
        for text in ["foo", "_bar", "break", "continue", "whilex", "nil2"] {
            let tokens = scan_ok(text);
            assert_eq!(tokens[0].token_type, TokenType::Identifier, "{}", text);
        }
    }

    #[test]
    fn maximal_munch_on_two_char_operators() {
        assert_eq!(
            token_types("<= >= == != < > = !"),
            vec![
                TokenType::LessEqual,
                TokenType::GreaterEqual,
                TokenType::EqualEqual,
                TokenType::BangEqual,
                TokenType::Less,
                TokenType::Greater,
                TokenType::Equal,
                TokenType::Bang,
                TokenType::EOF,
            ]
        );
    }

    #[test]
    fn star_emits_exactly_one_token() {
        assert_eq!(
            token_types("*"),
            vec![TokenType::Star, TokenType::EOF]
        );
    }

    #[test]
    fn ternary_punctuation() {
        assert_eq!(
            token_types("a ? 1 : 2"),
            vec![
                TokenType::Identifier,
                TokenType::Question,
                TokenType::Number,
                TokenType::Colon,
                TokenType::Number,
                TokenType::EOF,
            ]
        );
    }

    #[test]
    fn line_comment_is_discarded() {
        let tokens = scan_ok("1 // a comment\n2");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].literal, Some(Object::Number(2.0)));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn block_comment_is_discarded_and_counts_lines() {
        let tokens = scan_ok("1 /* a * lone\nstar / and slash */ 2");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unterminated_block_comment_reports_an_error() {
        let (tokens, errors) = scan("1 /* never closed");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unterminated block comment.");
        // The number before the comment and the sentinel are still there
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].token_type, TokenType::EOF);
    }

    #[test]
    fn slash_alone_is_division() {
        assert_eq!(
            token_types("8 / 4"),
            vec![
                TokenType::Number,
                TokenType::Slash,
                TokenType::Number,
                TokenType::EOF
            ]
        );
    }

    #[test]
    fn number_literals() {
        let tokens = scan_ok("123 3.14");
        assert_eq!(tokens[0].literal, Some(Object::Number(123.0)));
        assert_eq!(tokens[1].literal, Some(Object::Number(3.14)));
    }

    #[test]
    fn trailing_dot_is_not_part_of_the_number() {
        let tokens = scan_ok("123.");
        assert_eq!(tokens[0].token_type, TokenType::Number);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[1].token_type, TokenType::Dot);
    }

    #[test]
    fn string_literal_drops_the_quotes() {
        let tokens = scan_ok(r#""hello""#);
        assert_eq!(tokens[0].token_type, TokenType::StringLiteral);
        assert_eq!(tokens[0].lexeme, r#""hello""#);
        assert_eq!(tokens[0].literal, Some(Object::String("hello".into())));
    }

    #[test]
    fn multi_line_string_reports_its_opening_line() {
        let tokens = scan_ok("\n\"one\ntwo\"");
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[0].literal, Some(Object::String("one\ntwo".into())));
        // Line counter kept running for the sentinel
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn unterminated_string_reports_one_error_and_no_token() {
        let (tokens, errors) = scan("\"never closed");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unterminated string.");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, TokenType::EOF);
    }

    #[test]
    fn unexpected_character_is_skipped_and_reported() {
        let (tokens, errors) = scan("1 @ 2 #");
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.message == "Unexpected character."));
        // Both numbers survive
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn lexemes_reproduce_the_source_without_whitespace_and_comments() {
        let source = "var x=(1+2.5)>=3;/*gone*/!true//also gone\n;";
        let stripped: String = source
            .replace("/*gone*/", "")
            .replace("//also gone", "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let rebuilt: String = scan_ok(source).iter().map(|t| t.lexeme.clone()).collect();
        assert_eq!(rebuilt, stripped);
    }
}
