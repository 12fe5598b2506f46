use std::iter::FusedIterator;

use log::{debug, trace};

use crate::{
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Pull-based scanner over a single line of source.
///
/// Every call to [`Lexer::next_token`] consumes one token's worth of input.
/// Once the buffer is exhausted the lexer keeps answering with
/// `EndOfFileToken` at the same position.
pub struct Lexer<'a, D: Diagnostics> {
    source: &'a str,
    pos: usize,
    diagnostics: D,
}

impl<'a, D: Diagnostics> Lexer<'a, D> {
    pub fn new(source: &'a str, diagnostics: D) -> Lexer<'a, D> {
        debug!("Initializing lexer over {} bytes", source.len());

        Lexer {
            source,
            pos: 0,
            diagnostics,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(offset)
    }

    fn at(&self) -> Option<char> {
        self.peek(0)
    }

    fn lookahead(&self) -> Option<char> {
        self.peek(1)
    }

    fn advance(&mut self) {
        if let Some(c) = self.at() {
            self.pos += c.len_utf8();
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.at().is_some_and(&predicate) {
            self.advance();
        }
    }

    pub fn next_token(&mut self) -> Token {
        let start = self.pos;

        let current = match self.at() {
            Some(c) => c,
            None => return MK_TOKEN!(TokenKind::EndOfFileToken, start, ""),
        };

        if let Some(token) = self.number(start) {
            return token;
        }

        let token = match current {
            c if c.is_whitespace() => self.whitespace(start),

            '+' => self.symbol(TokenKind::PlusToken, 1),
            '-' => self.symbol(TokenKind::MinusToken, 1),
            '*' => self.symbol(TokenKind::MultiplyToken, 1),
            '/' => self.symbol(TokenKind::DivideToken, 1),
            '(' => self.symbol(TokenKind::OpenParenthesisToken, 1),
            ')' => self.symbol(TokenKind::CloseParenthesisToken, 1),

            '&' if self.lookahead() == Some('&') => {
                self.symbol(TokenKind::AmpersandAmpersandToken, 2)
            }
            '|' if self.lookahead() == Some('|') => self.symbol(TokenKind::PipePipeToken, 2),
            '=' if self.lookahead() == Some('=') => self.symbol(TokenKind::EqualsEqualsToken, 2),
            '=' => self.symbol(TokenKind::EqualsToken, 1),
            '!' if self.lookahead() == Some('=') => self.symbol(TokenKind::BangEqualToken, 2),
            '!' => self.symbol(TokenKind::BangToken, 1),

            '"' => self.string(start),

            c if is_identifier_start(c) => self.identifier(start),

            _ => self.bad_token(start),
        };

        trace!("{} at {}", token.kind, token.position);
        token
    }

    /// Digit runs only count as numbers when whitespace or the end of input
    /// follows them. Otherwise the cursor is restored and `None` returned.
    fn number(&mut self, start: usize) -> Option<Token> {
        if !self.at().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }

        self.advance_while(|c| c.is_ascii_digit());

        if self.at().is_some_and(|c| !c.is_whitespace()) {
            self.pos = start;
            return None;
        }

        let source = self.source;
        let text = &source[start..self.pos];
        let value = match text.parse::<i32>() {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("Failed to decode {:?}: {}", text, err);
                self.diagnostics.report(Error::new(
                    ErrorImpl::NumberParseError {
                        token: text.to_string(),
                    },
                    start,
                ));
                None
            }
        };

        Some(MK_TOKEN!(TokenKind::NumberToken, start, text, value))
    }

    fn whitespace(&mut self, start: usize) -> Token {
        self.advance_while(char::is_whitespace);
        MK_TOKEN!(TokenKind::WhitespaceToken, start, &self.source[start..self.pos])
    }

    fn symbol(&mut self, kind: TokenKind, chars: usize) -> Token {
        let start = self.pos;
        for _ in 0..chars {
            self.advance();
        }
        MK_TOKEN!(kind, start, &self.source[start..self.pos])
    }

    fn string(&mut self, start: usize) -> Token {
        // Opening quote.
        self.advance();
        let source = self.source;
        let content_start = self.pos;

        loop {
            match self.at() {
                Some('"') => {
                    let content = &source[content_start..self.pos];
                    self.advance();
                    return MK_TOKEN!(TokenKind::StringToken, start, content);
                }
                Some(c @ ('\n' | '\r')) => {
                    debug!("Unterminated string literal starting at {}", start);
                    let newline = self.pos;
                    self.advance();
                    return MK_TOKEN!(TokenKind::BadToken, newline, c.to_string());
                }
                Some(_) => self.advance(),
                None => {
                    debug!("String literal starting at {} runs off the end of input", start);
                    self.pos = start;
                    return self.bad_token(start);
                }
            }
        }
    }

    fn identifier(&mut self, start: usize) -> Token {
        self.advance_while(is_identifier_continue);
        let source = self.source;
        let text = &source[start..self.pos];

        let kind = RESERVED_LOOKUP
            .get(text)
            .copied()
            .unwrap_or(TokenKind::IdentifierToken);

        MK_TOKEN!(kind, start, text)
    }

    fn bad_token(&mut self, start: usize) -> Token {
        self.advance();
        MK_TOKEN!(TokenKind::BadToken, start, &self.source[start..self.pos])
    }
}

impl<D: Diagnostics> Iterator for Lexer<'_, D> {
    type Item = Token;

    /// Yields every token up to, but not including, `EndOfFileToken`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfFileToken).then_some(token)
    }
}

impl<D: Diagnostics> FusedIterator for Lexer<'_, D> {}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Drains a fresh lexer over `source` into a vector ending in exactly one
/// `EndOfFileToken`.
pub fn tokenize<D: Diagnostics>(source: &str, diagnostics: D) -> Vec<Token> {
    let mut lex = Lexer::new(source, diagnostics);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EndOfFileToken;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
