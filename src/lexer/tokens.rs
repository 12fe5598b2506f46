use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("break", TokenKind::BreakKeyword);
        map.insert("continue", TokenKind::ContinueKeyword);
        map.insert("else", TokenKind::ElseKeyword);
        map.insert("false", TokenKind::FalseKeyword);
        map.insert("for", TokenKind::ForKeyword);
        map.insert("if", TokenKind::IfKeyword);
        map.insert("let", TokenKind::LetKeyword);
        map.insert("true", TokenKind::TrueKeyword);
        map.insert("var", TokenKind::VarKeyword);
        map.insert("while", TokenKind::WhileKeyword);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    NumberToken,
    WhitespaceToken,

    PlusToken,
    MinusToken,
    MultiplyToken,
    DivideToken,
    OpenParenthesisToken,
    CloseParenthesisToken,

    BadToken,
    EndOfFileToken,

    // Never produced, identifiers and keywords replaced it.
    LetterToken,

    AmpersandAmpersandToken, // &&
    PipePipeToken,           // ||
    EqualsEqualsToken,       // ==
    BangEqualToken,          // !=
    BangToken,               // !
    EqualsToken,             // =

    // Reserved
    BreakKeyword,
    ContinueKeyword,
    ElseKeyword,
    FalseKeyword,
    ForKeyword,
    IfKeyword,
    LetKeyword,
    TrueKeyword,
    VarKeyword,
    WhileKeyword,

    IdentifierToken,
    StringToken,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One lexical unit. Owns its text, so it outlives the scanner that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
    pub text: String,
    pub value: Option<i32>,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize, text: String, value: Option<i32>) -> Self {
        Token {
            kind,
            position,
            text,
            value,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}'", self.kind, self.text)?;
        if let Some(value) = self.value {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}
