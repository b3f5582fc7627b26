use std::fmt::Display;

use crate::Span;

/// The closed set of lexical categories the scanner recognises.
///
/// Declaration order is semantically significant: the scanner tries each
/// kind's pattern top to bottom and the first anchored match wins, so an
/// earlier kind shadows any later kind that could match at the same
/// position. Append new kinds; reordering existing ones changes behaviour.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    LeftParen,
    RightParen,
    Semicolon,
}

impl TokenKind {
    /// Every kind, in priority order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Number,
        TokenKind::Addition,
        TokenKind::Subtraction,
        TokenKind::Multiplication,
        TokenKind::Division,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Semicolon,
    ];

    /// The one recognition pattern this kind owns.
    pub fn pattern(&self) -> &'static str {
        match self {
            TokenKind::Number => "[0-9]+",
            TokenKind::Addition => "\\+",
            TokenKind::Subtraction => "-",
            TokenKind::Multiplication => "\\*",
            TokenKind::Division => "/",
            TokenKind::LeftParen => "\\(",
            TokenKind::RightParen => "\\)",
            TokenKind::Semicolon => ";",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One recognised unit of text. Immutable once produced; owns a copy of
/// its lexeme rather than borrowing from the scanned buffer.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    /// Offset of the first character of the lexeme.
    pub fn start(&self) -> u32 {
        self.span.start.0
    }

    /// Offset of the last character of the lexeme, inclusive.
    pub fn end(&self) -> u32 {
        self.span.end.0
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ kind: {}, lexeme: {:?}, start: {}, end: {} }}",
            self.kind,
            self.lexeme,
            self.start(),
            self.end()
        )
    }
}
