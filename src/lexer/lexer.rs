use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

lazy_static! {
    /// Compiled recognition rules, one per kind, in declaration order.
    /// Priority lives in the ordering, not in match length.
    static ref RULES: Vec<(TokenKind, Regex)> = TokenKind::ALL
        .iter()
        .map(|kind| (*kind, Regex::new(kind.pattern()).unwrap()))
        .collect();
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The character at the cursor. Callers check `at_eof` first.
    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Scans `source` left to right and returns the full ordered token stream.
///
/// Whitespace between tokens is discarded. At every other position each
/// kind's pattern is tried in declaration order, anchored at the cursor;
/// the first kind that matches wins. If no kind matches, the whole scan
/// fails with a lexical error carrying the offending offset and any tokens
/// accumulated so far are discarded.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let current = lex.at();

        // Whitespace never starts or ends a token span.
        if current.is_whitespace() {
            lex.advance_n(current.len_utf8());
            continue;
        }

        let mut matched = false;

        for (kind, regex) in RULES.iter() {
            // Anchored: a hit further into the remainder does not count.
            let lexeme = match regex.find(lex.remainder()) {
                Some(found) if found.start() == 0 => String::from(found.as_str()),
                _ => continue,
            };

            let start = lex.pos;
            let end = start + lexeme.len() - 1;

            lex.push(MK_TOKEN!(
                *kind,
                lexeme.clone(),
                Span {
                    start: Position(start as u32, Rc::clone(&lex.file)),
                    end: Position(end as u32, Rc::clone(&lex.file)),
                }
            ));
            lex.advance_n(lexeme.len());
            matched = true;
            break;
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: current.to_string(),
                },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    Ok(lex.tokens)
}
