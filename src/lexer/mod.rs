//! Lexical analysis module for the mini language.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for a downstream parser. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - A closed, priority-ordered set of token kinds
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
