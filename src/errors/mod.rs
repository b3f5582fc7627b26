//! Error types and error handling for the lexer.
//!
//! This module defines the error surface of lexical analysis:
//!
//! - Error structure with source position information
//! - The lexical error variant
//! - Error formatting and display functionality

pub mod errors;
