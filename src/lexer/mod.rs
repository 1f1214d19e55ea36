//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! sequence of classified tokens in a single left-to-right pass. It handles:
//!
//! - Reserved words and identifiers (identifiers are recorded in the symbol table)
//! - Integer literals and string literals
//! - One- and two-character operators, and delimiters
//! - Token position tracking for error reporting
//!
//! Every token class uses maximal munch: a run is extended as far as the
//! class allows before the token is emitted.

pub mod lexer;
pub mod tokens;
