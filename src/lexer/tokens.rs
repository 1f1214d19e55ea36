use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("float");
        set.insert("return");
        set.insert("if");
        set.insert("else");
        set.insert("for");
        set.insert("while");
        set.insert("break");
        set.insert("continue");
        set.insert("void");
        set.insert("char");
        set.insert("double");
        set.insert("include");
        set.insert("define");
        set
    };
}

pub const WHITESPACE_CHARS: &str = " \t\n\r";
pub const OPERATOR_CHARS: &str = "+-*/=><!&|";
pub const DELIMITER_CHARS: &str = "(),{}[];";
pub const QUOTE: char = '"';

/// Operators made of two characters. Anything else starting with an
/// operator character is a single-character operator.
pub const TWO_CHAR_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "&&", "||"];

pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Reserved,
    Identifier,
    Number,
    Operator,
    Delimiter,
    String,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Reserved => "RESERVED",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::String => "STRING",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}

impl Token {
    /// The `(kind, lexeme)` pair, without position information.
    pub fn pair(&self) -> (TokenKind, &str) {
        (self.kind, self.value.as_str())
    }
}
