use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    symbols::symbol_table::SymbolTable,
    Position, Span, MK_TOKEN,
};

use super::tokens::{
    is_digit, is_letter, is_reserved, Token, TokenKind, DELIMITER_CHARS, OPERATOR_CHARS, QUOTE,
    TWO_CHAR_OPERATORS, WHITESPACE_CHARS,
};

pub type ClassHandler = fn(&mut Lexer);

/// A character class and the rule that consumes a run starting with it.
/// The regex is anchored and only ever matches the first character.
pub struct ClassPattern {
    regex: Regex,
    handler: ClassHandler,
}

fn char_class(chars: &str) -> Regex {
    Regex::new(&format!("^[{}]", regex::escape(chars))).unwrap()
}

lazy_static! {
    /// Checked in order, first match wins.
    static ref PATTERNS: Vec<ClassPattern> = vec![
        ClassPattern { regex: char_class(WHITESPACE_CHARS), handler: skip_handler },
        ClassPattern { regex: Regex::new("^[a-zA-Z]").unwrap(), handler: symbol_handler },
        ClassPattern { regex: Regex::new("^[0-9]").unwrap(), handler: number_handler },
        ClassPattern { regex: char_class(OPERATOR_CHARS), handler: operator_handler },
        ClassPattern { regex: char_class(DELIMITER_CHARS), handler: delimiter_handler },
        ClassPattern { regex: char_class(&QUOTE.to_string()), handler: string_handler },
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    symbols: SymbolTable,
    source: &'a str,
    pos: usize,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            symbols: SymbolTable::new(),
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Steps back over the previous character. Does nothing at the start.
    pub fn retreat(&mut self) {
        if let Some(c) = self.source[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    fn push(&mut self, kind: TokenKind, value: String, start: usize) {
        let token = MK_TOKEN!(
            kind,
            value,
            Span {
                start: self.position(start),
                end: self.position(self.pos),
            }
        );
        trace!(kind = %token.kind, value = %token.value, start, "token");
        self.tokens.push(token);
    }

    /// Consumes characters while `accept` holds, appending them to `value`.
    fn take_while(&mut self, value: &mut String, accept: fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            value.push(c);
            self.pos += c.len_utf8();
        }
    }
}

fn skip_handler(lexer: &mut Lexer) {
    lexer.advance();
}

fn symbol_handler(lexer: &mut Lexer) {
    let start = lexer.pos;
    let mut value = String::new();
    lexer.take_while(&mut value, |c| is_letter(c) || is_digit(c));

    if is_reserved(&value) {
        lexer.push(TokenKind::Reserved, value, start);
    } else {
        if !lexer.symbols.contains(&value) {
            let index = lexer.symbols.insert(&value);
            trace!(symbol = %value, index, "new symbol");
        }
        lexer.push(TokenKind::Identifier, value, start);
    }
}

fn number_handler(lexer: &mut Lexer) {
    let start = lexer.pos;
    let mut value = String::new();
    lexer.take_while(&mut value, is_digit);

    lexer.push(TokenKind::Number, value, start);
}

fn operator_handler(lexer: &mut Lexer) {
    let start = lexer.pos;
    let Some(first) = lexer.advance() else {
        return;
    };
    let mut value = String::from(first);

    if let Some(second) = lexer.advance() {
        value.push(second);
        if !TWO_CHAR_OPERATORS.contains(&value.as_str()) {
            value.pop();
            lexer.retreat();
        }
    }

    lexer.push(TokenKind::Operator, value, start);
}

fn delimiter_handler(lexer: &mut Lexer) {
    let start = lexer.pos;
    if let Some(c) = lexer.advance() {
        lexer.push(TokenKind::Delimiter, String::from(c), start);
    }
}

fn string_handler(lexer: &mut Lexer) {
    let start = lexer.pos;
    lexer.advance();

    let mut value = String::new();
    lexer.take_while(&mut value, |c| c != QUOTE);

    if lexer.advance().is_none() {
        warn!(start, "unterminated string literal, emitting it as is");
    }

    lexer.push(TokenKind::String, value, start);
}

/// Scans `source` into its tokens and the table of identifiers they use.
///
/// Stops at the first character that belongs to no token class.
pub fn scan(source: &str, file: Option<String>) -> Result<(Vec<Token>, SymbolTable), Error> {
    let mut lex = Lexer::new(source, file);
    debug!(file = %lex.file, len = source.len(), "scan started");

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex),
            None => {
                let character = lex.peek().unwrap_or_default();
                debug!(pos = lex.pos, ?character, "invalid character");
                return Err(Error::new(
                    ErrorImpl::InvalidCharacter { character },
                    lex.position(lex.pos),
                ));
            }
        }
    }

    debug!(
        tokens = lex.tokens.len(),
        symbols = lex.symbols.len(),
        "scan finished"
    );
    Ok((lex.tokens, lex.symbols))
}
