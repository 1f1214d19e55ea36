//! Error types and error handling for the lexer.
//!
//! This module defines the error types produced while loading and scanning
//! a source file. It includes:
//!
//! - Error structures with source position information
//! - Variants for invalid characters and unreadable input files
//! - Suggestions shown alongside rendered diagnostics

pub mod errors;
