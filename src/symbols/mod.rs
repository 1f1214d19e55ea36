//! Symbol table for identifiers found during scanning.
//!
//! Identifiers are recorded once, in the order they first appear in the
//! source. Reserved words never enter the table.

pub mod symbol_table;
