//! Text rendering of scan results.
//!
//! Produces the token listing and the symbol table listing as bordered
//! grid tables for the console.

pub mod table;
