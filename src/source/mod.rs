//! Source file loading.
//!
//! Missing and empty files are rejected here, before the scanner runs.

pub mod loader;
