//! Error types and error reporting for the front end.
//!
//! This module defines the diagnostics produced while scanning and
//! parsing. It includes:
//!
//! - Error structures carrying the line and location of the problem
//! - Specific error variants for lexical and syntax errors
//! - The caller-owned diagnostic sink both passes report into
//! - Rendering of an error against its source line

pub mod diagnostics;
pub mod errors;
