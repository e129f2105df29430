//! Lexical analysis for Decaf source files.
//!
//! A single-pass scanner that turns source text into an ordered sequence
//! of classified tokens and in-place diagnostics. A malformed lexeme
//! never stops the pass: the scanner records an error token where the
//! defect sits and picks up again right after it, so one scan reports
//! everything wrong with a file.
//!
//! # Quick start
//!
//! ## Scan a source string
//!
//! ```
//! use decaf_lex::scan;
//!
//! let output = scan("if (x == 0x1F) { return; }", "demo.dcf");
//! let rendered: Vec<String> = output.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered[0], "1 if");
//! assert_eq!(rendered[2], "1 IDENTIFIER x");
//! assert_eq!(rendered[4], "1 INTLITERAL 0x1F");
//! ```
//!
//! ## Collect every defect in one pass
//!
//! ```
//! use decaf_lex::scan;
//!
//! let output = scan("int bad = 0x;", "demo.dcf");
//! let diagnostics: Vec<String> = output
//!     .iter()
//!     .filter(|element| element.is_error())
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(diagnostics, ["demo.dcf line 1:13: unexpected char: ';'"]);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

mod classify;
mod cursor;
pub mod scanner;
pub mod token;

pub use scanner::scan;
pub use token::{ErrorToken, Token, TokenKind, TokenOrError};
