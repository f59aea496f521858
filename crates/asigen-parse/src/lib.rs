// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # asigen-parse
//!
//! Lexical tools for ActionScript 2.0 source code.
//!
//! ## Overview
//!
//! This crate provides two independent front ends:
//! - [`scanner`]: a single-pass declaration scanner that reports imports,
//!   type headers and member signatures to a [`DeclarationHandler`]
//! - [`lexer`]: a buffered tokenizer with peek, put-back and reset
//!
//! ## Quick Start
//!
//! ```rust
//! use asigen_parse::scan_all;
//!
//! let declarations = scan_all("class com.foo.Bar { public function baz():Void {} }");
//! assert_eq!(declarations.len(), 2);
//! assert_eq!(declarations[1].name(), "baz");
//! ```

#![warn(clippy::all)]

pub mod lexer;
pub mod scanner;

pub use lexer::{Token, TokenKind, Tokenizer};
pub use scanner::{Declaration, DeclarationHandler, ScanState, scan, scan_all};
