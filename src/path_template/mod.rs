//! # Path Template Module
//!
//! Parses the path templates carried by `google.api.http` rules and compiles
//! them into the URL expressions used by generated client stubs.
//!
//! ## Overview
//!
//! A template such as `/v1/{parent=shelves/*}/books/{book_id}:byId` is made
//! of literal segments, captured variables and an optional trailing verb:
//!
//! ```text
//! "/v1/{parent=shelves/*}/books/{book_id}:byId"
//!        │                  │      │          │
//!        │                  │      │          └─ verb "byId"
//!        │                  │      └─ Variable { name: "book_id", parts: [] }
//!        │                  └─ Literal "books"
//!        └─ Variable { name: "parent", parts: ["shelves", "*"] }
//! ```
//!
//! The pipeline is:
//!
//! 1. [`Scanner`] - character cursor over the template
//! 2. [`parse`] - recursive-descent parser producing a [`Path`]
//! 3. [`Path::binding`] / [`Path::excluded_fields`] - binding compiler
//!
//! ## Usage
//!
//! ```rust
//! use grpc_browser::path_template::parse;
//!
//! let path = parse("/v1/{name=shelves/*}/books/{book_id}").unwrap();
//! assert_eq!(path.binding(), "/v1/${req.name}/books/${req.bookId}");
//! assert_eq!(path.excluded_fields(), vec!["name", "book_id"]);
//! ```
//!
//! Parsing is pure: every call builds its own scanner, so templates can be
//! parsed from any number of threads without coordination.

mod ast;
mod binding;
mod error;
mod parser;
mod scanner;

pub use ast::{Path, Segment, Variable};
pub use binding::REQUEST_IDENT;
pub use error::{PathTemplateError, PathTemplateErrorKind};
pub use parser::parse;
pub use scanner::Scanner;
