//! # grpc_browser
//!
//! A `protoc` plugin that generates HTTP client stubs for gRPC services whose
//! methods carry [`google.api.http`](https://cloud.google.com/endpoints/docs/grpc-service-config/reference/rpc/google.api#httprule)
//! transcoding rules. The generated JavaScript calls a small runtime
//! `Caller` that issues the HTTP request; this crate only produces the stubs.
//!
//! ## Architecture
//!
//! - **[`path_template`]** - scanner, recursive-descent parser and binding
//!   compiler for rule path templates like `/v1/{name=shelves/*}/books/{book_id}:get`
//! - **[`naming`]** - snake_case to lowerCamelCase conversion of field paths
//! - **[`descriptor`]** - prost messages for the plugin protocol and `google.api.HttpRule`
//! - **[`http_rule`]** - extracts the HTTP verb, template and body flag of a method
//! - **[`generator`]** - renders one client file per `.proto` file with askama
//! - **[`config`]** - options passed through `--grpc_browser_opt`
//! - **[`logging`]** - `tracing` setup (stderr only)
//! - **[`plugin`]** - stdin/stdout process boundary
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant protoc
//!     participant Plugin as plugin::run
//!     participant Gen as generator::generate
//!     participant Rule as http_rule::extract_rule
//!     participant Parser as path_template::parse
//!     participant Tpl as ClientFileTemplate
//!
//!     protoc->>Plugin: CodeGeneratorRequest (stdin)
//!     Plugin->>Gen: decoded request
//!     loop every file_to_generate with services
//!         loop every method
//!             Gen->>Rule: MethodDescriptorProto
//!             alt no google.api.http rule
//!                 Rule-->>Gen: None (method skipped)
//!             else get / put / post / delete
//!                 Rule->>Parser: path template
//!                 Parser-->>Rule: Path
//!                 Rule-->>Gen: HttpBinding
//!                 Gen->>Gen: binding() + excluded_fields()
//!             end
//!         end
//!         Gen->>Tpl: services + stubs
//!         Tpl-->>Gen: file content
//!     end
//!     Gen-->>Plugin: CodeGeneratorResponse
//!     Plugin-->>protoc: encoded response (stdout)
//! ```
//!
//! Any error (malformed template, unsupported rule, missing descriptor)
//! aborts the run: nothing is written to stdout, the error is logged to
//! stderr and the process exits non-zero.
//!
//! ## Example
//!
//! ```rust
//! use grpc_browser::path_template::{parse, Segment};
//!
//! let path = parse("/v1/{parent=shelves/*}/books/{book_id}:byId").unwrap();
//! assert_eq!(path.segments.len(), 4);
//! assert_eq!(path.verb.as_deref(), Some("byId"));
//! assert!(matches!(&path.segments[0], Segment::Literal(s) if s == "v1"));
//! assert_eq!(path.binding(), "/v1/${req.parent}/books/${req.bookId}:byId");
//! ```

pub mod config;
pub mod descriptor;
pub mod generator;
pub mod http_rule;
pub mod logging;
pub mod naming;
pub mod path_template;
pub mod plugin;

pub use http_rule::{extract_rule, HttpBinding, RuleError};
pub use path_template::{parse, Path, PathTemplateError, Segment, Variable};
