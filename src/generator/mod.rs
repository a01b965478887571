//! # Generator Module
//!
//! Turns a `CodeGeneratorRequest` into the `CodeGeneratorResponse` holding
//! one client file per requested `.proto` file that declares services.
//!
//! ## Flow
//!
//! ```text
//! CodeGeneratorRequest
//!   └─ file_to_generate ─→ FileDescriptorProto
//!        └─ service ─→ method ─→ http_rule::extract_rule ─→ HttpBinding
//!                                   └─ MethodStub (binding, excluded fields)
//!        └─ ClientFileTemplate (askama) ─→ CodeGeneratorResponse.File
//! ```
//!
//! Methods without an HTTP rule are skipped. Any other failure (missing
//! descriptor, bad rule, malformed path template) aborts generation for the
//! whole request: protoc receives either every file or none.
//!
//! ## Generated Output
//!
//! For `shelf/v1/api.proto` with
//! `rpc GetBook(GetBookRequest) returns (Book) { option (google.api.http) = { get: "/v1/{name=shelves/*}/books/{book_id}" }; }`
//! the generator writes `shelf/v1/api.js`:
//!
//! ```text
//! exports.LibraryClient = class LibraryClient {
//!   constructor(opts = {}) {
//!     this._caller = new grpc.Caller(opts);
//!   }
//!
//!   GetBook(req) {
//!     return this._caller.send('GET', `/v1/${req.name}/books/${req.bookId}`, req, false, ["name","bookId"]);
//!   }
//! };
//! ```
//!
//! The template lives in `templates/client.js.txt`.

mod templates;

pub use templates::*;

use anyhow::{anyhow, bail, Context, Result};
use prost_types::compiler::{code_generator_response, CodeGeneratorResponse};
use tracing::{debug, info};

use crate::config::PluginOptions;
use crate::descriptor::{CodeGeneratorRequest, FileDescriptorProto, ServiceDescriptorProto};
use crate::http_rule::extract_rule;

/// Version written into the header of generated files
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate client files for every file protoc asked for
///
/// # Errors
///
/// Returns an error if the request names no files, a requested file has no
/// descriptor, the plugin parameter is malformed, or any method carries an
/// unusable HTTP rule.
pub fn generate(request: &CodeGeneratorRequest) -> Result<CodeGeneratorResponse> {
    if request.file_to_generate.is_empty() {
        bail!("no files to generate");
    }
    let options = PluginOptions::parse(request.parameter.as_deref())?;

    let mut response = CodeGeneratorResponse::default();
    for name in &request.file_to_generate {
        let file = find_file_descriptor(request, name)?;
        let generated =
            generate_file(file, &options).with_context(|| format!("generating {name}"))?;
        if let Some(generated) = generated {
            response.file.push(generated);
        }
    }
    Ok(response)
}

/// Look up the descriptor of a requested file
///
/// # Errors
///
/// Returns an error if no descriptor in the request has that name.
pub fn find_file_descriptor<'a>(
    request: &'a CodeGeneratorRequest,
    name: &str,
) -> Result<&'a FileDescriptorProto> {
    request
        .proto_file
        .iter()
        .find(|file| file.name() == name)
        .ok_or_else(|| anyhow!("could not find descriptor for {name}"))
}

/// Generate the client file for one `.proto` file
///
/// Returns `Ok(None)` when the file declares no services.
///
/// # Errors
///
/// Returns an error if any method's HTTP rule cannot be used or rendering
/// fails.
pub fn generate_file(
    file: &FileDescriptorProto,
    options: &PluginOptions,
) -> Result<Option<code_generator_response::File>> {
    if file.service.is_empty() {
        debug!(file = file.name(), "no services, nothing to generate");
        return Ok(None);
    }

    let services = file
        .service
        .iter()
        .map(service_stub)
        .collect::<Result<Vec<_>>>()?;
    let method_count: usize = services.iter().map(|s| s.methods.len()).sum();

    let content = render_client_file(VERSION, file.name(), &options.runtime_module, services)
        .with_context(|| format!("rendering template for {}", file.name()))?;

    let name = output_file_name(file.name(), &options.extension);
    info!(file = %name, methods = method_count, "generated client");

    Ok(Some(code_generator_response::File {
        name: Some(name),
        content: Some(content),
        ..Default::default()
    }))
}

fn service_stub(service: &ServiceDescriptorProto) -> Result<ServiceStub> {
    let mut methods = Vec::new();
    for method in &service.method {
        if let Some(binding) = extract_rule(method)? {
            methods.push(MethodStub::new(method.name(), &binding)?);
        }
    }
    Ok(ServiceStub {
        name: service.name().to_string(),
        methods,
    })
}

/// Output path for a source file: its extension replaced by `extension`
#[must_use]
pub fn output_file_name(source: &str, extension: &str) -> String {
    std::path::Path::new(source)
        .with_extension(extension)
        .to_string_lossy()
        .into_owned()
}
