//! Process boundary of the protoc plugin.
//!
//! protoc writes one encoded `CodeGeneratorRequest` to the plugin's stdin and
//! reads one encoded `CodeGeneratorResponse` from its stdout. The response is
//! encoded only after generation fully succeeds, so a failed run writes
//! nothing to stdout.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;
use tracing::debug;

use crate::descriptor::CodeGeneratorRequest;
use crate::generator;

/// Decode a request, generate, and encode the response
///
/// # Errors
///
/// Returns an error if the request does not decode or generation fails.
pub fn process(input: &[u8]) -> Result<Vec<u8>> {
    let request =
        CodeGeneratorRequest::decode(input).context("decoding CodeGeneratorRequest")?;
    debug!(
        files = request.file_to_generate.len(),
        descriptors = request.proto_file.len(),
        "received generation request"
    );

    let response: CodeGeneratorResponse = generator::generate(&request)?;
    Ok(response.encode_to_vec())
}

/// Run one plugin invocation over the given streams
///
/// # Errors
///
/// Returns an error if reading, generation or writing fails.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .context("reading request from stdin")?;

    let encoded = process(&data)?;

    output
        .write_all(&encoded)
        .and_then(|()| output.flush())
        .context("writing response to stdout")?;
    Ok(())
}
