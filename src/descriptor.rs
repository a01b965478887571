//! # Descriptor Module
//!
//! Hand-written prost messages for the part of the protoc plugin protocol
//! this generator reads.
//!
//! `prost_types::FileDescriptorProto` drops extension fields while decoding,
//! which would lose the `google.api.http` rule attached to every method. The
//! messages below mirror `google/protobuf/descriptor.proto` and
//! `google/api/http.proto` field-for-field for the fields we need, and keep
//! `MethodDescriptorProto.options` as raw bytes so it can be decoded into
//! [`MethodOptions`] (which declares the extension field) when a rule is
//! extracted.
//!
//! prost generates `name()`-style accessors for the `optional` fields,
//! returning the proto default when a field is unset.
//!
//! The response side uses `prost_types::compiler::CodeGeneratorResponse`
//! directly since nothing there needs extensions.

/// `google.protobuf.compiler.CodeGeneratorRequest`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorRequest {
    /// Files protoc was asked to generate output for
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    /// Value of `--grpc_browser_opt`
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    /// Every file in `file_to_generate` plus everything it imports
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorProto>,
}

/// `google.protobuf.FileDescriptorProto`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(message, repeated, tag = "6")]
    pub service: Vec<ServiceDescriptorProto>,
}

/// `google.protobuf.ServiceDescriptorProto`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub method: Vec<MethodDescriptorProto>,
}

/// `google.protobuf.MethodDescriptorProto`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodDescriptorProto {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub input_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub output_type: Option<String>,
    /// Encoded `MethodOptions`, decoded lazily by [`crate::http_rule`]
    #[prost(bytes = "vec", optional, tag = "4")]
    pub options: Option<Vec<u8>>,
    #[prost(bool, optional, tag = "5")]
    pub client_streaming: Option<bool>,
    #[prost(bool, optional, tag = "6")]
    pub server_streaming: Option<bool>,
}

/// `google.protobuf.MethodOptions` with the `google.api.http` extension (field 72295728)
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodOptions {
    #[prost(bool, optional, tag = "33")]
    pub deprecated: Option<bool>,
    #[prost(message, optional, tag = "72295728")]
    pub http: Option<HttpRule>,
}

/// `google.api.HttpRule`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpRule {
    #[prost(string, tag = "1")]
    pub selector: String,
    /// Request field mapped to the HTTP body, `*` for the whole request
    #[prost(string, tag = "7")]
    pub body: String,
    #[prost(string, tag = "12")]
    pub response_body: String,
    #[prost(message, repeated, tag = "11")]
    pub additional_bindings: Vec<HttpRule>,
    #[prost(oneof = "http_rule::Pattern", tags = "2, 3, 4, 5, 6, 8")]
    pub pattern: Option<http_rule::Pattern>,
}

pub mod http_rule {
    /// The verb and path template of an [`HttpRule`](super::HttpRule)
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Pattern {
        #[prost(string, tag = "2")]
        Get(String),
        #[prost(string, tag = "3")]
        Put(String),
        #[prost(string, tag = "4")]
        Post(String),
        #[prost(string, tag = "5")]
        Delete(String),
        #[prost(string, tag = "6")]
        Patch(String),
        #[prost(message, tag = "8")]
        Custom(super::CustomHttpPattern),
    }

    impl Pattern {
        /// Name of the oneof field that is set
        #[must_use]
        pub fn kind(&self) -> &'static str {
            match self {
                Pattern::Get(_) => "get",
                Pattern::Put(_) => "put",
                Pattern::Post(_) => "post",
                Pattern::Delete(_) => "delete",
                Pattern::Patch(_) => "patch",
                Pattern::Custom(_) => "custom",
            }
        }
    }
}

/// `google.api.CustomHttpPattern`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomHttpPattern {
    #[prost(string, tag = "1")]
    pub kind: String,
    #[prost(string, tag = "2")]
    pub path: String,
}
