#![allow(dead_code)]

pub mod fixtures {
    use grpc_browser::descriptor::http_rule::Pattern;
    use grpc_browser::descriptor::{
        CodeGeneratorRequest, FileDescriptorProto, HttpRule, MethodDescriptorProto,
        MethodOptions, ServiceDescriptorProto,
    };
    use prost::Message;

    /// Method carrying a `google.api.http` rule, or no options at all
    pub fn method(name: &str, pattern: Option<Pattern>, body: &str) -> MethodDescriptorProto {
        let options = pattern.map(|pattern| {
            MethodOptions {
                http: Some(HttpRule {
                    body: body.to_string(),
                    pattern: Some(pattern),
                    ..Default::default()
                }),
                ..Default::default()
            }
            .encode_to_vec()
        });
        MethodDescriptorProto {
            name: Some(name.to_string()),
            input_type: Some(format!(".library.v1.{name}Request")),
            output_type: Some(".library.v1.Book".to_string()),
            options,
            ..Default::default()
        }
    }

    /// `library/v1/library.proto` with one annotated service
    pub fn library_file() -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some("library/v1/library.proto".into()),
            package: Some("library.v1".into()),
            service: vec![ServiceDescriptorProto {
                name: Some("Library".into()),
                method: vec![
                    method(
                        "GetBook",
                        Some(Pattern::Get("/v1/{name=shelves/*}/books/{book_id}".into())),
                        "",
                    ),
                    method(
                        "CreateBook",
                        Some(Pattern::Post("/v1/{parent=shelves/*}/books".into())),
                        "*",
                    ),
                    method(
                        "UpdateBook",
                        Some(Pattern::Put("/v1/{book.name=shelves/*/books/*}".into())),
                        "*",
                    ),
                    method(
                        "DeleteBook",
                        Some(Pattern::Delete("/v1/{name=shelves/*/books/*}".into())),
                        "",
                    ),
                    method("WatchShelf", None, ""),
                ],
            }],
        }
    }

    /// Imported file with messages only
    pub fn types_file() -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some("library/v1/types.proto".into()),
            package: Some("library.v1".into()),
            service: vec![],
        }
    }

    pub fn request(generate: &[&str], files: Vec<FileDescriptorProto>) -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: generate.iter().map(|s| s.to_string()).collect(),
            parameter: None,
            proto_file: files,
        }
    }
}
