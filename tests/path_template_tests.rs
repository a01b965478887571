use grpc_browser::path_template::{parse, Path, PathTemplateErrorKind, Segment, Variable};

fn var(name: &str, parts: &[&str]) -> Segment {
    Segment::Variable(Variable {
        name: name.into(),
        parts: parts.iter().map(|s| s.to_string()).collect(),
    })
}

#[test]
fn test_library_template() {
    let path = parse("/v1/{name=shelves/*}/books/{book_id}").unwrap();
    assert_eq!(
        path,
        Path {
            segments: vec![
                Segment::Literal("v1".into()),
                var("name", &["shelves", "*"]),
                Segment::Literal("books".into()),
                var("book_id", &[]),
            ],
            verb: None,
        }
    );
    assert_eq!(path.binding(), "/v1/${req.name}/books/${req.bookId}");
    assert_eq!(path.excluded_fields(), vec!["name", "book_id"]);
}

#[test]
fn test_custom_verb() {
    let path: Path = "/v1/shelves:list".parse().unwrap();
    assert_eq!(path.verb.as_deref(), Some("list"));
    assert_eq!(path.binding(), "/v1/shelves:list");

    let path = parse("/v1/shelves").unwrap();
    assert!(path.verb.is_none());
}

#[test]
fn test_malformed_templates_report_offending_text() {
    let cases = [
        ("/v1/{}", PathTemplateErrorKind::EmptyFieldPath, "}"),
        ("//", PathTemplateErrorKind::EmptySegment, "/"),
        (
            "v1/books",
            PathTemplateErrorKind::MissingLeadingSlash { found: Some('v') },
            "v1/books",
        ),
        (
            "/v1/{book_id",
            PathTemplateErrorKind::UnterminatedVariable {
                field_path: "book_id".into(),
            },
            "{book_id",
        ),
    ];

    for (template, kind, offending) in cases {
        let err = parse(template).unwrap_err();
        assert_eq!(err.kind(), &kind, "{template}");
        assert_eq!(err.offending(), offending, "{template}");
        assert_eq!(err.template(), template);
        // failures are deterministic
        assert_eq!(parse(template).unwrap_err(), err);
    }
}

#[test]
fn test_nested_field_path_binding() {
    let path = parse("/v1/{shelf.owner_id}/books/{book.author_name=authors/*}").unwrap();
    assert_eq!(
        path.binding(),
        "/v1/${req.shelf.ownerId}/books/${req.book.authorName}"
    );
    assert_eq!(
        path.excluded_fields(),
        vec!["shelf.owner_id", "book.author_name"]
    );
}

#[test]
fn test_parsing_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                parse(&format!("/v{i}/{{name=shelves/*}}:get"))
                    .unwrap()
                    .binding()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("/v{i}/${{req.name}}:get"));
    }
}
