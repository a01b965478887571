use criterion::{criterion_group, criterion_main, Criterion};
use grpc_browser::path_template::parse;
use std::hint::black_box;

const TEMPLATES: &[&str] = &[
    "/v1/shelves",
    "/v1/shelves:list",
    "/v1/{name=shelves/*}/books/{book_id}",
    "/v1/{parent=shelves/*}/books/{book_id}:byId",
    "/v1/{shelf.owner_id=users/*/shelves/**}/books/{book.author_name}/copies/{copy_id}:checkout",
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_templates", |b| {
        b.iter(|| {
            for template in TEMPLATES {
                black_box(parse(black_box(template)).is_ok());
            }
        })
    });
}

fn bench_parse_and_compile(c: &mut Criterion) {
    c.bench_function("parse_and_compile_binding", |b| {
        b.iter(|| {
            for template in TEMPLATES {
                if let Ok(path) = parse(black_box(template)) {
                    black_box(path.binding());
                    black_box(path.excluded_fields().len());
                }
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_parse_and_compile);
criterion_main!(benches);
