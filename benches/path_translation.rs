use apispec_webframeworks::bottle::bottle_path_to_openapi;
use apispec_webframeworks::flask::flask_path_to_openapi;
use apispec_webframeworks::handler::{Handler, HandlerClass};
use apispec_webframeworks::tornado::{tornado_path_to_openapi, UrlSpec};
use apispec_webframeworks::yaml_utils::load_operations_from_docstring;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const FLASK_RULES: [&str; 5] = [
    "/",
    "/zoo/animals",
    "/zoo/animals/<int:id>",
    "/zoo/<category>/animals/<int:id>/habitats/<habitat_id>/sections/<section_id>",
    "/complex/<a>/<b>/<c>/<d>/<e>/<f>/<g>/<h>/<path:i>",
];

const BOTTLE_RULES: [&str; 4] = [
    "/zoo/animals",
    "/zoo/animals/<id:int>",
    "/zoo/<category>/animals/<id:int>/toys/<toy_id:re:[a-z]+>",
    "/inventory/<warehouse_id>/feeds/<feed_id>/items/<item_id>/batches/<batch_id:int>",
];

const GIST_DOC: &str = "Gist detail view.
    ---
    x-extension: metadata
    get:
        responses:
            200:
                schema:
                    $ref: '#/definitions/Gist'
    post:
        responses:
            201:
                description: created
    ";

fn bench_flask_translation(c: &mut Criterion) {
    c.bench_function("flask_path_to_openapi", |b| {
        b.iter(|| {
            for rule in FLASK_RULES.iter() {
                black_box(flask_path_to_openapi(black_box(rule)));
            }
        })
    });
}

fn bench_bottle_translation(c: &mut Criterion) {
    c.bench_function("bottle_path_to_openapi", |b| {
        b.iter(|| {
            for rule in BOTTLE_RULES.iter() {
                black_box(bottle_path_to_openapi(black_box(rule)));
            }
        })
    });
}

fn bench_tornado_translation(c: &mut Criterion) {
    let get = Handler::builder("get")
        .params(["category", "animal_id", "section_id"])
        .build();
    let class = HandlerClass::builder("SectionHandler")
        .method("get", get.clone())
        .build();
    let urlspec = UrlSpec::new(
        r"/zoo/([^/]+)/animals/(\d+)/sections/([^/]+)/?",
        &class,
    )
    .expect("pattern compiles");
    c.bench_function("tornado_path_to_openapi", |b| {
        b.iter(|| black_box(tornado_path_to_openapi(&urlspec, Some(&get))))
    });
}

fn bench_docstring_operations(c: &mut Criterion) {
    c.bench_function("load_operations_from_docstring", |b| {
        b.iter(|| black_box(load_operations_from_docstring(black_box(GIST_DOC))))
    });
}

criterion_group!(
    benches,
    bench_flask_translation,
    bench_bottle_translation,
    bench_tornado_translation,
    bench_docstring_operations
);
criterion_main!(benches);
