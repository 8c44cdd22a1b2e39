//! 工具函数性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use bookmarks_service::utils::url_validator::validate_url;
use bookmarks_service::utils::{
    API_KEY_CHARS, BOOKMARK_ID_CHARS, generate_api_key_id, generate_bookmark_id,
    generate_random_code, is_valid_bookmark_id,
};

// ============== id 生成 ==============

fn bench_generate_ids(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/generate");

    group.bench_function("bookmark_id", |b| {
        b.iter(|| {
            let id = generate_bookmark_id();
            assert!(is_valid_bookmark_id(&id));
        });
    });

    group.bench_function("api_key_id", |b| {
        b.iter(generate_api_key_id);
    });

    for (name, charset) in [("lower_alnum", BOOKMARK_ID_CHARS), ("alnum", API_KEY_CHARS)] {
        for length in [6, 24, 60] {
            group.bench_with_input(
                BenchmarkId::new(name, length),
                &length,
                |b, &length| {
                    b.iter(|| generate_random_code(charset, length));
                },
            );
        }
    }

    group.finish();
}

// ============== is_valid_bookmark_id ==============

fn bench_is_valid_bookmark_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/is_valid_bookmark_id");

    for (name, id) in [
        ("valid", "a1b2c3"),
        ("uppercase", "A1B2C3"),
        ("too_short", "123"),
        ("injection", "'; DROP TABLE bookmarks--"),
    ] {
        let expected = name == "valid";
        group.bench_function(name, |b| {
            b.iter(|| assert_eq!(is_valid_bookmark_id(id), expected));
        });
    }

    group.finish();
}

// ============== validate_url ==============

fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/validate_url");

    let long_query = format!("https://example.com/search?q={}", "x".repeat(2000));
    let cases = [
        ("https_simple", "https://www.rust-lang.org/", true),
        ("http_with_port", "http://localhost:8080/path?x=1", true),
        ("padded", "   https://example.com/   ", true),
        ("long_query", long_query.as_str(), true),
        ("ftp", "ftp://files.example.com/a.txt", false),
        ("javascript", "javascript:alert(1)", false),
        ("empty", "", false),
    ];

    for (name, url, ok) in cases {
        group.bench_function(name, |b| {
            b.iter(|| assert_eq!(validate_url(url).is_ok(), ok));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_ids,
    bench_is_valid_bookmark_id,
    bench_validate_url,
);
criterion_main!(benches);
