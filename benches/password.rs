//! 凭证校验性能基准测试
//!
//! Every user login pays one Argon2 verify; API key checks are a constant
//! time string comparison.

use criterion::{Criterion, criterion_group, criterion_main};
use subtle::ConstantTimeEq;

use bookmarks_service::utils::generate_api_key_secret;
use bookmarks_service::utils::password::{hash_password, verify_password};

fn bench_user_password(c: &mut Criterion) {
    let mut group = c.benchmark_group("credentials/user_password");
    group.sample_size(20);

    group.bench_function("hash", |b| {
        b.iter(|| hash_password("register-me-please"));
    });

    let hash = hash_password("login-password").expect("hash should succeed");
    group.bench_function("verify_match", |b| {
        b.iter(|| {
            assert!(verify_password("login-password", &hash).expect("verify should succeed"));
        });
    });
    group.bench_function("verify_mismatch", |b| {
        b.iter(|| {
            assert!(!verify_password("not-the-password", &hash).expect("verify should succeed"));
        });
    });

    group.finish();
}

fn bench_api_key_secret(c: &mut Criterion) {
    let mut group = c.benchmark_group("credentials/api_key_secret");

    let stored = generate_api_key_secret();
    let same = stored.clone();
    let other = generate_api_key_secret();

    group.bench_function("ct_eq_match", |b| {
        b.iter(|| bool::from(stored.as_bytes().ct_eq(same.as_bytes())));
    });
    group.bench_function("ct_eq_mismatch", |b| {
        b.iter(|| bool::from(stored.as_bytes().ct_eq(other.as_bytes())));
    });

    group.finish();
}

criterion_group!(benches, bench_user_password, bench_api_key_secret);
criterion_main!(benches);
