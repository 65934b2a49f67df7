use criterion::{Criterion, criterion_group, criterion_main};
use sift::*;
use std::hint::black_box;

fn bench_match_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_rule");

    let rule = MatchRule::pattern("^[a-z0-9-]+$").unwrap();
    let inverted = MatchRule::not_pattern("^[a-z0-9-]+$").unwrap();

    let valid = vec!["hello-world", "sift", "a-1-b-2-c-3"];
    let invalid = vec!["Hello World", "under_score", "trailing!"];

    group.bench_function("valid_text", |b| {
        b.iter(|| {
            for value in &valid {
                rule.validate(black_box(*value)).unwrap();
            }
        })
    });

    group.bench_function("invalid_text", |b| {
        b.iter(|| {
            for value in &invalid {
                let _ = rule.validate(black_box(*value));
            }
        })
    });

    group.bench_function("inverted_text", |b| {
        b.iter(|| {
            for value in &invalid {
                inverted.validate(black_box(*value)).unwrap();
            }
        })
    });

    group.bench_function("bytes", |b| {
        let bytes = b"hello-world".to_vec();
        b.iter(|| rule.validate(black_box(&bytes)))
    });

    group.bench_function("absent", |b| {
        let absent: Option<String> = None;
        b.iter(|| rule.validate(black_box(&absent)))
    });

    group.finish();
}

fn bench_rule_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_chain");

    let chain = RuleChain::for_field("slug")
        .add(MatchRule::pattern("^[a-z0-9-]+$").unwrap())
        .add(MatchRule::not_pattern("--").unwrap())
        .add(MatchRule::not_pattern("^-|-$").unwrap());

    group.bench_function("all_pass", |b| {
        b.iter(|| chain.validate(black_box("hello-world")))
    });

    group.bench_function("first_fails", |b| {
        b.iter(|| chain.validate(black_box("Hello World")))
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("compile_pattern", |b| {
        b.iter(|| MatchRule::pattern(black_box("^[a-z0-9-]+$")))
    });

    group.bench_function("from_config", |b| {
        let config = MatchRuleConfig::new("^[a-z0-9-]+$");
        b.iter(|| config.build())
    });

    group.finish();
}

criterion_group!(benches, bench_match_rule, bench_rule_chain, bench_build);
criterion_main!(benches);
