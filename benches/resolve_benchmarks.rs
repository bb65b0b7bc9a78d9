//! Benchmarks for preference parsing and language resolution
//!
//! Run with: cargo bench --bench resolve_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use langpick::{
    LanguageSelector, PreferenceInputs, RequestParts, SupportedLanguages, match_tag,
    parse_preferences, parse_ranked, resolve,
};

const HEADERS: &[(&str, &str)] = &[
    ("single", "fr"),
    ("browser", "en-US,en;q=0.9,fr;q=0.8,de;q=0.7,*;q=0.5"),
    (
        "long",
        "zh-HK,zh-TW;q=0.95,zh;q=0.9,ja-JP;q=0.85,ja;q=0.8,ko;q=0.75,vi;q=0.7,th;q=0.6,id;q=0.5,ms;q=0.4,tl;q=0.3,en;q=0.1",
    ),
    ("malformed", ";;,q=,en;q=abc,*,,fr;level=1, ;q=0.5"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_preferences");

    for (name, header) in HEADERS {
        group.throughput(Throughput::Bytes(header.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), header, |b, header| {
            b.iter(|| black_box(parse_preferences(black_box(header))))
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ranked");

    for (name, header) in HEADERS {
        group.bench_with_input(BenchmarkId::from_parameter(name), header, |b, header| {
            b.iter(|| black_box(parse_ranked(black_box(header))))
        });
    }

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_tag");
    let small = SupportedLanguages::parse("en,fr").unwrap();
    let large = SupportedLanguages::parse("en,en-GB,fr,fr-CA,de,es,es-MX,it,pt,pt-BR,ja,ko,zh-CN,zh-TW").unwrap();

    for (name, header) in HEADERS {
        let ranked = parse_ranked(header);
        group.bench_with_input(BenchmarkId::new("2_supported", name), &ranked, |b, ranked| {
            b.iter(|| black_box(match_tag(black_box(ranked), &small)))
        });
        group.bench_with_input(BenchmarkId::new("14_supported", name), &ranked, |b, ranked| {
            b.iter(|| black_box(match_tag(black_box(ranked), &large)))
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let supported = SupportedLanguages::parse("en,fr,de").unwrap();

    group.bench_function("no_sources", |b| {
        let inputs = PreferenceInputs::default();
        b.iter(|| black_box(resolve(&supported, black_box(&inputs))))
    });

    group.bench_function("query_match", |b| {
        let inputs = PreferenceInputs::new(Some("fr-FR"), Some("de"), Some(HEADERS[1].1));
        b.iter(|| black_box(resolve(&supported, black_box(&inputs))))
    });

    group.bench_function("header_only", |b| {
        let inputs = PreferenceInputs::default().with_header(HEADERS[1].1);
        b.iter(|| black_box(resolve(&supported, black_box(&inputs))))
    });

    group.bench_function("header_no_match", |b| {
        let inputs = PreferenceInputs::default().with_header("ja,ko;q=0.5");
        b.iter(|| black_box(resolve(&supported, black_box(&inputs))))
    });

    group.finish();
}

fn bench_selector(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector");
    let selector = LanguageSelector::from_args(&["en,fr,de", "lang"]).unwrap();
    let request = RequestParts::new()
        .with_header("Cookie", "session=abc123; theme=dark; lang=fr-CH")
        .with_header("Accept-Language", HEADERS[1].1)
        .with_header("User-Agent", "Mozilla/5.0");

    group.bench_function("cookie_request", |b| {
        b.iter(|| black_box(selector.select(black_box(&request))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_rank,
    bench_match,
    bench_resolve,
    bench_selector,
);
criterion_main!(benches);
