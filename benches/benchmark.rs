//! Performance benchmarks for chapter-extract.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Each detection strategy on a small synthetic chapter page
//! - The sanitizer on the extracted markup
//! - The full extractor on generated pages of growing size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use chapter_extract::{
    dom, sanitize, ContentExtractor, DensityStrategy, ExtractionOptions, PatternStrategy,
    SelectorStrategy, Strategy, StructuralStrategy,
};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Chapter 12: The Long Road</title>
    <script>window.analytics = [];</script>
</head>
<body>
    <nav class="top-nav">
        <a href="/">Home</a>
        <a href="/series">Series</a>
    </nav>
    <div class="ad banner">Buy now!</div>
    <div id="chapter" class="chapter-content">
        <h1 class="chapter-title">Chapter 12: The Long Road</h1>
        <p>The caravan left before dawn, wheels creaking over frost-hardened ruts
        while the last stars faded behind the eastern ridge.</p>
        <p>Mira walked beside the lead wagon, counting the mile stones under her
        breath and wondering how many more the oxen had in them.</p>
        <p>By noon the road had turned to mud, and by evening nobody spoke of
        anything but the river crossing that waited for them at the bottom of the valley.</p>
        <div class="share">Share on social media</div>
        <script>track('chapter-12');</script>
    </div>
    <aside class="sidebar">
        <h3>Other series</h3>
        <ul><li>Series one</li><li>Series two</li></ul>
    </aside>
    <footer><p>Copyright 2026</p></footer>
</body>
</html>
"#;

fn bench_strategies(c: &mut Criterion) {
    let doc = dom::parse(SAMPLE_HTML);
    let options = ExtractionOptions::default();

    let selector = SelectorStrategy::new("#chapter", vec![".share".to_string()]);
    let density = DensityStrategy::default();
    let pattern = PatternStrategy::new([r#"<div id="chapter"[^>]*>(.*?)<div class="share">"#]);
    let structural = StructuralStrategy::default();

    let mut group = c.benchmark_group("strategy");
    group.bench_function("css_selector", |b| {
        b.iter(|| selector.extract(black_box(&doc), &options));
    });
    group.bench_function("text_density", |b| {
        b.iter(|| density.extract(black_box(&doc), &options));
    });
    group.bench_function("xpath_regex", |b| {
        b.iter(|| pattern.extract(black_box(&doc), &options));
    });
    group.bench_function("dom_position", |b| {
        b.iter(|| structural.extract(black_box(&doc), &options));
    });
    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let doc = dom::parse(SAMPLE_HTML);
    let markup = dom::document_html(&doc).to_string();

    c.bench_function("sanitize", |b| {
        b.iter(|| sanitize(black_box(&markup)));
    });
}

/// Full extraction on pages padded with more paragraphs and boilerplate.
fn bench_extractor_scaling(c: &mut Criterion) {
    let extractor = ContentExtractor::with_defaults();
    let mut group = c.benchmark_group("extractor");

    for paragraphs in [10usize, 100, 1000] {
        let body: String = (0..paragraphs)
            .map(|i| {
                format!(
                    "<p>Paragraph {i} of the chapter, long enough to look like prose.</p>\
                     <div class=\"comment\">comment {i}</div>"
                )
            })
            .collect();
        let html = format!("<html><body><nav>menu</nav><article>{body}</article></body></html>");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("hybrid", paragraphs), &html, |b, html| {
            b.iter(|| extractor.extract_html(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_sanitize, bench_extractor_scaling);
criterion_main!(benches);
