//! Performance benchmarks for html-signals.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use html_signals::{extract, extract_bytes};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
</head>
<body>
    <nav>
        <a href="https://example.com/">Home</a>
        <a href="https://example.com/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content with repeated words so the distributions have some shape to them.</p>
        <p>Here is a second paragraph with more content and a
        <a href="https://other.example/ref">reference link</a> in the middle.</p>
        <table>
            <tr><td>Name</td><td>Score</td></tr>
            <tr><td>Alpha</td><td>95</td></tr>
        </table>
    </article>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn bench_signals(c: &mut Criterion) {
    let mut group = c.benchmark_group("signals");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));
    group.bench_function("extract", |b| b.iter(|| extract(black_box(SAMPLE_HTML))));
    group.bench_function("extract_bytes", |b| {
        b.iter(|| extract_bytes(black_box(SAMPLE_HTML.as_bytes())));
    });
    group.finish();
}

criterion_group!(benches, bench_signals);
criterion_main!(benches);
