use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use notesite::content::{parse_front_matter, split_front_matter};
use notesite::models::{ContentItem, ItemMetadata, parse_pub_date};

/// Generate synthetic .mdx file contents
fn generate_note_files(num_files: usize) -> Vec<String> {
    (0..num_files)
        .map(|i| {
            format!(
                "---\ntitle: Note {} on build tooling\ndate: 2024-{:02}-{:02}\ndescription: Summary of note {}\ntags: [rust, tooling, web]\n---\n\n# Heading\n\nA body paragraph with enough text to look like a real note. Entry {}.\n",
                i,
                (i / 28) % 12 + 1,
                i % 28 + 1,
                i,
                i
            )
        })
        .collect()
}

/// Generate synthetic index items
fn generate_items(num_items: usize) -> Vec<ContentItem> {
    (0..num_items)
        .map(|i| ContentItem {
            kind: "note".to_string(),
            url: format!("/notes/note-{}", i),
            metadata: ItemMetadata {
                title: format!("Note {} on build tooling", i),
                date: format!("{}-{:02}-{:02}", 2019 + (i / 360) % 6, (i / 30) % 12 + 1, i % 28 + 1),
                description: Some(format!("Summary of note {}", i)),
                tags: vec!["rust".to_string(), "tooling".to_string()],
            },
        })
        .collect()
}

fn bench_front_matter_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_matter_parsing");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let files = generate_note_files(size);

            b.iter(|| {
                let mut parsed = 0usize;
                for file in black_box(&files) {
                    if let Some((front, _body)) = split_front_matter(file) {
                        let meta = parse_front_matter(front);
                        if !meta.title.is_empty() {
                            parsed += 1;
                        }
                    }
                }
                parsed
            });
        });
    }

    group.finish();
}

fn bench_index_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_sorting");

    for size in [1_000, 10_000, 50_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            // Pre-generate items outside the benchmark
            let items = generate_items(size);

            b.iter(|| {
                // Benchmark just the newest-first ordering pass
                let mut cloned = black_box(items.clone());
                cloned.sort_by(|a, b| {
                    parse_pub_date(&b.metadata.date).cmp(&parse_pub_date(&a.metadata.date))
                });
                cloned
            });
        });
    }

    group.finish();
}

fn bench_index_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_serialization");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let items = generate_items(size);

            b.iter(|| serde_json::to_string_pretty(black_box(&items)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_front_matter_parsing,
    bench_index_sorting,
    bench_index_serialization
);
criterion_main!(benches);
