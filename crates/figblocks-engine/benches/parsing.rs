use criterion::{Criterion, criterion_group, criterion_main};
use figblocks_engine::parse;

fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n- Bullet point\n- Another item\n* Starred item\n\nClosing body line.\n\n";
    base.repeat(size)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    group.bench_function("parse_blocks", |b| {
        b.iter(|| {
            let blocks = parse(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
