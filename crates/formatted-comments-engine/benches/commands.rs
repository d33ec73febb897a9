use criterion::{Criterion, criterion_group, criterion_main};
use formatted_comments_engine::editing::{Editor, FormatKind, apply_format};
mod common;

fn bench_format_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("commands");
    group.sample_size(10);

    let content = common::generate_comment_text(100);

    group.bench_function("bold_command", |b| {
        b.iter(|| {
            let patch = apply_format(
                FormatKind::Bold,
                std::hint::black_box(&content),
                std::hint::black_box(50..80),
            );
            std::hint::black_box(patch)
        });
    });

    group.bench_function("list_command_whole_text", |b| {
        let end = content.len();
        b.iter(|| {
            let patch = apply_format(FormatKind::List, std::hint::black_box(&content), 0..end);
            std::hint::black_box(patch)
        });
    });

    group.bench_function("editor_apply_and_reparse", |b| {
        b.iter(|| {
            let mut editor = Editor::new(content.clone());
            editor.select(0..4).unwrap();
            let patch = editor.apply(FormatKind::Italic);
            std::hint::black_box(patch)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format_commands);
criterion_main!(benches);
