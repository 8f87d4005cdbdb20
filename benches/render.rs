// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxflow-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use boxflow::render::{compose_board, render_box};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.box`, `render.board`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.box");
    group.bench_function("tall_padded", |b| {
        b.iter(|| {
            let rendered = render_box(black_box("Long Word"), black_box(41), black_box(8))
                .expect("render_box");
            black_box(rendered.width())
        })
    });
    group.finish();

    let mut group = c.benchmark_group("render.board");
    for case in [
        fixtures::Case::Small,
        fixtures::Case::WideLocal,
        fixtures::Case::FarStacked,
    ] {
        let desc = fixtures::fixture(case);
        let boxes = desc
            .boxes
            .iter()
            .map(|b| b.render().expect("render_box"))
            .collect::<Vec<_>>();
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let board = compose_board(
                    black_box(&boxes),
                    black_box(&desc.local),
                    black_box(&desc.far),
                )
                .expect("compose_board");
                black_box(board.width())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
