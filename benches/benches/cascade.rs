// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_cascade::{
    Attributes, CascadeField, CascadeHelper, EmitterConfig, IncludeBlank, RenderSession,
    ScriptEmitter, SelectOptions,
};
use understory_relation::{Indexed, index};

#[derive(Clone)]
struct Row {
    id: u32,
    name: String,
    parent: u32,
}

/// `parents` parents with `per_parent` children each, interleaved so buckets grow in turns.
fn gen_rows(parents: u32, per_parent: u32) -> Vec<Row> {
    let mut out = Vec::with_capacity((parents * per_parent) as usize);
    for i in 0..per_parent {
        for p in 0..parents {
            let id = p * per_parent + i;
            out.push(Row {
                id,
                name: format!("Item {id}"),
                parent: p,
            });
        }
    }
    out
}

fn gen_index(parents: u32, per_parent: u32) -> Indexed {
    index(
        gen_rows(parents, per_parent),
        |r| r.id,
        |r| r.name.clone(),
        |r| r.parent,
    )
}

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    for &(parents, per_parent) in &[(10_u32, 10_u32), (100, 50), (1000, 20)] {
        let rows = gen_rows(parents, per_parent);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_function(format!("{parents}x{per_parent}"), |b| {
            b.iter_batched(
                || rows.clone(),
                |rows| black_box(index(rows, |r| r.id, |r| r.name.clone(), |r| r.parent)),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_relation_hash(c: &mut Criterion) {
    let emitter = ScriptEmitter::default();
    let options = SelectOptions {
        include_blank: IncludeBlank::Placeholder("-".into()),
        ..SelectOptions::default()
    };
    let mut group = c.benchmark_group("relation_hash");
    for &(parents, per_parent) in &[(10_u32, 10_u32), (1000, 20)] {
        let indexed = gen_index(parents, per_parent);
        group.bench_function(format!("{parents}x{per_parent}"), |b| {
            b.iter(|| black_box(emitter.relation_hash(&indexed.relations, None, &options)));
        });
    }
    group.finish();
}

fn bench_render_chain(c: &mut Criterion) {
    let helper = CascadeHelper::new(ScriptEmitter::new(EmitterConfig::default()));
    let levels: Vec<Indexed> = (0..6).map(|_| gen_index(50, 10)).collect();
    c.bench_function("render_chain_6_levels", |b| {
        b.iter_batched(
            RenderSession::new,
            |mut session| {
                for (depth, indexed) in levels.iter().enumerate() {
                    let parent = match depth {
                        0 => "form_root".to_string(),
                        d => format!("form_level{}", d - 1),
                    };
                    let field = CascadeField::new("form", format!("level{depth}"), parent);
                    let options = SelectOptions {
                        selected: Some("3".into()),
                        ..SelectOptions::default()
                    };
                    let attrs = Attributes::new();
                    black_box(helper.render(&mut session, &field, indexed, &options, &attrs));
                }
                session
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_index, bench_relation_hash, bench_render_chain);
criterion_main!(benches);
