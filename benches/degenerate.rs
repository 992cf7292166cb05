use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use rand::prelude::*;

use ordered_tree::OrderedTree;

/// The same values in increasing order and in a random order
fn inputs(len: usize) -> (Vec<u32>, Vec<u32>) {
    let sorted: Vec<u32> = (0..len as u32).collect();
    let mut shuffled = sorted.clone();
    shuffled.shuffle(&mut rand::thread_rng());
    (sorted, shuffled)
}

/// Sorted input turns the tree into a list, so every operation walks all of it
pub fn bench_insertion_order(c: &mut Criterion) {
    const LENGTHS: &[usize] = &[100, 500, 1000, 2000];

    let mut group = c.benchmark_group("insertion order");
    for &len in LENGTHS {
        let (sorted, shuffled) = inputs(len);

        group.bench_with_input(BenchmarkId::new("OrderedTree sorted", len), &sorted, |b, values| {
            b.iter(|| values.iter().copied().collect::<OrderedTree<_>>())
        });
        group.bench_with_input(BenchmarkId::new("OrderedTree shuffled", len), &shuffled, |b, values| {
            b.iter(|| values.iter().copied().collect::<OrderedTree<_>>())
        });
        group.bench_with_input(BenchmarkId::new("BTreeSet sorted", len), &sorted, |b, values| {
            b.iter(|| values.iter().copied().collect::<BTreeSet<_>>())
        });
    }
    group.finish();
}

pub fn bench_walks(c: &mut Criterion) {
    const LENGTHS: &[usize] = &[1000, 10000];

    let mut group = c.benchmark_group("walks");
    for &len in LENGTHS {
        let (sorted, shuffled) = inputs(len);
        let list: OrderedTree<_> = sorted.into_iter().collect();
        let bushy: OrderedTree<_> = shuffled.into_iter().collect();

        for (name, tree) in &[("sorted", &list), ("shuffled", &bushy)] {
            group.bench_with_input(BenchmarkId::new(format!("height {}", name), len), tree, |b, tree| {
                b.iter(|| black_box(tree.height()))
            });
            group.bench_with_input(BenchmarkId::new(format!("iter {}", name), len), tree, |b, tree| {
                b.iter(|| tree.iter().copied().max())
            });
            group.bench_with_input(BenchmarkId::new(format!("inorder {}", name), len), tree, |b, tree| {
                b.iter(|| tree.iter_inorder().copied().max())
            });
        }
    }
    group.finish();
}

criterion_group!(benches,
    bench_insertion_order,
    bench_walks,
);

criterion_main!(benches);
