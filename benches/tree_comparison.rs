use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};

use ordered_tree::OrderedTree;
use simple_tree::SimpleTree;

trait Tree {
    fn new() -> Self;

    fn len(&self) -> usize;

    fn insert(&mut self, value: i64);

    fn contains(&self, value: &i64) -> bool;

    fn remove(&mut self, value: &i64) -> Option<i64>;
}

impl Tree for OrderedTree<i64> {
    fn new() -> Self {
        OrderedTree::new()
    }

    fn len(&self) -> usize {
        OrderedTree::len(self)
    }

    fn insert(&mut self, value: i64) {
        OrderedTree::insert(self, value)
    }

    fn contains(&self, value: &i64) -> bool {
        self.is_present(value)
    }

    fn remove(&mut self, value: &i64) -> Option<i64> {
        self.delete_key(value).ok()
    }
}

impl Tree for SimpleTree<i64> {
    fn new() -> Self {
        SimpleTree::new()
    }

    fn len(&self) -> usize {
        SimpleTree::len(self)
    }

    fn insert(&mut self, value: i64) {
        SimpleTree::insert(self, value)
    }

    fn contains(&self, value: &i64) -> bool {
        SimpleTree::contains(self, value)
    }

    fn remove(&mut self, value: &i64) -> Option<i64> {
        SimpleTree::remove(self, value)
    }
}

// Duplicates are dropped, which makes no difference with the keys below
impl Tree for BTreeSet<i64> {
    fn new() -> Self {
        BTreeSet::new()
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn insert(&mut self, value: i64) {
        BTreeSet::insert(self, value);
    }

    fn contains(&self, value: &i64) -> bool {
        BTreeSet::contains(self, value)
    }

    fn remove(&mut self, value: &i64) -> Option<i64> {
        BTreeSet::take(self, value)
    }
}

// Generates a value for the tree
//
// Note that the values returned are not guaranteed to be unique, but will be
// largely unique.
fn make_value(i: i64) -> i64 {
    // Make sure i >= 0
    let i = i.max(0);

    // Want to spread values out so we generate interesting trees. Trying not
    // to generate consecutive values or values that are strictly increasing
    // in magnitude, since those would degenerate into a list.

    // Since i >= 0, i % 3 = 0, 1, or 2
    // So 2/3 of numbers will be positive, 1/3 will be negative
    let sign = if i % 3 >= 1 { 1 } else { -1 };

    // Since i >= 0, i % 6 = 0, 1, 2, 3, 4, or 5
    // So 2/6 of numbers divided by 1 (no change)
    //    2/6 of numbers divided by 3
    //    2/6 of numbers divided by 6
    let divisor = match i % 6 {
        0 | 1 => 1,
        2 | 4 => 3,
        3 | 5 => 6,
        _ => unreachable!(),
    };

    sign * (i + 1) * 4 / divisor
}

/// Runs many consecutive inserts on a tree
fn benchmark_inserts<T: Tree>(inserts: usize) -> T {
    let mut tree = T::new();

    for i in 0..inserts {
        tree.insert(make_value(i as i64));
    }

    black_box(tree.len());
    tree
}

/// Runs many consecutive searches on a tree
fn benchmark_searches<T: Tree>(tree: &T, searches: usize) {
    for i in 0..searches {
        // Search in the opposite order to how the values were inserted
        let value = make_value((searches - i - 1) as i64);
        black_box(tree.contains(&value));
        // Usually absent
        black_box(tree.contains(&(value + 1)));
    }
}

/// Runs a bunch of operations on a tree
fn benchmark_tree_ops<T: Tree>(steps: usize) -> T {
    const MAX_INSERTS: usize = 5;
    const MAX_SEARCHES: usize = 3;
    const MAX_REMOVES: usize = 2;

    let mut tree = T::new();

    let mut value_i = 0;
    for i in 0..steps {
        // Perform a few insertions
        let insertions = i % MAX_INSERTS;
        // Loop always runs at least once
        for _ in 0..=insertions {
            tree.insert(make_value(value_i));
            value_i += 1;
        }

        let searches = MAX_SEARCHES - (i % MAX_SEARCHES);
        for j in 0..searches {
            black_box(tree.contains(&make_value(value_i - j as i64)));
        }

        // Remove several values, some of which are already gone
        let removes = MAX_REMOVES - (i % MAX_REMOVES);
        for j in 0..removes {
            black_box(tree.remove(&make_value(value_i - 2 * j as i64)));
        }
    }

    tree
}

pub fn bench_inserts(c: &mut Criterion) {
    const INSERTS: &[usize] = &[50, 100, 500, 1000, 2000];

    let mut group = c.benchmark_group("insert");
    for inserts in INSERTS {
        group.bench_with_input(BenchmarkId::new("BTreeSet", inserts), inserts, |b, &inserts| {
            b.iter(|| benchmark_inserts::<BTreeSet<i64>>(inserts))
        });
        group.bench_with_input(BenchmarkId::new("SimpleTree", inserts), inserts, |b, &inserts| {
            b.iter(|| benchmark_inserts::<SimpleTree<i64>>(inserts))
        });
        group.bench_with_input(BenchmarkId::new("OrderedTree", inserts), inserts, |b, &inserts| {
            b.iter(|| benchmark_inserts::<OrderedTree<i64>>(inserts))
        });
    }
    group.finish();
}

pub fn bench_searches(c: &mut Criterion) {
    const SEARCHES: &[usize] = &[50, 100, 500, 1000, 2000];

    let mut group = c.benchmark_group("search");
    for searches in SEARCHES {
        group.bench_with_input(BenchmarkId::new("BTreeSet", searches), searches, |b, &searches| {
            let tree = benchmark_inserts::<BTreeSet<i64>>(searches);
            b.iter(|| benchmark_searches(&tree, searches))
        });
        group.bench_with_input(BenchmarkId::new("SimpleTree", searches), searches, |b, &searches| {
            let tree = benchmark_inserts::<SimpleTree<i64>>(searches);
            b.iter(|| benchmark_searches(&tree, searches))
        });
        group.bench_with_input(BenchmarkId::new("OrderedTree", searches), searches, |b, &searches| {
            let tree = benchmark_inserts::<OrderedTree<i64>>(searches);
            b.iter(|| benchmark_searches(&tree, searches))
        });
    }
    group.finish();
}

pub fn bench_tree_ops(c: &mut Criterion) {
    const STEPS: &[usize] = &[50, 100, 1000, 2000, 4000];

    let mut group = c.benchmark_group("tree operations");
    for steps in STEPS {
        group.bench_with_input(BenchmarkId::new("BTreeSet", steps), steps, |b, &steps| {
            b.iter(|| benchmark_tree_ops::<BTreeSet<i64>>(steps))
        });
        group.bench_with_input(BenchmarkId::new("SimpleTree", steps), steps, |b, &steps| {
            b.iter(|| benchmark_tree_ops::<SimpleTree<i64>>(steps))
        });
        group.bench_with_input(BenchmarkId::new("OrderedTree", steps), steps, |b, &steps| {
            b.iter(|| benchmark_tree_ops::<OrderedTree<i64>>(steps))
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_inserts,
    bench_searches,
    bench_tree_ops,
);

criterion_main!(benches);
