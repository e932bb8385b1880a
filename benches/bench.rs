use std::collections::BTreeMap;

use criterion::*;
use rand::prelude::*;
use sklite::SkipList;

const N: u64 = 10_000;

fn shuffled_keys(seed: u64) -> Vec<u64> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut keys: Vec<u64> = (0..N).collect();
  keys.shuffle(&mut rng);
  keys
}

fn filled(keys: &[u64]) -> SkipList<u64, u64> {
  let mut l = SkipList::with_seed(1);
  for &k in keys {
    l.insert(k, k);
  }
  l
}

fn bench_insert(c: &mut Criterion) {
  let keys = shuffled_keys(0);
  let mut group = c.benchmark_group("insert");
  group.throughput(Throughput::Elements(N));

  group.bench_function("skiplist", |b| {
    b.iter_batched(
      || SkipList::with_seed(1),
      |mut l| {
        for &k in &keys {
          l.insert(k, k);
        }
        l
      },
      BatchSize::LargeInput,
    )
  });

  group.bench_function("btreemap", |b| {
    b.iter_batched(
      BTreeMap::new,
      |mut m| {
        for &k in &keys {
          m.insert(k, k);
        }
        m
      },
      BatchSize::LargeInput,
    )
  });
  group.finish();
}

fn bench_find(c: &mut Criterion) {
  let keys = shuffled_keys(0);
  let lookups = shuffled_keys(1);
  let l = filled(&keys);
  let m: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

  let mut group = c.benchmark_group("find");
  group.throughput(Throughput::Elements(N));
  group.bench_function("skiplist", |b| {
    b.iter(|| {
      for k in &lookups {
        black_box(l.find(k));
      }
    })
  });
  group.bench_function("btreemap", |b| {
    b.iter(|| {
      for k in &lookups {
        black_box(m.get(k));
      }
    })
  });
  group.finish();
}

fn bench_remove(c: &mut Criterion) {
  let keys = shuffled_keys(0);
  let removals = shuffled_keys(2);

  let mut group = c.benchmark_group("remove");
  group.throughput(Throughput::Elements(N));
  group.bench_function("skiplist", |b| {
    b.iter_batched(
      || filled(&keys),
      |mut l| {
        for k in &removals {
          black_box(l.remove(k));
        }
        l
      },
      BatchSize::LargeInput,
    )
  });
  group.finish();
}

fn bench_iter_levels(c: &mut Criterion) {
  let l = filled(&shuffled_keys(0));
  let mut group = c.benchmark_group("keys");
  for level in 0..l.height().min(4) {
    group.bench_with_input(BenchmarkId::from_parameter(level), &level, |b, &level| {
      b.iter(|| black_box(l.keys(level).unwrap().count()))
    });
  }
  group.finish();
}

criterion_group!(
  benches,
  bench_insert,
  bench_find,
  bench_remove,
  bench_iter_levels
);
criterion_main!(benches);
