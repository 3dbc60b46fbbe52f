use chain_hashtable::{BuildHasherSlots, HashTable, Jenkins, SlotHash};
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

const ENTRIES: usize = 10_000;
// Fixed slot counts; the table never grows, so these set the load factor.
const SLOT_COUNTS: [usize; 3] = [16, 1024, 16_384];

fn campus_keys(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}/campus-{i:05}")).collect()
}

fn loaded<H: SlotHash>(slots: usize, slot_hash: H, keys: &[String]) -> HashTable<usize, H> {
    let mut t = HashTable::with_slot_hasher(slots, slot_hash).unwrap();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k, i).unwrap();
    }
    t
}

fn bench_insert(c: &mut Criterion) {
    let keys = campus_keys("insert", ENTRIES);
    let mut group = c.benchmark_group("hashtable::insert");
    group.throughput(Throughput::Elements(ENTRIES as u64));
    for slots in SLOT_COUNTS {
        group.bench_with_input(BenchmarkId::new("jenkins", slots), &slots, |b, &slots| {
            b.iter_batched(
                || HashTable::<usize>::new(slots).unwrap(),
                |mut t| {
                    for (i, k) in keys.iter().enumerate() {
                        t.insert(k, i).unwrap();
                    }
                    black_box(t)
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("build_hasher", slots), &slots, |b, &slots| {
            b.iter_batched(
                || HashTable::with_slot_hasher(slots, <BuildHasherSlots>::default()).unwrap(),
                |mut t| {
                    for (i, k) in keys.iter().enumerate() {
                        t.insert(k, i).unwrap();
                    }
                    black_box(t)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let keys = campus_keys("find", ENTRIES);
    let absent = campus_keys("absent", ENTRIES);
    let mut group = c.benchmark_group("hashtable::find");
    group.throughput(Throughput::Elements(ENTRIES as u64));
    for slots in SLOT_COUNTS {
        let t = loaded(slots, Jenkins, &keys);
        group.bench_with_input(BenchmarkId::new("hit", slots), &t, |b, t| {
            b.iter(|| {
                for k in &keys {
                    black_box(t.find(k));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("miss", slots), &t, |b, t| {
            b.iter(|| {
                for k in &absent {
                    black_box(t.find(k));
                }
            })
        });
    }
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let keys = campus_keys("walk", ENTRIES);
    let mut group = c.benchmark_group("hashtable::walk");
    group.throughput(Throughput::Elements(ENTRIES as u64));
    for slots in SLOT_COUNTS {
        let t = loaded(slots, Jenkins, &keys);
        group.bench_with_input(BenchmarkId::new("iterate", slots), &t, |b, t| {
            b.iter(|| {
                let mut sum = 0usize;
                t.iterate(|_, v| sum = sum.wrapping_add(*v));
                black_box(sum)
            })
        });
        group.bench_with_input(BenchmarkId::new("delete", slots), &slots, |b, &slots| {
            b.iter_batched(
                || loaded(slots, Jenkins, &keys),
                |t| {
                    let mut released = 0usize;
                    t.delete(|_| released += 1);
                    black_box(released)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_find, bench_walk);
criterion_main!(benches);
