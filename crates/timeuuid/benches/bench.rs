use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};
use timeuuid::{
    AtomicUuidV1Generator, BasicUuidV1Generator, LockUuidV1Generator, NodeId, SystemClock,
    ThreadRandom, TimeSource, UuidV1Generator,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of UUIDs generated per benchmark iteration (split across threads for
// the contended benches).
const TOTAL_IDS: usize = 4096;

const NODE: NodeId = NodeId::new([0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);

fn thread_counts() -> Vec<usize> {
    let mut counts = vec![1, 2, 4, 8];
    let cpus = num_cpus::get();
    if !counts.contains(&cpus) {
        counts.push(cpus);
    }
    counts
}

/// Benchmarks a single caller on one generator.
fn bench_generator<G, T>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: UuidV1Generator<T>,
    T: TimeSource<u64>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.try_next_uuid().unwrap());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks the caller-supplied node path, including node validation.
fn bench_generator_with_node<G, T>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
) where
    G: UuidV1Generator<T>,
    T: TimeSource<u64>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let bytes: &[u8] = NODE.as_bytes();
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_uuid_with_node(black_box(bytes)).unwrap());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a shared generator across threads.
fn bench_generator_contended<G, T>(
    c: &mut Criterion,
    group_name: &str,
    generator_fn: impl Fn() -> G,
) where
    G: UuidV1Generator<T> + Send + Sync,
    T: TimeSource<u64>,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in thread_counts() {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = Arc::new(generator_fn());
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.try_next_uuid().unwrap());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

// --- Fixed clock: every call after the first bumps the clock sequence ---

fn benchmark_mock_sequential_basic(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/basic", || {
        BasicUuidV1Generator::from_components(NODE, 0, 0, FixedMockTime { millis: 1 })
    });
}

fn benchmark_mock_sequential_lock(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/lock", || {
        LockUuidV1Generator::from_components(NODE, 0, 0, FixedMockTime { millis: 1 })
    });
}

fn benchmark_mock_sequential_atomic(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/atomic", || {
        AtomicUuidV1Generator::from_components(NODE, 0, 0, FixedMockTime { millis: 1 })
    });
}

fn benchmark_mock_contended_lock(c: &mut Criterion) {
    bench_generator_contended(c, "mock/contended/lock", || {
        LockUuidV1Generator::from_components(NODE, 0, 0, FixedMockTime { millis: 1 })
    });
}

fn benchmark_mock_contended_atomic(c: &mut Criterion) {
    bench_generator_contended(c, "mock/contended/atomic", || {
        AtomicUuidV1Generator::from_components(NODE, 0, 0, FixedMockTime { millis: 1 })
    });
}

// --- System clock ---

fn benchmark_system_sequential_basic(c: &mut Criterion) {
    bench_generator(c, "system/sequential/basic", || {
        BasicUuidV1Generator::new(SystemClock, ThreadRandom)
    });
}

fn benchmark_system_sequential_lock(c: &mut Criterion) {
    bench_generator(c, "system/sequential/lock", || {
        LockUuidV1Generator::new(SystemClock, ThreadRandom)
    });
}

fn benchmark_system_sequential_atomic(c: &mut Criterion) {
    bench_generator(c, "system/sequential/atomic", || {
        AtomicUuidV1Generator::new(SystemClock, ThreadRandom)
    });
}

fn benchmark_system_with_node_atomic(c: &mut Criterion) {
    bench_generator_with_node(c, "system/with_node/atomic", || {
        AtomicUuidV1Generator::new(SystemClock, ThreadRandom)
    });
}

fn benchmark_system_threaded_lock(c: &mut Criterion) {
    bench_generator_contended(c, "system/threaded/lock", || {
        LockUuidV1Generator::new(SystemClock, ThreadRandom)
    });
}

fn benchmark_system_threaded_atomic(c: &mut Criterion) {
    bench_generator_contended(c, "system/threaded/atomic", || {
        AtomicUuidV1Generator::new(SystemClock, ThreadRandom)
    });
}

criterion_group!(
    benches,
    // Fixed clock
    benchmark_mock_sequential_basic,
    benchmark_mock_sequential_lock,
    benchmark_mock_sequential_atomic,
    benchmark_mock_contended_lock,
    benchmark_mock_contended_atomic,
    // System clock
    benchmark_system_sequential_basic,
    benchmark_system_sequential_lock,
    benchmark_system_sequential_atomic,
    benchmark_system_with_node_atomic,
    benchmark_system_threaded_lock,
    benchmark_system_threaded_atomic,
);
criterion_main!(benches);
