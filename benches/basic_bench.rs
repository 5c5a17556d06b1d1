use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rt_bitvector::BitVector;
use std::hint::black_box;

const SIZES: &[usize] = &[64, 512, 4096, 32768];

fn bench_single_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_bit");

    group.bench_function("set_fixed", |b| {
        let mut bits = BitVector::fixed(4096);
        let mut i = 0;
        b.iter(|| {
            bits.set_bit(black_box(i % 4096));
            i += 1;
        });
    });

    group.bench_function("is_bit_set", |b| {
        let mut bits = BitVector::fixed(4096);
        for n in (0..4096).step_by(2) {
            bits.set_bit(n);
        }
        let mut i = 0;
        b.iter(|| {
            black_box(bits.is_bit_set(i % 4096));
            i += 1;
        });
    });

    group.bench_function("set_growing", |b| {
        b.iter(|| {
            let mut bits = BitVector::growable(0);
            for n in 0..4096 {
                bits.set_bit(black_box(n));
            }
            bits
        });
    });

    group.bench_function("allocate_release", |b| {
        let mut bits = BitVector::fixed(256);
        bits.set_initial_bits(200);
        b.iter(|| {
            let n = bits.allocate_first_clear_bit();
            if let Some(n) = black_box(n) {
                bits.clear_bit(n);
            }
        });
    });

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for &size in SIZES {
        let a: BitVector = (0..size).step_by(3).collect();
        let b: BitVector = (0..size).step_by(5).collect();

        group.bench_with_input(BenchmarkId::new("merge_checked", size), &size, |bench, _| {
            let mut dest = BitVector::growable(size);
            bench.iter(|| {
                dest.clear_all();
                black_box(dest.merge_checked(&a).unwrap() | dest.merge_checked(&b).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("intersect", size), &size, |bench, _| {
            let mut dest = BitVector::growable(size);
            bench.iter(|| dest.intersect(black_box(&a), black_box(&b)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("unify", size), &size, |bench, _| {
            let mut dest = BitVector::growable(size);
            bench.iter(|| dest.unify(black_box(&a), black_box(&b)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("differs", size), &size, |bench, _| {
            bench.iter(|| black_box(a.differs(black_box(&b))));
        });

        group.bench_with_input(BenchmarkId::new("count_set_bits", size), &size, |bench, _| {
            bench.iter(|| black_box(a.count_set_bits()));
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in SIZES {
        let sparse: BitVector = (0..size).step_by(97).collect();
        let dense: BitVector = (0..size).filter(|n| n % 4 != 0).collect();

        group.bench_with_input(BenchmarkId::new("sparse", size), &sparse, |b, bits| {
            b.iter(|| bits.iter().map(black_box).sum::<usize>());
        });

        group.bench_with_input(BenchmarkId::new("dense", size), &dense, |b, bits| {
            b.iter(|| bits.iter().map(black_box).sum::<usize>());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_bit, bench_aggregate, bench_iteration);
criterion_main!(benches);
