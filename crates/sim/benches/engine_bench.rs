use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use longrep_sim::base::Sequence;
use longrep_sim::simulation::{BaseDistribution, generate};
use longrep_sim::trie::{SuffixTrie, compute_longest_repeat};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_longest_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_repeat");
    let dist = BaseDistribution::reference();

    for length in [100usize, 1_000, 10_000] {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(length as u64);
        let seq = generate(length, &dist, &mut rng);

        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::new("random", length), &seq, |b, seq| {
            b.iter(|| black_box(compute_longest_repeat(black_box(seq)).unwrap()))
        });
    }

    group.finish();
}

fn bench_repetitive_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("repetitive_input");

    for length in [100usize, 1_000] {
        let text: String = "ACGT".repeat(length / 4) + "$";
        let seq: Sequence = text.parse().unwrap();

        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::new("tandem_acgt", length), &seq, |b, seq| {
            b.iter(|| black_box(SuffixTrie::build(black_box(seq)).unwrap().node_count()))
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let dist = BaseDistribution::reference();
    let length = 10_000;

    group.throughput(Throughput::Elements(length as u64));
    group.bench_function("reference_10k", |b| {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        b.iter(|| black_box(generate(black_box(length), &dist, &mut rng)))
    });

    group.finish();
}

criterion_group!(benches, bench_longest_repeat, bench_repetitive_input, bench_generate);
criterion_main!(benches);
