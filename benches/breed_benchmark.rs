//! Benchmarks for crossing and selection.

#![allow(missing_docs)] // Benchmark macros generate undocumented functions
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use breedplan::{GeneticDistribution, Species, Test};

fn roses() -> Species {
    Species::builtin("Roses").unwrap()
}

fn bench_breed_genotypes(c: &mut Criterion) {
    let species = roses();
    let a = species.format().parse_distribution("RrYyWwSs").unwrap();
    let b = species.format().parse_distribution("RRyyWWSs").unwrap();

    c.bench_function("breed_single_genotypes", |bench| {
        bench.iter(|| black_box(&a).breed(black_box(&b)));
    });
}

fn bench_breed_wide(c: &mut Criterion) {
    // Every rose genotype with equal weight: the widest possible cross.
    let species = roses();
    let all = GeneticDistribution::from_weights(species.genotypes().map(|g| (g, 1))).unwrap();

    c.bench_function("breed_full_support", |bench| {
        bench.iter(|| black_box(&all).breed(black_box(&all)));
    });
}

fn bench_phenotype_test(c: &mut Criterion) {
    let species = roses();
    let het = species.format().parse_distribution("RrYyWwSs").unwrap();
    let cross = het.breed(&het).unwrap();
    let test = Test::phenotype(&species, &["Red", "Black"]);

    c.bench_function("phenotype_test_apply", |bench| {
        bench.iter(|| black_box(&test).apply(black_box(&cross)));
    });
}

criterion_group!(benches, bench_breed_genotypes, bench_breed_wide, bench_phenotype_test);
criterion_main!(benches);
