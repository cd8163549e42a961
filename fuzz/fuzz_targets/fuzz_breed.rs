#![no_main]

use arbitrary::Arbitrary;
use breedplan::{GeneticDistribution, Genotype};
use libfuzzer_sys::fuzz_target;

/// Structured input for cross fuzzing.
#[derive(Arbitrary, Debug)]
struct BreedInput {
    /// Gene count (folded into 1..=4).
    genes: u8,
    /// (genotype index, weight) terms of the first parent.
    first: Vec<(u8, u64)>,
    /// (genotype index, weight) terms of the second parent.
    second: Vec<(u8, u64)>,
}

fn distribution(genotypes: &[Genotype], terms: &[(u8, u64)]) -> Option<GeneticDistribution> {
    let weights = terms
        .iter()
        .take(16)
        .map(|&(i, w)| (genotypes[usize::from(i) % genotypes.len()], w));
    GeneticDistribution::from_weights(weights).ok()
}

fuzz_target!(|input: BreedInput| {
    let genes = usize::from(input.genes % 4) + 1;
    let genotypes: Vec<Genotype> = Genotype::all(genes).collect();

    let (Some(a), Some(b)) = (
        distribution(&genotypes, &input.first),
        distribution(&genotypes, &input.second),
    ) else {
        return;
    };

    // Overflow is a reported error, never a panic, and is symmetric.
    match (a.breed(&b), b.breed(&a)) {
        (Ok(ab), Ok(ba)) => {
            assert_eq!(ab, ba);
            assert_eq!(ab.is_zero(), a.is_zero() || b.is_zero());
            if !ab.is_zero() {
                assert_eq!(ab.common_divisor(), 1);
            }
            for (g, _) in ab.iter() {
                assert!(g.is_valid_for(genes));
            }
        }
        (Err(_), Err(_)) => {}
        (ab, ba) => panic!("asymmetric breed result: {ab:?} vs {ba:?}"),
    }
});
