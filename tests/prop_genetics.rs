//! Property-based tests for the distribution algebra and selection tests.
//!
//! Run with: cargo test --release prop_genetics

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use breedplan::{GeneticDistribution, Genotype, Species, Test, TestOutcome};

fn roses() -> Species {
    Species::builtin("Roses").unwrap()
}

/// A nonzero rose distribution with small weights.
fn rose_distribution() -> impl Strategy<Value = GeneticDistribution> {
    prop::collection::vec((0usize..81, 1u64..1000), 1..6).prop_map(|terms| {
        let genotypes: Vec<Genotype> = Genotype::all(4).collect();
        GeneticDistribution::from_weights(terms.into_iter().map(|(i, w)| (genotypes[i], w))).unwrap()
    })
}

/// `a` and `b` describe the same probabilities.
fn proportional(a: &GeneticDistribution, b: &GeneticDistribution) -> bool {
    let (ta, tb) = (a.total_weight(), b.total_weight());
    Genotype::all(4).all(|g| u128::from(a.weight(g)) * tb == u128::from(b.weight(g)) * ta)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Crossing is symmetric.
    #[test]
    fn prop_breed_commutative(a in rose_distribution(), b in rose_distribution()) {
        prop_assert_eq!(a.breed(&b).unwrap(), b.breed(&a).unwrap());
    }

    /// Cross results are nonzero and already in lowest terms.
    #[test]
    fn prop_breed_lowest_terms(a in rose_distribution(), b in rose_distribution()) {
        let child = a.breed(&b).unwrap();
        prop_assert!(!child.is_zero());
        prop_assert_eq!(child.common_divisor(), 1);
        prop_assert_eq!(child.reduce(), child);
    }

    /// Reduction keeps ratios and is idempotent.
    #[test]
    fn prop_reduce_preserves_ratios(d in rose_distribution(), scale in 1u64..1000) {
        let scaled = GeneticDistribution::from_weights(d.iter().map(|(g, w)| (g, w * scale))).unwrap();
        prop_assert_eq!(&scaled, &d);
        let reduced = d.reduce();
        prop_assert!(proportional(&reduced, &d));
        prop_assert_eq!(reduced.reduce(), reduced);
    }

    /// Offspring only carry genotypes of the right gene count.
    #[test]
    fn prop_breed_support_valid(a in rose_distribution(), b in rose_distribution()) {
        let child = a.breed(&b).unwrap();
        for (g, _) in child.iter() {
            prop_assert!(g.is_valid_for(4));
        }
    }

    /// A phenotype test keeps exactly the matching genotypes at cost >= 1.
    #[test]
    fn prop_phenotype_test_selects(d in rose_distribution(), pick in 0usize..8) {
        let species = roses();
        let phenotype = species.phenotypes()[pick].clone();
        let test = Test::phenotype(&species, &[phenotype.as_str()]);

        match test.apply(&d) {
            TestOutcome::Selected { distribution, cost } => {
                prop_assert!(cost >= 1.0);
                prop_assert_eq!(distribution.common_divisor(), 1);
                for (g, _) in distribution.iter() {
                    prop_assert_eq!(species.phenotype(g), Some(phenotype.as_str()));
                    prop_assert!(d.weight(g) > 0);
                }
            }
            TestOutcome::Inapplicable => {
                prop_assert!(d.iter().all(|(g, _)| species.phenotype(g) != Some(phenotype.as_str())));
            }
        }
    }

    /// The empty phenotype set never applies; the full set changes nothing.
    #[test]
    fn prop_phenotype_test_extremes(d in rose_distribution()) {
        let species = roses();
        let empty: [&str; 0] = [];
        prop_assert_eq!(Test::phenotype(&species, &empty).apply(&d), TestOutcome::Inapplicable);

        let all = Test::phenotype(&species, species.phenotypes());
        prop_assert_eq!(all.apply(&d), TestOutcome::Selected { distribution: d.clone(), cost: 1.0 });
    }
}

#[test]
fn test_homozygous_cross_is_certain() {
    let species = roses();
    let a = species.format().parse_distribution("RRYYWWSS").unwrap();
    let b = species.format().parse_distribution("rryywwss").unwrap();
    let child = a.breed(&b).unwrap();
    assert_eq!(child, species.format().parse_distribution("RrYyWwSs").unwrap());
    assert_eq!(child.support_len(), 1);
}

#[test]
fn test_het_self_cross_ratio() {
    let species = Species::new("Snap", [("aa", "White"), ("Aa", "Pink"), ("AA", "Red")]).unwrap();
    let het = species.format().parse_distribution("Aa").unwrap();
    let child = het.breed(&het).unwrap();
    assert_eq!(species.format().render_distribution(&child), "{1:aa, 2:Aa, 1:AA}");
}
