//! Selection tests applied to a raw cross.
//!
//! A [`Test`] models what a breeder does with the offspring of a cross: keep
//! everything, or keep only individuals showing certain phenotypes and
//! discard the rest. Discarding costs attempts, so a test reports the
//! expected number of offspring needed per kept individual.

// Weights are converted to f64 only to report the expected-attempts cost.
#![allow(clippy::cast_precision_loss)]

use itertools::Itertools;

use crate::genetics::{GeneticDistribution, GenotypeSet};
use crate::species::Species;

/// Result of applying a [`Test`] to a distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    /// The test applies: `distribution` is what survives it, at `cost`
    /// expected breeding attempts per surviving individual.
    Selected {
        /// Distribution of the individuals that pass.
        distribution: GeneticDistribution,
        /// Expected attempts per passing individual (always >= 1).
        cost: f64,
    },
    /// No individual can pass, so the test is not applicable.
    Inapplicable,
}

impl TestOutcome {
    /// Whether the test was applicable.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Rule {
    AcceptAll,
    Retain(GenotypeSet),
}

/// A named selection strategy with a tie-break priority.
///
/// Smaller priorities are preferred when two candidate steps cost the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Test {
    name: String,
    priority: u32,
    rule: Rule,
}

impl Test {
    /// Accept every offspring of the raw cross, at cost 1.
    ///
    /// Has an empty name and priority 0.
    #[must_use]
    pub fn none() -> Self {
        Self {
            name: String::new(),
            priority: 0,
            rule: Rule::AcceptAll,
        }
    }

    /// Keep only offspring whose phenotype (in `species`) is one of `allowed`.
    ///
    /// Named `P∈{A,B}`; priority is the number of allowed phenotypes. Unknown
    /// phenotype names never match.
    #[must_use]
    pub fn phenotype<S: AsRef<str>>(species: &Species, allowed: &[S]) -> Self {
        let names: Vec<&str> = allowed.iter().map(AsRef::as_ref).collect();
        Self {
            name: format!("P∈{{{}}}", names.join(",")),
            priority: u32::try_from(allowed.len()).unwrap_or(u32::MAX),
            rule: Rule::Retain(species.genotypes_with_phenotypes(allowed)),
        }
    }

    /// Display name; empty for [`Test::none`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tie-break priority (smaller preferred).
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Apply the test to a raw cross.
    #[must_use]
    pub fn apply(&self, distribution: &GeneticDistribution) -> TestOutcome {
        match &self.rule {
            Rule::AcceptAll => TestOutcome::Selected {
                distribution: distribution.clone(),
                cost: 1.0,
            },
            Rule::Retain(allowed) => {
                let total = distribution.total_weight();
                let passing: u128 = distribution
                    .iter()
                    .filter(|&(g, _)| allowed.contains(g))
                    .map(|(_, w)| u128::from(w))
                    .sum();
                if passing == 0 {
                    return TestOutcome::Inapplicable;
                }
                TestOutcome::Selected {
                    distribution: distribution.retain(|g| allowed.contains(g)),
                    cost: total as f64 / passing as f64,
                }
            }
        }
    }
}

/// One phenotype test per proper, non-empty subset of the species' phenotypes.
///
/// The full set is left out: it passes everything and so duplicates [`Test::none`].
#[must_use]
pub fn phenotype_tests(species: &Species) -> Vec<Test> {
    phenotype_tests_up_to_size(species, species.phenotypes().len().saturating_sub(1))
}

/// One phenotype test per subset of the species' phenotypes with 1 to
/// `max_size` members (inclusive).
///
/// Subsets are produced by size, then in lexicographic order of phenotype
/// position.
#[must_use]
pub fn phenotype_tests_up_to_size(species: &Species, max_size: usize) -> Vec<Test> {
    let phenotypes = species.phenotypes();
    let max_size = max_size.min(phenotypes.len());

    let mut tests = Vec::new();
    for size in 1..=max_size {
        for subset in (0..phenotypes.len()).combinations(size) {
            let allowed: Vec<&str> = subset.iter().map(|&i| phenotypes[i].as_str()).collect();
            tests.push(Test::phenotype(species, &allowed));
        }
    }
    tests
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapdragon() -> Species {
        Species::new("Snap", [("aa", "White"), ("Aa", "Pink"), ("AA", "Red")]).unwrap()
    }

    #[test]
    fn test_none_is_identity() {
        let species = snapdragon();
        let d = species.format().parse_distribution("{1:aa, 2:Aa}").unwrap();
        assert_eq!(
            Test::none().apply(&d),
            TestOutcome::Selected {
                distribution: d.clone(),
                cost: 1.0
            }
        );
        assert_eq!(Test::none().name(), "");
        assert_eq!(Test::none().priority(), 0);
    }

    #[test]
    fn test_phenotype_test_cost_is_expected_attempts() {
        let species = snapdragon();
        let d = species.format().parse_distribution("{1:aa, 2:Aa, 1:AA}").unwrap();
        let test = Test::phenotype(&species, &["Red"]);
        assert_eq!(test.name(), "P∈{Red}");
        assert_eq!(test.priority(), 1);

        let TestOutcome::Selected { distribution, cost } = test.apply(&d) else {
            panic!("red offspring are possible");
        };
        assert_eq!(distribution, species.format().parse_distribution("AA").unwrap());
        assert!((cost - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_phenotype_test_inapplicable() {
        let species = snapdragon();
        let d = species.format().parse_distribution("aa").unwrap();
        assert_eq!(
            Test::phenotype(&species, &["Red"]).apply(&d),
            TestOutcome::Inapplicable
        );
        let empty: [&str; 0] = [];
        assert!(!Test::phenotype(&species, &empty).apply(&d).is_selected());
    }

    #[test]
    fn test_phenotype_tests_enumeration() {
        let species = snapdragon();
        let names: Vec<String> = phenotype_tests(&species)
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "P∈{White}",
                "P∈{Pink}",
                "P∈{Red}",
                "P∈{White,Pink}",
                "P∈{White,Red}",
                "P∈{Pink,Red}"
            ]
        );
        assert_eq!(phenotype_tests_up_to_size(&species, 1).len(), 3);
        assert_eq!(phenotype_tests_up_to_size(&species, 10).len(), 7);
    }
}
