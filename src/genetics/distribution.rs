//! Exact integer-weighted distributions over genotypes.
//!
//! Weights are kept in lowest terms after every construction, so two
//! distributions describing the same probabilities compare (and hash) equal.
//! The all-zero distribution is a sentinel and never the result of breeding
//! two real distributions.

// Genotype codes index a 256-entry table; the u8 casts below are lossless.
#![allow(clippy::cast_possible_truncation)]

use std::fmt;

use crate::error::DistributionError;
use crate::genetics::genotype::{GENOTYPE_COUNT, Genotype, MAX_GENES};

/// Relative offspring zygosity frequencies for one gene.
///
/// Indexed `[parent_a][parent_b][offspring]` by zygosity code. Each row sums
/// to 4 (the four cells of a Punnett square).
pub const PUNNETT_SQUARE: [[[u64; 3]; 3]; 3] = punnett_square();

/// Build the Punnett table from allele contributions.
///
/// A parent with zygosity `z` passes on a dominant allele in `z` of its two
/// cells and a recessive allele in the other `2 - z`.
const fn punnett_square() -> [[[u64; 3]; 3]; 3] {
    let mut table = [[[0u64; 3]; 3]; 3];
    let mut a = 0;
    while a < 3 {
        let mut b = 0;
        while b < 3 {
            let mut x = 0;
            while x < 2 {
                let mut y = 0;
                while y < 2 {
                    let wa = if x == 0 { 2 - a } else { a };
                    let wb = if y == 0 { 2 - b } else { b };
                    table[a][b][x + y] += (wa * wb) as u64;
                    y += 1;
                }
                x += 1;
            }
            b += 1;
        }
        a += 1;
    }
    table
}

macro_rules! binary_gcd {
    ($name:ident, $ty:ty) => {
        /// Stein's binary GCD. `gcd(0, v) == v`.
        fn $name(mut u: $ty, mut v: $ty) -> $ty {
            if u == 0 {
                return v;
            }
            if v == 0 {
                return u;
            }
            let shift = (u | v).trailing_zeros();
            u >>= u.trailing_zeros();
            // Loop invariant: u is odd.
            while v != 0 {
                v >>= v.trailing_zeros();
                if u > v {
                    std::mem::swap(&mut u, &mut v);
                }
                v -= u;
            }
            u << shift
        }
    };
}

binary_gcd!(gcd, u64);
binary_gcd!(gcd_wide, u128);

/// A probability distribution over all genotype codes, as lowest-terms integer weights.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GeneticDistribution {
    weights: [u64; GENOTYPE_COUNT],
}

impl Default for GeneticDistribution {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for GeneticDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(g, w)| (g.code(), w)))
            .finish()
    }
}

impl GeneticDistribution {
    /// The all-zero sentinel.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            weights: [0; GENOTYPE_COUNT],
        }
    }

    /// A distribution certain to be `genotype`.
    #[must_use]
    pub fn from_genotype(genotype: Genotype) -> Self {
        let mut d = Self::zero();
        d.weights[usize::from(genotype.code())] = 1;
        d
    }

    /// Build a reduced distribution from `(genotype, weight)` pairs.
    ///
    /// Repeated genotypes accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::WeightOverflow`] if an accumulated weight
    /// does not fit in a `u64`.
    pub fn from_weights<I>(weights: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = (Genotype, u64)>,
    {
        let mut d = Self::zero();
        for (genotype, weight) in weights {
            let slot = &mut d.weights[usize::from(genotype.code())];
            *slot = slot
                .checked_add(weight)
                .ok_or(DistributionError::WeightOverflow)?;
        }
        Ok(d.reduce())
    }

    /// Whether every weight is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0)
    }

    /// Weight of `genotype`.
    #[must_use]
    pub fn weight(&self, genotype: Genotype) -> u64 {
        self.weights[usize::from(genotype.code())]
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> u128 {
        self.weights.iter().map(|&w| u128::from(w)).sum()
    }

    /// Number of genotypes with nonzero weight.
    #[must_use]
    pub fn support_len(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0).count()
    }

    /// Nonzero `(genotype, weight)` entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (Genotype, u64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(code, &w)| (Genotype::from_code(code as u8), w))
    }

    /// Greatest common divisor of the nonzero weights (0 for the sentinel).
    #[must_use]
    pub fn common_divisor(&self) -> u64 {
        self.weights
            .iter()
            .fold(0, |g, &w| if g == 1 { 1 } else { gcd(g, w) })
    }

    /// Divide every weight by the GCD of the nonzero weights.
    ///
    /// Idempotent; the zero sentinel is returned unchanged.
    #[must_use]
    pub fn reduce(&self) -> Self {
        let mut d = self.clone();
        let g = d.common_divisor();
        if g > 1 {
            for w in &mut d.weights {
                *w /= g;
            }
        }
        d
    }

    /// Zero every genotype for which `keep` is false, then reduce.
    ///
    /// The result is the zero sentinel if nothing survives.
    #[must_use]
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(Genotype) -> bool,
    {
        let mut d = self.clone();
        for (code, w) in d.weights.iter_mut().enumerate() {
            if *w != 0 && !keep(Genotype::from_code(code as u8)) {
                *w = 0;
            }
        }
        d.reduce()
    }

    /// Cross two distributions.
    ///
    /// Every pair of supported parent genotypes contributes, per gene, the
    /// Punnett frequencies of each offspring zygosity, multiplied across genes
    /// and by both parent weights. The sum is reduced to lowest terms.
    /// Genotypes carrying the unused code at any gene are sterile.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::WeightOverflow`] if the reduced weights do
    /// not fit in a `u64`.
    pub fn breed(&self, other: &Self) -> Result<Self, DistributionError> {
        let mut acc = [0u128; GENOTYPE_COUNT];
        let mut bred_any = false;

        for (ga, pa) in self.iter() {
            for (gb, pb) in other.iter() {
                let Some(rows) = punnett_rows(ga, gb) else {
                    continue;
                };
                breed_into(&mut acc, u128::from(pa) * u128::from(pb), &rows)?;
                bred_any = true;
            }
        }

        let g = acc
            .iter()
            .fold(0, |g, &w| if g == 1 { 1 } else { gcd_wide(g, w) });
        let mut result = Self::zero();
        for (slot, &w) in result.weights.iter_mut().zip(&acc) {
            let w = if g > 1 { w / g } else { w };
            *slot = u64::try_from(w).map_err(|_| DistributionError::WeightOverflow)?;
        }

        debug_assert!(
            !bred_any || !result.is_zero(),
            "breeding fertile genotypes produced the zero distribution"
        );
        Ok(result)
    }
}

/// Punnett rows for every gene of a parent pair, or `None` if either is sterile.
fn punnett_rows(ga: Genotype, gb: Genotype) -> Option<[&'static [u64; 3]; MAX_GENES]> {
    let mut rows = [&PUNNETT_SQUARE[0][0]; MAX_GENES];
    for (locus, row) in rows.iter_mut().enumerate() {
        *row = PUNNETT_SQUARE
            .get(usize::from(ga.bits(locus)))?
            .get(usize::from(gb.bits(locus)))?;
    }
    Some(rows)
}

fn breed_into(
    acc: &mut [u128; GENOTYPE_COUNT],
    weight: u128,
    rows: &[&[u64; 3]; MAX_GENES],
) -> Result<(), DistributionError> {
    let [r0, r1, r2, r3] = rows;
    for (z0, &w0) in r0.iter().enumerate().filter(|&(_, &w)| w != 0) {
        for (z1, &w1) in r1.iter().enumerate().filter(|&(_, &w)| w != 0) {
            for (z2, &w2) in r2.iter().enumerate().filter(|&(_, &w)| w != 0) {
                for (z3, &w3) in r3.iter().enumerate().filter(|&(_, &w)| w != 0) {
                    let code = z0 | (z1 << 2) | (z2 << 4) | (z3 << 6);
                    let term = weight
                        .checked_mul(u128::from(w0 * w1 * w2 * w3))
                        .ok_or(DistributionError::WeightOverflow)?;
                    acc[code] = acc[code]
                        .checked_add(term)
                        .ok_or(DistributionError::WeightOverflow)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::Zygosity;

    fn genotype(genes: &[Zygosity]) -> Genotype {
        Genotype::from_zygosities(genes)
    }

    #[test]
    fn test_punnett_square_matches_reference_table() {
        let expected = [
            [[4, 0, 0], [2, 2, 0], [0, 4, 0]],
            [[2, 2, 0], [1, 2, 1], [0, 2, 2]],
            [[0, 4, 0], [0, 2, 2], [0, 0, 4]],
        ];
        assert_eq!(PUNNETT_SQUARE, expected);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 6), 6);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd_wide(1 << 70, 1 << 65), 1 << 65);
    }

    #[test]
    fn test_heterozygous_self_cross_is_one_two_one() {
        let het = GeneticDistribution::from_genotype(genotype(&[Zygosity::Heterozygous]));
        let child = het.breed(&het).unwrap();

        assert_eq!(child.weight(genotype(&[Zygosity::HomozygousDominant])), 1);
        assert_eq!(child.weight(genotype(&[Zygosity::Heterozygous])), 2);
        assert_eq!(child.weight(genotype(&[Zygosity::HomozygousRecessive])), 1);
        assert_eq!(child.support_len(), 3);
        assert_eq!(child.common_divisor(), 1);
    }

    #[test]
    fn test_breed_is_commutative() {
        let a = GeneticDistribution::from_weights([
            (genotype(&[Zygosity::Heterozygous, Zygosity::HomozygousDominant]), 3),
            (genotype(&[Zygosity::HomozygousRecessive, Zygosity::Heterozygous]), 1),
        ])
        .unwrap();
        let b = GeneticDistribution::from_genotype(genotype(&[
            Zygosity::HomozygousDominant,
            Zygosity::Heterozygous,
        ]));
        assert_eq!(a.breed(&b).unwrap(), b.breed(&a).unwrap());
    }

    #[test]
    fn test_from_weights_reduces() {
        let d = GeneticDistribution::from_weights([
            (Genotype::from_code(0), 4),
            (Genotype::from_code(1), 6),
        ])
        .unwrap();
        assert_eq!(d.weight(Genotype::from_code(0)), 2);
        assert_eq!(d.weight(Genotype::from_code(1)), 3);
        assert_eq!(d.total_weight(), 5);
    }

    #[test]
    fn test_from_weights_overflow() {
        let result = GeneticDistribution::from_weights([
            (Genotype::from_code(0), u64::MAX),
            (Genotype::from_code(0), 1),
        ]);
        assert_eq!(result, Err(DistributionError::WeightOverflow));
    }

    #[test]
    fn test_reduce_zero_is_noop() {
        assert!(GeneticDistribution::zero().reduce().is_zero());
        assert_eq!(GeneticDistribution::zero().common_divisor(), 0);
    }

    #[test]
    fn test_retain_filters_and_reduces() {
        let d = GeneticDistribution::from_weights([
            (Genotype::from_code(0), 1),
            (Genotype::from_code(1), 2),
            (Genotype::from_code(2), 1),
        ])
        .unwrap();
        let kept = d.retain(|g| g.code() == 1);
        assert_eq!(kept, GeneticDistribution::from_genotype(Genotype::from_code(1)));
        assert!(d.retain(|_| false).is_zero());
    }

    #[test]
    fn test_sterile_genotypes_do_not_breed() {
        let sterile = GeneticDistribution::from_genotype(Genotype::from_code(0b11));
        let fertile = GeneticDistribution::from_genotype(Genotype::from_code(0));
        assert!(sterile.breed(&fertile).unwrap().is_zero());
    }

    #[test]
    fn test_debug_lists_support() {
        let d = GeneticDistribution::from_genotype(Genotype::from_code(5));
        assert_eq!(format!("{d:?}"), "{5: 1}");
    }
}
