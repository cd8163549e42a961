//! Bit-packed genotype codes.

/// Maximum number of genes a species may have.
pub const MAX_GENES: usize = 4;

/// Number of distinct genotype codes (two bits per gene).
pub const GENOTYPE_COUNT: usize = 1 << (2 * MAX_GENES);

/// Zygosity of a single gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zygosity {
    /// Two recessive alleles (`rr`).
    HomozygousRecessive = 0,
    /// One dominant and one recessive allele (`Rr`).
    Heterozygous = 1,
    /// Two dominant alleles (`RR`).
    HomozygousDominant = 2,
}

impl Zygosity {
    /// All zygosities in code order.
    pub const ALL: [Self; 3] = [
        Self::HomozygousRecessive,
        Self::Heterozygous,
        Self::HomozygousDominant,
    ];

    /// Decode a two-bit value. Returns `None` for the unused code `0b11`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::HomozygousRecessive),
            1 => Some(Self::Heterozygous),
            2 => Some(Self::HomozygousDominant),
            _ => None,
        }
    }

    /// Number of dominant alleles (0, 1 or 2).
    #[must_use]
    pub const fn dominant_alleles(self) -> u8 {
        self as u8
    }
}

/// A genotype: the zygosity of every gene of one individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Genotype(u8);

impl Genotype {
    /// Wrap a raw genotype code.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        Self(code)
    }

    /// Build a genotype from per-gene zygosities, gene 0 first.
    ///
    /// Genes beyond [`MAX_GENES`] are ignored.
    #[must_use]
    pub fn from_zygosities(genes: &[Zygosity]) -> Self {
        let code = genes
            .iter()
            .take(MAX_GENES)
            .enumerate()
            .fold(0u8, |code, (locus, z)| code | (z.dominant_alleles() << (2 * locus)));
        Self(code)
    }

    /// Raw genotype code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Raw two-bit value at `locus`.
    #[must_use]
    pub(crate) const fn bits(self, locus: usize) -> u8 {
        (self.0 >> (2 * locus)) & 0b11
    }

    /// Zygosity of the gene at `locus`, or `None` if the locus holds the unused code.
    #[must_use]
    pub const fn gene(self, locus: usize) -> Option<Zygosity> {
        if locus >= MAX_GENES {
            return None;
        }
        Zygosity::from_bits(self.bits(locus))
    }

    /// Whether this code is a genotype of a species with `gene_count` genes.
    #[must_use]
    pub fn is_valid_for(self, gene_count: usize) -> bool {
        (0..MAX_GENES).all(|locus| match self.gene(locus) {
            Some(z) => locus < gene_count || z == Zygosity::HomozygousRecessive,
            None => false,
        })
    }

    /// Every valid genotype of a species with `gene_count` genes, in code order.
    pub fn all(gene_count: usize) -> impl Iterator<Item = Self> {
        (0..=u8::MAX)
            .map(Self)
            .filter(move |g| g.is_valid_for(gene_count))
    }
}

/// A set of genotype codes, stored as a 256-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GenotypeSet([u64; GENOTYPE_COUNT / 64]);

impl GenotypeSet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; GENOTYPE_COUNT / 64])
    }

    /// Add a genotype.
    pub fn insert(&mut self, genotype: Genotype) {
        let code = usize::from(genotype.code());
        self.0[code / 64] |= 1u64 << (code % 64);
    }

    /// Whether `genotype` is a member.
    #[must_use]
    pub fn contains(&self, genotype: Genotype) -> bool {
        let code = usize::from(genotype.code());
        self.0[code / 64] & (1u64 << (code % 64)) != 0
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Whether the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }
}

impl FromIterator<Genotype> for GenotypeSet {
    fn from_iter<I: IntoIterator<Item = Genotype>>(iter: I) -> Self {
        let mut set = Self::new();
        for genotype in iter {
            set.insert(genotype);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_zygosities_packs_low_gene_first() {
        let g = Genotype::from_zygosities(&[
            Zygosity::HomozygousDominant,
            Zygosity::HomozygousRecessive,
            Zygosity::Heterozygous,
        ]);
        assert_eq!(g.code(), 0b01_00_10);
        assert_eq!(g.gene(0), Some(Zygosity::HomozygousDominant));
        assert_eq!(g.gene(1), Some(Zygosity::HomozygousRecessive));
        assert_eq!(g.gene(2), Some(Zygosity::Heterozygous));
        assert_eq!(g.gene(3), Some(Zygosity::HomozygousRecessive));
    }

    #[test]
    fn test_unused_code_is_invalid() {
        let g = Genotype::from_code(0b11);
        assert_eq!(g.gene(0), None);
        assert!(!g.is_valid_for(4));
    }

    #[test]
    fn test_all_counts_three_to_the_genes() {
        assert_eq!(Genotype::all(1).count(), 3);
        assert_eq!(Genotype::all(3).count(), 27);
        assert_eq!(Genotype::all(4).count(), 81);
        assert!(Genotype::all(3).all(|g| g.gene(3) == Some(Zygosity::HomozygousRecessive)));
    }

    #[test]
    fn test_genotype_set_membership() {
        let set: GenotypeSet = [Genotype::from_code(0), Genotype::from_code(200)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Genotype::from_code(200)));
        assert!(!set.contains(Genotype::from_code(1)));
        assert!(GenotypeSet::new().is_empty());
    }
}
