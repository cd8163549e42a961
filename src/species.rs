//! Species phenotype tables.
//!
//! A [`Species`] maps every valid genotype to an observable phenotype label.
//! Species are plain immutable values passed explicitly to whatever needs
//! them; the built-in flower tables are constructed on request.

mod tables;

use crate::error::SpeciesError;
use crate::genetics::{
    GENOTYPE_COUNT, GeneticDistribution, Genotype, GenotypeFormat, GenotypeSet, MAX_GENES,
};

/// A species: its genotype notation and the phenotype of every genotype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    name: String,
    format: GenotypeFormat,
    /// Distinct phenotypes, ordered by the lowest genotype code showing each.
    phenotypes: Vec<String>,
    /// Index into `phenotypes` for each genotype code.
    phenotype_of: Vec<Option<usize>>,
}

impl Species {
    /// Build a species from `(genotype, phenotype)` entries.
    ///
    /// The first genotype fixes the notation (gene letters and count). The
    /// table must list each of the `3^genes` genotypes exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, a genotype cannot be parsed or
    /// is listed twice, or the table is incomplete.
    pub fn new<I, G, P>(name: impl Into<String>, entries: I) -> Result<Self, SpeciesError>
    where
        I: IntoIterator<Item = (G, P)>,
        G: AsRef<str>,
        P: AsRef<str>,
    {
        let name = name.into();
        let mut entries = entries.into_iter().peekable();
        let Some((first, _)) = entries.peek() else {
            return Err(SpeciesError::Empty(name));
        };
        let notation = |source| SpeciesError::Notation {
            species: name.clone(),
            source,
        };
        let format = GenotypeFormat::from_example(first.as_ref()).map_err(notation)?;

        let mut labels: Vec<Option<String>> = vec![None; GENOTYPE_COUNT];
        let mut count = 0usize;
        for (genotype, phenotype) in entries {
            let g = format.parse_genotype(genotype.as_ref()).map_err(notation)?;
            let slot = &mut labels[usize::from(g.code())];
            if slot.is_some() {
                return Err(SpeciesError::DuplicateGenotype {
                    species: name.clone(),
                    genotype: genotype.as_ref().to_string(),
                });
            }
            *slot = Some(phenotype.as_ref().to_string());
            count += 1;
        }

        let expected = Genotype::all(format.gene_count()).count();
        if count != expected {
            return Err(SpeciesError::Incomplete {
                species: name,
                actual: count,
                expected,
            });
        }

        let mut phenotypes: Vec<String> = Vec::new();
        let mut phenotype_of = vec![None; GENOTYPE_COUNT];
        for (code, label) in labels.into_iter().enumerate() {
            let Some(label) = label else { continue };
            let index = match phenotypes.iter().position(|p| *p == label) {
                Some(index) => index,
                None => {
                    phenotypes.push(label);
                    phenotypes.len() - 1
                }
            };
            phenotype_of[code] = Some(index);
        }

        Ok(Self {
            name,
            format,
            phenotypes,
            phenotype_of,
        })
    }

    /// Look up a built-in species by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError::Unknown`] if no built-in species has that name.
    pub fn builtin(name: &str) -> Result<Self, SpeciesError> {
        let (display, table) = tables::BUILTIN
            .iter()
            .find(|(display, _)| display.eq_ignore_ascii_case(name))
            .ok_or_else(|| SpeciesError::Unknown(name.to_string()))?;
        Self::new(*display, table.iter().copied())
    }

    /// Names of the built-in species.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        tables::BUILTIN.iter().map(|(name, _)| *name)
    }

    /// Human-readable name, e.g. `"Roses"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of genes (1 to [`MAX_GENES`]).
    #[must_use]
    pub fn gene_count(&self) -> usize {
        debug_assert!(self.format.gene_count() <= MAX_GENES);
        self.format.gene_count()
    }

    /// Genotype notation for this species.
    #[must_use]
    pub fn format(&self) -> &GenotypeFormat {
        &self.format
    }

    /// Distinct phenotypes of this species.
    #[must_use]
    pub fn phenotypes(&self) -> &[String] {
        &self.phenotypes
    }

    /// Phenotype of `genotype`, or `None` if it is not a genotype of this species.
    #[must_use]
    pub fn phenotype(&self, genotype: Genotype) -> Option<&str> {
        self.phenotype_of[usize::from(genotype.code())].map(|i| self.phenotypes[i].as_str())
    }

    /// Every genotype of this species, in code order.
    pub fn genotypes(&self) -> impl Iterator<Item = Genotype> {
        Genotype::all(self.gene_count())
    }

    /// The genotypes whose phenotype is one of `allowed`.
    #[must_use]
    pub fn genotypes_with_phenotypes<S: AsRef<str>>(&self, allowed: &[S]) -> GenotypeSet {
        self.genotypes()
            .filter(|&g| {
                self.phenotype(g)
                    .is_some_and(|p| allowed.iter().any(|a| a.as_ref() == p))
            })
            .collect()
    }

    /// Whether `distribution` is nonzero and every genotype it can produce shows `phenotype`.
    #[must_use]
    pub fn is_uniform(&self, distribution: &GeneticDistribution, phenotype: &str) -> bool {
        !distribution.is_zero()
            && distribution
                .iter()
                .all(|(g, _)| self.phenotype(g) == Some(phenotype))
    }

    /// Phenotype shared by every genotype of `distribution`, if there is one.
    #[must_use]
    pub fn uniform_phenotype(&self, distribution: &GeneticDistribution) -> Option<&str> {
        let (first, _) = distribution.iter().next()?;
        let phenotype = self.phenotype(first)?;
        self.is_uniform(distribution, phenotype).then_some(phenotype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_species_load() {
        for name in Species::builtin_names() {
            let species = Species::builtin(name).unwrap();
            let expected = if name == "Roses" { 81 } else { 27 };
            assert_eq!(species.genotypes().count(), expected, "{name}");
            assert!(species.genotypes().all(|g| species.phenotype(g).is_some()));
        }
    }

    #[test]
    fn test_builtin_lookup_ignores_case() {
        let roses = Species::builtin("roses").unwrap();
        assert_eq!(roses.name(), "Roses");
        assert_eq!(roses.gene_count(), 4);
        assert!(matches!(
            Species::builtin("daisies"),
            Err(SpeciesError::Unknown(_))
        ));
    }

    #[test]
    fn test_roses_blue() {
        let roses = Species::builtin("Roses").unwrap();
        let blue = roses.format().parse_genotype("RRYYwwss").unwrap();
        assert_eq!(roses.phenotype(blue), Some("Blue"));
        assert_eq!(roses.genotypes_with_phenotypes(&["Blue"]).len(), 1);
        assert_eq!(roses.phenotypes().len(), 8);
        // rryywwss is code 0.
        assert_eq!(roses.phenotypes()[0], "Purple");
    }

    #[test]
    fn test_incomplete_table() {
        let result = Species::new("Partial", [("Aa", "Pink"), ("AA", "Red")]);
        assert_eq!(
            result,
            Err(SpeciesError::Incomplete {
                species: "Partial".to_string(),
                actual: 2,
                expected: 3,
            })
        );
    }

    #[test]
    fn test_duplicate_genotype() {
        let result = Species::new("Dup", [("Aa", "Pink"), ("Aa", "Red"), ("aa", "White")]);
        assert!(matches!(result, Err(SpeciesError::DuplicateGenotype { .. })));
    }

    #[test]
    fn test_empty_table() {
        let entries: [(&str, &str); 0] = [];
        assert_eq!(
            Species::new("None", entries),
            Err(SpeciesError::Empty("None".to_string()))
        );
    }

    #[test]
    fn test_uniform_phenotype() {
        let species = Species::new("Snap", [("aa", "White"), ("Aa", "Pink"), ("AA", "Red")]).unwrap();
        let het = species.format().parse_distribution("Aa").unwrap();
        let mixed = het.breed(&het).unwrap();
        let red = species.format().parse_distribution("AA").unwrap();

        assert_eq!(species.uniform_phenotype(&red), Some("Red"));
        assert_eq!(species.uniform_phenotype(&mixed), None);
        assert!(!species.is_uniform(&GeneticDistribution::zero(), "Red"));
        assert_eq!(species.phenotypes(), ["White", "Pink", "Red"]);
    }
}
