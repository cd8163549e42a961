//! Text notation for genotypes and distributions.
//!
//! A genotype is written one two-letter gene at a time: `rr` (homozygous
//! recessive), `Rr` (heterozygous), `RR` (homozygous dominant). A distribution
//! is written `{1:rryyWwss, 2:RRyyWWSs}`, or as a bare genotype for a
//! distribution certain to be that genotype.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::error::NotationError;
use crate::genetics::distribution::GeneticDistribution;
use crate::genetics::genotype::{Genotype, MAX_GENES, Zygosity};

/// Gene letters for one species, derived from an example genotype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenotypeFormat {
    /// Upper-case letter of each gene, gene 0 first.
    letters: Vec<char>,
}

impl GenotypeFormat {
    /// Derive the format from an example such as `"RrYyWwSs"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the example has the wrong length, contains a
    /// malformed gene, or reuses a gene letter.
    pub fn from_example(example: &str) -> Result<Self, NotationError> {
        let chars: Vec<char> = example.chars().collect();
        if chars.is_empty() || chars.len() % 2 != 0 || chars.len() > 2 * MAX_GENES {
            return Err(NotationError::ExampleLength(example.to_string()));
        }

        let mut letters = Vec::with_capacity(chars.len() / 2);
        for pair in chars.chunks(2) {
            let (letter, _) = parse_gene(pair)?;
            if letters.contains(&letter) {
                return Err(NotationError::DuplicateLetter(letter));
            }
            letters.push(letter);
        }
        Ok(Self { letters })
    }

    /// Number of genes.
    #[must_use]
    pub fn gene_count(&self) -> usize {
        self.letters.len()
    }

    /// Parse a genotype such as `"RRyyWwss"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text has the wrong length or a gene does not
    /// use this format's letter for its position.
    pub fn parse_genotype(&self, text: &str) -> Result<Genotype, NotationError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 2 * self.letters.len() {
            return Err(NotationError::GenotypeLength {
                genotype: text.to_string(),
                expected: 2 * self.letters.len(),
            });
        }

        let mut genes = Vec::with_capacity(self.letters.len());
        for (pair, &expected) in chars.chunks(2).zip(&self.letters) {
            let (letter, zygosity) = parse_gene(pair)?;
            if letter != expected {
                return Err(NotationError::Gene(pair.iter().collect()));
            }
            genes.push(zygosity);
        }
        Ok(Genotype::from_zygosities(&genes))
    }

    /// Render a genotype. Loci holding the unused code render as `??`.
    #[must_use]
    pub fn render_genotype(&self, genotype: Genotype) -> String {
        let mut out = String::with_capacity(2 * self.letters.len());
        for (locus, &letter) in self.letters.iter().enumerate() {
            let lower = letter.to_ascii_lowercase();
            match genotype.gene(locus) {
                Some(Zygosity::HomozygousRecessive) => {
                    out.push(lower);
                    out.push(lower);
                }
                Some(Zygosity::Heterozygous) => {
                    out.push(letter);
                    out.push(lower);
                }
                Some(Zygosity::HomozygousDominant) => {
                    out.push(letter);
                    out.push(letter);
                }
                None => out.push_str("??"),
            }
        }
        out
    }

    /// Parse a distribution literal or a bare genotype.
    ///
    /// # Errors
    ///
    /// Returns an error for unbraced text that is not a genotype, malformed
    /// terms, zero weights, or duplicate genotypes.
    pub fn parse_distribution(&self, text: &str) -> Result<GeneticDistribution, NotationError> {
        let text = text.trim();
        let Some(inner) = text.strip_prefix('{').and_then(|t| t.strip_suffix('}')) else {
            if text.chars().count() == 2 * self.letters.len() {
                return Ok(GeneticDistribution::from_genotype(self.parse_genotype(text)?));
            }
            return Err(NotationError::Unbraced);
        };

        let mut seen = HashSet::new();
        let mut weights = Vec::new();
        for term in inner.split(',').map(str::trim) {
            let Some((weight, genotype)) = term.split_once(':') else {
                return Err(NotationError::Term(term.to_string()));
            };
            let weight: u64 = weight
                .trim()
                .parse()
                .map_err(|_| NotationError::Weight(term.to_string()))?;
            if weight == 0 {
                return Err(NotationError::Weight(term.to_string()));
            }
            let genotype = self.parse_genotype(genotype.trim())?;
            if !seen.insert(genotype) {
                return Err(NotationError::DuplicateGenotype(
                    self.render_genotype(genotype),
                ));
            }
            weights.push((genotype, weight));
        }
        GeneticDistribution::from_weights(weights).map_err(NotationError::from)
    }

    /// Render a distribution as `{w:genotype, ...}` in genotype code order.
    #[must_use]
    pub fn render_distribution(&self, distribution: &GeneticDistribution) -> String {
        let mut out = String::from("{");
        for (i, (genotype, weight)) in distribution.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{weight}:{}", self.render_genotype(genotype));
        }
        out.push('}');
        out
    }
}

/// Parse one two-character gene into its upper-case letter and zygosity.
fn parse_gene(pair: &[char]) -> Result<(char, Zygosity), NotationError> {
    let malformed = || NotationError::Gene(pair.iter().collect());
    let &[first, second] = pair else {
        return Err(malformed());
    };
    if !first.is_ascii_alphabetic() || first.to_ascii_uppercase() != second.to_ascii_uppercase() {
        return Err(malformed());
    }

    let letter = first.to_ascii_uppercase();
    let zygosity = match (first.is_ascii_uppercase(), second.is_ascii_uppercase()) {
        (false, false) => Zygosity::HomozygousRecessive,
        (true, false) => Zygosity::Heterozygous,
        (true, true) => Zygosity::HomozygousDominant,
        (false, true) => return Err(malformed()),
    };
    Ok((letter, zygosity))
}
