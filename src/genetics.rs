//! Genetic primitives: genotypes, exact distributions, and their notation.
//!
//! # Encoding
//!
//! ```text
//!   bit:  7 6 | 5 4 | 3 2 | 1 0
//!  gene:   3  |  2  |  1  |  0
//! ```
//!
//! Each gene occupies two bits: `0b00` homozygous recessive (`rr`), `0b01`
//! heterozygous (`Rr`), `0b10` homozygous dominant (`RR`). `0b11` is unused.
//! Species with fewer than four genes leave the high loci at zero.

mod distribution;
mod genotype;
mod notation;

pub use distribution::{GeneticDistribution, PUNNETT_SQUARE};
pub use genotype::{GENOTYPE_COUNT, Genotype, GenotypeSet, MAX_GENES, Zygosity};
pub use notation::GenotypeFormat;
