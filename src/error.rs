//! Error types for breeding-plan computation.
//!
//! Only structural problems are errors here. A test that cannot be applied to a
//! distribution, or a search that finds nothing, is ordinary data and is
//! reported through [`crate::selection::TestOutcome`] and `Option` instead.

use thiserror::Error;

/// Errors raised while parsing or rendering genotype notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The example genotype has an unsupported length.
    #[error("genotype {0:?} has wrong length (expected an even length between 2 and 8)")]
    ExampleLength(String),
    /// A two-letter gene could not be interpreted.
    #[error("could not parse gene {0:?}")]
    Gene(String),
    /// The same gene letter is used for more than one locus.
    #[error("duplicate gene letter {0:?}")]
    DuplicateLetter(char),
    /// A genotype does not have the length this format expects.
    #[error("genotype {genotype:?} has wrong length (expected {expected})")]
    GenotypeLength {
        /// The offending genotype text.
        genotype: String,
        /// The expected number of characters.
        expected: usize,
    },
    /// A distribution literal is not wrapped in braces.
    #[error("couldn't parse genetic distribution: not wrapped in curly braces")]
    Unbraced,
    /// A distribution term is not of the form `weight:genotype`.
    #[error("couldn't parse genetic distribution: unparseable term {0:?}")]
    Term(String),
    /// A distribution term has an invalid or zero weight.
    #[error("couldn't parse genetic distribution: bad weight in term {0:?}")]
    Weight(String),
    /// The same genotype appears twice in a distribution literal.
    #[error("couldn't parse genetic distribution: duplicate genotype {0:?}")]
    DuplicateGenotype(String),
    /// The weights of a distribution literal do not fit.
    #[error("couldn't parse genetic distribution: {0}")]
    Distribution(#[from] DistributionError),
}

/// Errors raised while building a species table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesError {
    /// The table has no entries.
    #[error("species {0:?} has no genotypes")]
    Empty(String),
    /// A genotype in the table could not be parsed.
    #[error("species {species:?}: {source}")]
    Notation {
        /// Species name.
        species: String,
        /// Underlying notation error.
        #[source]
        source: NotationError,
    },
    /// A genotype appears twice in the table.
    #[error("species {species:?}: duplicate genotype {genotype:?}")]
    DuplicateGenotype {
        /// Species name.
        species: String,
        /// Offending genotype text.
        genotype: String,
    },
    /// The table does not cover every genotype of its gene count.
    #[error("species {species:?}: got {actual} phenotypes, expected {expected}")]
    Incomplete {
        /// Species name.
        species: String,
        /// Number of entries found.
        actual: usize,
        /// Number of entries required (3^genes).
        expected: usize,
    },
    /// No built-in species with the requested name exists.
    #[error("unknown species {0:?}")]
    Unknown(String),
}

/// Errors raised by distribution arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// A weight exceeded the representable range even after reduction.
    #[error("genetic distribution weight overflow")]
    WeightOverflow,
}

/// Errors raised while building or expanding a breeding graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
    /// The supplied configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
