// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Breedplan: cheapest breeding plans for Mendelian traits.
//!
//! Starting from a set of seed individuals, the planner repeatedly crosses
//! everything it can reach, optionally selects offspring by phenotype, and
//! keeps the cheapest known way (in expected breeding attempts) to produce
//! every distinct offspring distribution.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Planner / CLI                │
//! ├─────────────────────────────────────┤
//! │   BreedGraph (expand, search,       │
//! │   path reconstruction)              │
//! ├─────────────────────────────────────┤
//! │   Tests        │   Species          │
//! ├─────────────────────────────────────┤
//! │   GeneticDistribution (exact)       │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use breedplan::{PlanConfig, Species, plan, standard_tests};
//!
//! let species = Species::new("Snap", [("aa", "White"), ("Aa", "Pink"), ("AA", "Red")])?;
//! let seeds = [species.format().parse_distribution("Aa")?];
//! let config = PlanConfig { generations: 1, ..PlanConfig::default() };
//!
//! let plan = plan(
//!     standard_tests(&species, None),
//!     seeds,
//!     |d| species.is_uniform(d, "Red"),
//!     &config,
//! )?;
//! assert_eq!(plan.target_cost(), Some(4.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod genetics;
pub mod graph;
pub mod planner;
pub mod selection;
pub mod species;

pub use config::{ExpandConfig, PlanConfig};
pub use error::{ConfigError, DistributionError, GraphError, NotationError, SpeciesError};
pub use genetics::{GeneticDistribution, Genotype, GenotypeFormat};
pub use graph::{BreedGraph, Edge, EdgeId, ExpandStats, Vertex, VertexId};
pub use planner::{Plan, plan, plan_with_progress, standard_tests};
pub use selection::{Test, TestOutcome};
pub use species::Species;
