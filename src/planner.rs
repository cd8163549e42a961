//! End-to-end planning: seed a graph, expand it, find the cheapest target.

use log::info;

use crate::config::PlanConfig;
use crate::error::GraphError;
use crate::genetics::GeneticDistribution;
use crate::graph::{BreedGraph, ExpandStats, VertexId};
use crate::selection::{Test, phenotype_tests, phenotype_tests_up_to_size};
use crate::species::Species;

/// Outcome of [`plan`].
#[derive(Debug)]
pub struct Plan {
    /// The expanded graph.
    pub graph: BreedGraph,
    /// Cheapest vertex satisfying the target, if one was reached.
    pub target: Option<VertexId>,
    /// One entry per expansion step.
    pub stats: Vec<ExpandStats>,
}

impl Plan {
    /// Path cost of the target, if one was reached.
    #[must_use]
    pub fn target_cost(&self) -> Option<f64> {
        self.target.map(|id| self.graph.path_cost(id))
    }
}

/// The no-op test followed by phenotype tests of up to `max_size`
/// phenotypes (every proper subset when `None`).
#[must_use]
pub fn standard_tests(species: &Species, max_size: Option<usize>) -> Vec<Test> {
    let mut tests = vec![Test::none()];
    match max_size {
        Some(max_size) => tests.extend(phenotype_tests_up_to_size(species, max_size)),
        None => tests.extend(phenotype_tests(species)),
    }
    tests
}

/// Build a graph from `seeds`, expand it `config.generations` times, and
/// search it for the cheapest distribution satisfying `target`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the worker pool
/// cannot be started.
pub fn plan<I, P>(tests: Vec<Test>, seeds: I, target: P, config: &PlanConfig) -> Result<Plan, GraphError>
where
    I: IntoIterator<Item = GeneticDistribution>,
    P: Fn(&GeneticDistribution) -> bool,
{
    plan_with_progress(tests, seeds, target, config, |_| {})
}

/// Like [`plan`], calling `progress` after each expansion step.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the worker pool
/// cannot be started.
pub fn plan_with_progress<I, P, F>(
    tests: Vec<Test>,
    seeds: I,
    target: P,
    config: &PlanConfig,
    mut progress: F,
) -> Result<Plan, GraphError>
where
    I: IntoIterator<Item = GeneticDistribution>,
    P: Fn(&GeneticDistribution) -> bool,
    F: FnMut(&ExpandStats),
{
    config.validate()?;
    let mut graph = BreedGraph::with_config(tests, seeds, config.expand)?;

    let mut stats = Vec::with_capacity(config.generations);
    for step in 1..=config.generations {
        let last = step == config.generations;
        let step_stats = if last && config.prune_final_generation {
            graph.expand(&target)
        } else {
            graph.expand(|_| true)
        };
        progress(&step_stats);
        stats.push(step_stats);
    }

    let found = graph.search(&target);
    match found {
        Some(id) => info!(
            "target found: vertex {} with path cost {:.2}",
            id.index(),
            graph.path_cost(id)
        ),
        None => info!("no target reachable within {} generations", config.generations),
    }

    Ok(Plan {
        graph,
        target: found,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tests() {
        let species = Species::builtin("Roses").unwrap();
        let tests = standard_tests(&species, Some(1));
        assert_eq!(tests.len(), 9);
        assert_eq!(tests[0].name(), "");
        assert_eq!(standard_tests(&species, None).len(), 1 + 254);
    }

    #[test]
    fn test_zero_generations_searches_seeds() {
        let species = Species::new("Snap", [("aa", "White"), ("Aa", "Pink"), ("AA", "Red")]).unwrap();
        let seeds = [species.format().parse_distribution("AA").unwrap()];
        let config = PlanConfig {
            generations: 0,
            ..PlanConfig::default()
        };
        let plan = plan(standard_tests(&species, None), seeds, |d| species.is_uniform(d, "Red"), &config).unwrap();
        assert!(plan.stats.is_empty());
        assert_eq!(plan.target.map(VertexId::index), Some(0));
        assert_eq!(plan.target_cost(), Some(0.0));
    }
}
