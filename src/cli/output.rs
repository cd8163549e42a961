//! Output formatting utilities for CLI.

use std::collections::HashMap;
use std::fmt::Write as _;

use breedplan::{BreedGraph, Edge, ExpandStats, GeneticDistribution, Plan, Species, VertexId};
use serde::Serialize;

/// Display names for distributions.
///
/// Labelled distributions (the seeds) use their label; everything else is
/// rendered in distribution notation.
#[derive(Debug)]
pub(super) struct Names<'a> {
    species: &'a Species,
    labels: HashMap<GeneticDistribution, String>,
}

impl<'a> Names<'a> {
    pub(super) fn new(species: &'a Species) -> Self {
        Self {
            species,
            labels: HashMap::new(),
        }
    }

    /// Label a seed as `Seed <phenotype> (<notation>)`.
    ///
    /// Seeds that do not show a single phenotype are labelled `Mixed`.
    pub(super) fn label_seed(&mut self, distribution: &GeneticDistribution, notation: &str) {
        let phenotype = self.species.uniform_phenotype(distribution).unwrap_or("Mixed");
        self.labels
            .insert(distribution.reduce(), format!("Seed {phenotype} ({notation})"));
    }

    pub(super) fn name(&self, distribution: &GeneticDistribution) -> String {
        self.labels.get(distribution).cloned().unwrap_or_else(|| {
            self.species.format().render_distribution(distribution)
        })
    }

    fn vertex(&self, graph: &BreedGraph, id: VertexId) -> String {
        self.name(graph.vertex(id).distribution())
    }
}

/// DOT head label of an edge: `P∈{..} (4.00)`, or just the cost for the
/// no-op test.
fn edge_label(test: &str, cost: f64) -> String {
    if test.is_empty() {
        format!("{cost:.2}")
    } else {
        format!("{test} ({cost:.2})")
    }
}

fn dot_edge(out: &mut String, graph: &BreedGraph, names: &Names<'_>, edge: &Edge) {
    let [a, b] = edge.parents();
    let _ = writeln!(
        out,
        r#"  {{"{}" "{}"}} -> "{}" [headlabel="{}"]"#,
        names.vertex(graph, a),
        names.vertex(graph, b),
        names.vertex(graph, edge.child()),
        edge_label(graph.test(edge).name(), edge.cost())
    );
}

/// Graphviz DOT of every vertex and every live edge.
pub(super) fn format_dot_graph(graph: &BreedGraph, names: &Names<'_>) -> String {
    let mut out = String::from("digraph {\n");
    graph.visit_vertices(|_, vertex| {
        let _ = writeln!(out, r#"  "{}""#, names.name(vertex.distribution()));
    });
    out.push('\n');
    graph.visit_edges(|_, edge| dot_edge(&mut out, graph, names, edge));
    out.push_str("}\n");
    out
}

/// Graphviz DOT of the ancestor subgraph of `target`.
pub(super) fn format_dot_path(graph: &BreedGraph, target: VertexId, names: &Names<'_>) -> String {
    let mut vertices = String::new();
    let mut edges = String::new();
    graph.visit_path_to(
        target,
        |_, vertex| {
            let _ = writeln!(vertices, r#"  "{}""#, names.name(vertex.distribution()));
        },
        |_, edge| dot_edge(&mut edges, graph, names, edge),
    );
    format!("digraph {{\n{vertices}{edges}}}\n")
}

fn lineage_line(graph: &BreedGraph, names: &Names<'_>, edge: &Edge) -> String {
    let [a, b] = edge.parents();
    format!(
        "{} and {} make {} [test = {:?}, cost = {:.2}]",
        names.vertex(graph, a),
        names.vertex(graph, b),
        names.vertex(graph, edge.child()),
        graph.test(edge).name(),
        edge.cost()
    )
}

/// Human-readable plan: a summary, the distributions on the best path, then
/// the breeding steps in the order they must be performed.
pub(super) fn format_text(plan: &Plan, target: &str, names: &Names<'_>) -> String {
    let graph = &plan.graph;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Explored {} generations: {} distributions, {} edges",
        plan.stats.len(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let Some(found) = plan.target else {
        let _ = writeln!(out, "No uniform {target} reachable.");
        return out;
    };

    let _ = writeln!(
        out,
        "Cheapest uniform {target}: {} (expected cost {:.2})",
        names.vertex(graph, found),
        graph.path_cost(found)
    );
    let steps = graph.breeding_steps(found);
    if steps.is_empty() {
        out.push_str("  Already a seed; no breeding needed.\n");
        return out;
    }

    out.push_str("Distributions:\n");
    graph.visit_path_to(
        found,
        |_, vertex| {
            let _ = writeln!(out, "  {}", names.name(vertex.distribution()));
        },
        |_, _| {},
    );
    out.push_str("Lineage:\n");
    for (n, id) in steps.into_iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", n + 1, lineage_line(graph, names, graph.edge(id)));
    }
    out
}

/// One breeding step in JSON output.
#[derive(Debug, Serialize)]
pub(super) struct JsonStep {
    /// Names of the two crossed distributions.
    pub(super) parents: [String; 2],
    /// Name of the produced distribution.
    pub(super) child: String,
    /// Selection test applied (empty for none).
    pub(super) test: String,
    /// Expected attempts for this step.
    pub(super) cost: f64,
}

/// JSON-serializable plan summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlan {
    /// Species name.
    pub(super) species: String,
    /// Target phenotype.
    pub(super) target: String,
    /// Name of the cheapest target distribution (null if unreachable).
    pub(super) found: Option<String>,
    /// Total expected cost (null if unreachable).
    pub(super) cost: Option<f64>,
    /// Steps in the order they must be performed.
    pub(super) steps: Vec<JsonStep>,
    /// Per-generation expansion counters.
    pub(super) generations: Vec<ExpandStats>,
}

impl JsonPlan {
    /// Create from a plan.
    pub(super) fn from_plan(plan: &Plan, species: &Species, target: &str, names: &Names<'_>) -> Self {
        let graph = &plan.graph;
        let steps = plan
            .target
            .map(|found| graph.breeding_steps(found))
            .unwrap_or_default()
            .into_iter()
            .map(|id| {
                let edge = graph.edge(id);
                let [a, b] = edge.parents();
                JsonStep {
                    parents: [names.vertex(graph, a), names.vertex(graph, b)],
                    child: names.vertex(graph, edge.child()),
                    test: graph.test(edge).name().to_string(),
                    cost: edge.cost(),
                }
            })
            .collect();

        Self {
            species: species.name().to_string(),
            target: target.to_string(),
            found: plan.target.map(|id| names.vertex(graph, id)),
            cost: plan.target_cost(),
            steps,
            generations: plan.stats.clone(),
        }
    }
}
