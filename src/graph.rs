//! The breeding graph.
//!
//! Vertices are distinct genetic distributions. An edge records one way of
//! producing its child: a cross of two parent vertices followed by a
//! selection test, and the expected attempts that costs. Every vertex keeps
//! exactly one best-predecessor edge (seeds keep none), so following
//! best-predecessor links from any vertex yields a breeding plan for it.
//!
//! ```text
//!   seed A ──┐
//!            ├── edge (test, cost) ──► child
//!   seed B ──┘
//! ```
//!
//! Vertices and edges live in arenas and refer to each other by
//! [`VertexId`] and [`EdgeId`]. Edges that lose their place as a best
//! predecessor stay in the arena but are no longer reachable from any
//! vertex.

mod expand;
mod path;

use std::collections::HashMap;
use std::fmt;

use log::{info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::ExpandConfig;
use crate::error::GraphError;
use crate::genetics::GeneticDistribution;
use crate::selection::Test;

pub use expand::ExpandStats;

/// Handle of a vertex in a [`BreedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Handle of an edge in a [`BreedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Position of the edge in creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A distinct distribution reachable from the seeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    distribution: GeneticDistribution,
    best_predecessor: Option<EdgeId>,
    generation: usize,
}

impl Vertex {
    /// The distribution this vertex stands for (always in lowest terms).
    #[must_use]
    pub fn distribution(&self) -> &GeneticDistribution {
        &self.distribution
    }

    /// Cheapest known way to produce this vertex; `None` for seeds.
    #[must_use]
    pub fn best_predecessor(&self) -> Option<EdgeId> {
        self.best_predecessor
    }

    /// Whether this vertex was supplied as a seed.
    #[must_use]
    pub fn is_seed(&self) -> bool {
        self.best_predecessor.is_none()
    }

    /// Expansion step that created the vertex (0 for seeds).
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }
}

/// One way of producing a vertex: cross `parents`, then apply a test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    parents: [VertexId; 2],
    child: VertexId,
    test: usize,
    cost: f64,
    generation: usize,
}

impl Edge {
    /// The two crossed vertices (possibly the same vertex twice).
    #[must_use]
    pub fn parents(&self) -> [VertexId; 2] {
        self.parents
    }

    /// The vertex this edge produces.
    #[must_use]
    pub fn child(&self) -> VertexId {
        self.child
    }

    /// Index of the applied test in [`BreedGraph::tests`].
    #[must_use]
    pub fn test_index(&self) -> usize {
        self.test
    }

    /// Expected attempts for this single step.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Expansion step that created the edge.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }
}

/// Vertex and edge storage plus the distribution index.
#[derive(Debug, Default)]
struct Arena {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    index: HashMap<GeneticDistribution, VertexId>,
}

impl Arena {
    fn push_vertex(
        &mut self,
        distribution: GeneticDistribution,
        best_predecessor: Option<EdgeId>,
        generation: usize,
    ) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.index.insert(distribution.clone(), id);
        self.vertices.push(Vertex {
            distribution,
            best_predecessor,
            generation,
        });
        id
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        id
    }
}

/// Graph of breeding steps, grown one generation at a time by [`BreedGraph::expand`].
pub struct BreedGraph {
    tests: Vec<Test>,
    arena: Arena,
    /// Vertices below this index were present before the last expansion.
    frontier: usize,
    generation: usize,
    config: ExpandConfig,
    pool: ThreadPool,
}

impl fmt::Debug for BreedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreedGraph")
            .field("vertices", &self.arena.vertices.len())
            .field("edges", &self.arena.edges.len())
            .field("tests", &self.tests.len())
            .field("frontier", &self.frontier)
            .field("generation", &self.generation)
            .field("workers", &self.pool.current_num_threads())
            .finish()
    }
}

impl BreedGraph {
    /// Create a graph with the default [`ExpandConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be started.
    pub fn new<I>(tests: Vec<Test>, seeds: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = GeneticDistribution>,
    {
        Self::with_config(tests, seeds, ExpandConfig::default())
    }

    /// Create a graph whose vertices are the distinct `seeds`.
    ///
    /// Seeds are reduced to lowest terms; duplicates collapse into the first
    /// occurrence and zero distributions are skipped. The frontier starts at
    /// 0, so the first expansion crosses every seed with every seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid or the worker pool cannot be
    /// started.
    pub fn with_config<I>(tests: Vec<Test>, seeds: I, config: ExpandConfig) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = GeneticDistribution>,
    {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers.unwrap_or(0))
            .thread_name(|i| format!("breed-worker-{i}"))
            .build()?;

        let mut arena = Arena::default();
        for seed in seeds {
            if seed.is_zero() {
                warn!("skipping zero seed distribution");
                continue;
            }
            let seed = seed.reduce();
            if arena.index.contains_key(&seed) {
                continue;
            }
            arena.push_vertex(seed, None, 0);
        }

        info!(
            "breed graph seeded with {} vertices, {} tests, {} workers",
            arena.vertices.len(),
            tests.len(),
            pool.current_num_threads()
        );

        Ok(Self {
            tests,
            arena,
            frontier: 0,
            generation: 0,
            config,
            pool,
        })
    }

    /// Return the lowest-path-cost vertex whose distribution satisfies
    /// `predicate`, or `None` if none does.
    ///
    /// Among equal costs the earliest-created vertex wins.
    #[must_use]
    pub fn search<P>(&self, mut predicate: P) -> Option<VertexId>
    where
        P: FnMut(&GeneticDistribution) -> bool,
    {
        let mut best: Option<(VertexId, f64)> = None;
        for (index, vertex) in self.arena.vertices.iter().enumerate() {
            if !predicate(&vertex.distribution) {
                continue;
            }
            let id = VertexId(index);
            let cost = self.path_cost(id);
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((id, cost));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Call `visit` once for every vertex, in creation order.
    pub fn visit_vertices<F>(&self, mut visit: F)
    where
        F: FnMut(VertexId, &Vertex),
    {
        for (index, vertex) in self.arena.vertices.iter().enumerate() {
            visit(VertexId(index), vertex);
        }
    }

    /// Call `visit` once for every edge reachable as a best predecessor.
    ///
    /// Edges that have been replaced are not reported.
    pub fn visit_edges<F>(&self, mut visit: F)
    where
        F: FnMut(EdgeId, &Edge),
    {
        let roots = (0..self.arena.vertices.len()).map(|i| path::Node::Vertex(VertexId(i)));
        self.arena.walk(roots, |node| {
            if let path::Node::Edge(id) = node {
                visit(id, &self.arena.edges[id.0]);
            }
        });
    }

    /// The vertex with this id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.arena.vertices[id.0]
    }

    /// The edge with this id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.arena.edges[id.0]
    }

    /// The best-predecessor edge of `vertex`; `None` for seeds.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` does not belong to this graph.
    #[must_use]
    pub fn best_predecessor(&self, vertex: VertexId) -> Option<&Edge> {
        self.arena.vertices[vertex.0]
            .best_predecessor
            .map(|id| &self.arena.edges[id.0])
    }

    /// The test applied by `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` does not belong to this graph.
    #[must_use]
    pub fn test(&self, edge: &Edge) -> &Test {
        &self.tests[edge.test]
    }

    /// The tests used for expansion, in priority tie-break order.
    #[must_use]
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// The vertex holding `distribution`, if any.
    ///
    /// `distribution` is compared as given, so it should be in lowest terms.
    #[must_use]
    pub fn lookup(&self, distribution: &GeneticDistribution) -> Option<VertexId> {
        self.arena.index.get(distribution).copied()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.arena.vertices.len()
    }

    /// Number of edges ever created, including replaced ones.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.arena.edges.len()
    }

    /// Number of expansion steps performed.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Number of vertices present before the last expansion step.
    #[must_use]
    pub fn frontier(&self) -> usize {
        self.frontier
    }

    /// Number of worker threads used by [`BreedGraph::expand`].
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }
}
