//! Path reconstruction over best-predecessor links.
//!
//! The ancestor subgraph of a vertex is everything reachable by following
//! best-predecessor edges to their parents. It is a DAG, not a tree: two
//! parents can share ancestors, and a shared step is only performed once, so
//! every walk keeps a handled set and visits each node at most once.

use std::collections::HashSet;

use super::{Arena, BreedGraph, Edge, EdgeId, Vertex, VertexId};

/// A vertex or an edge, as visited by [`Arena::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum Node {
    Vertex(VertexId),
    Edge(EdgeId),
}

impl Arena {
    /// Depth-first walk from `roots` through best predecessors and their
    /// parents, calling `visit` once per distinct node.
    pub(super) fn walk<I, F>(&self, roots: I, mut visit: F)
    where
        I: IntoIterator<Item = Node>,
        F: FnMut(Node),
    {
        let mut stack: Vec<Node> = roots.into_iter().collect();
        let mut handled: HashSet<Node> = HashSet::new();
        while let Some(node) = stack.pop() {
            if !handled.insert(node) {
                continue;
            }
            visit(node);
            match node {
                Node::Vertex(id) => {
                    if let Some(edge) = self.vertices[id.0].best_predecessor {
                        stack.push(Node::Edge(edge));
                    }
                }
                Node::Edge(id) => {
                    let [a, b] = self.edges[id.0].parents;
                    stack.push(Node::Vertex(a));
                    stack.push(Node::Vertex(b));
                }
            }
        }
    }

    /// Sum of edge costs over the ancestor subgraph of `roots`, starting
    /// from `initial`.
    fn subgraph_cost<I>(&self, roots: I, initial: f64) -> f64
    where
        I: IntoIterator<Item = Node>,
    {
        let mut total = initial;
        self.walk(roots, |node| {
            if let Node::Edge(id) = node {
                total += self.edges[id.0].cost;
            }
        });
        total
    }

    pub(super) fn path_cost(&self, vertex: VertexId) -> f64 {
        self.subgraph_cost([Node::Vertex(vertex)], 0.0)
    }

    /// Path cost a vertex would have if its best predecessor were a new edge
    /// crossing `parents` at `cost`.
    ///
    /// Sums in the same order as [`Arena::path_cost`] would once the edge is
    /// in place, so an identical edge yields an identical total.
    pub(super) fn candidate_path_cost(&self, parents: [VertexId; 2], cost: f64) -> f64 {
        let [a, b] = parents;
        self.subgraph_cost([Node::Vertex(a), Node::Vertex(b)], cost)
    }
}

impl BreedGraph {
    /// Total expected attempts to produce `vertex` from the seeds.
    ///
    /// Each edge in the ancestor subgraph is counted once, even if several
    /// paths lead through it. Seeds cost 0.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` does not belong to this graph.
    #[must_use]
    pub fn path_cost(&self, vertex: VertexId) -> f64 {
        self.arena.path_cost(vertex)
    }

    /// Total expected attempts to perform `edge`, including everything needed
    /// to produce its parents.
    ///
    /// # Panics
    ///
    /// Panics if `edge` does not belong to this graph.
    #[must_use]
    pub fn edge_path_cost(&self, edge: EdgeId) -> f64 {
        self.arena.subgraph_cost([Node::Edge(edge)], 0.0)
    }

    /// Visit the ancestor subgraph of `vertex`: first every vertex in it, then
    /// every edge. Each is reported once.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` does not belong to this graph.
    pub fn visit_path_to<FV, FE>(&self, vertex: VertexId, mut visit_vertex: FV, mut visit_edge: FE)
    where
        FV: FnMut(VertexId, &Vertex),
        FE: FnMut(EdgeId, &Edge),
    {
        let mut vertices = Vec::new();
        let mut edges = Vec::new();
        self.arena.walk([Node::Vertex(vertex)], |node| match node {
            Node::Vertex(id) => vertices.push(id),
            Node::Edge(id) => edges.push(id),
        });

        for id in vertices {
            visit_vertex(id, &self.arena.vertices[id.0]);
        }
        for id in edges {
            visit_edge(id, &self.arena.edges[id.0]);
        }
    }

    /// The edges of the ancestor subgraph of `vertex`, ordered so that every
    /// edge comes after the edges producing its parents.
    ///
    /// Reading the result front to back gives the order in which to perform
    /// the crosses.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` does not belong to this graph.
    #[must_use]
    pub fn breeding_steps(&self, vertex: VertexId) -> Vec<EdgeId> {
        let arena = &self.arena;
        let mut order = Vec::new();
        let mut handled: HashSet<EdgeId> = HashSet::new();
        // (edge, parents already pushed)
        let mut stack: Vec<(EdgeId, bool)> = Vec::new();

        if let Some(edge) = arena.vertices[vertex.0].best_predecessor {
            stack.push((edge, false));
        }
        while let Some((edge, expanded)) = stack.pop() {
            if expanded {
                order.push(edge);
                continue;
            }
            if !handled.insert(edge) {
                continue;
            }
            stack.push((edge, true));
            for parent in arena.edges[edge.0].parents.iter().rev() {
                match arena.vertices[parent.0].best_predecessor {
                    Some(before) if !handled.contains(&before) => stack.push((before, false)),
                    _ => {}
                }
            }
        }
        order
    }
}
