//! One expansion step: cross vertex pairs in parallel, merge results serially.
//!
//! ```text
//!   worker 0 ─► bounded queue 0 ─┐
//!   worker 1 ─► bounded queue 1 ─┼─► aggregator (calling thread) ─► arena
//!   worker W ─► bounded queue W ─┘
//! ```
//!
//! Workers only read a snapshot of the parent distributions and the tests.
//! All graph mutation happens in the aggregator, which applies batches in
//! source-vertex order so that the result does not depend on thread timing
//! or the number of workers. Worker `w` owns sources `w`, `w + W`, ... and
//! sends them in order, so the aggregator always knows which queue holds the
//! next batch and never buffers any. A worker blocks once its queue is full.

use std::cmp::Ordering;
use std::sync::mpsc::{self, Receiver, SyncSender};

use log::{debug, info, warn};
use serde::Serialize;

use super::{Arena, BreedGraph, Edge, VertexId};
use crate::genetics::GeneticDistribution;
use crate::selection::{Test, TestOutcome};

/// Counters describing one call to [`BreedGraph::expand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExpandStats {
    /// Generation number this step produced.
    pub generation: usize,
    /// Vertex pairs crossed.
    pub pairs: u64,
    /// Crosses skipped because their weights did not fit.
    pub overflowed: u64,
    /// (cross, test) combinations where the test was inapplicable.
    pub inapplicable: u64,
    /// Candidate steps offered to the aggregator.
    pub candidates: u64,
    /// New vertices created.
    pub created: u64,
    /// Existing vertices whose best predecessor was replaced.
    pub replaced: u64,
    /// New distributions rejected by the keep predicate.
    pub discarded: u64,
}

/// A candidate step computed by a worker.
struct Candidate {
    parents: [VertexId; 2],
    test: usize,
    cost: f64,
    distribution: GeneticDistribution,
}

/// Part of the candidates for one source vertex.
///
/// A source sends its candidates in one or more batches numbered from 0;
/// the last one has `last` set.
struct Batch {
    source: usize,
    sequence: usize,
    last: bool,
    pairs: u64,
    overflowed: u64,
    inapplicable: u64,
    candidates: Vec<Candidate>,
}

impl Batch {
    fn new(source: usize, sequence: usize) -> Self {
        Self {
            source,
            sequence,
            last: false,
            pairs: 0,
            overflowed: 0,
            inapplicable: 0,
            candidates: Vec::new(),
        }
    }
}

impl BreedGraph {
    /// Perform one expansion step.
    ///
    /// Every pair of vertices with at least one member added by the previous
    /// step (all pairs, on the first step) is crossed once, and every test
    /// is applied to the cross. Each applicable (pair, test) combination is a
    /// candidate edge:
    ///
    /// - if its distribution is already a vertex, the edge replaces that
    ///   vertex's best predecessor when it gives a strictly lower path cost,
    ///   or an equal one with a strictly smaller test priority. Seeds are
    ///   never re-parented;
    /// - otherwise a new vertex is created if `keep` accepts the
    ///   distribution, and discarded if not.
    ///
    /// Afterwards the frontier moves to the vertex count from before the
    /// step. Vertices created by this step are only crossed on the next one.
    pub fn expand<F>(&mut self, mut keep: F) -> ExpandStats
    where
        F: FnMut(&GeneticDistribution) -> bool,
    {
        let frontier = self.frontier;
        let generation = self.generation + 1;
        let parents: Vec<GeneticDistribution> = self
            .arena
            .vertices
            .iter()
            .map(|v| v.distribution.clone())
            .collect();
        let workers = self.pool.current_num_threads().clamp(1, parents.len().max(1));
        let batch_size = self.config.batch_size;

        let tests = &self.tests;
        let arena = &mut self.arena;
        let mut stats = ExpandStats {
            generation,
            ..ExpandStats::default()
        };

        let queue_depth = self.config.queue_depth;
        self.pool.in_place_scope(|scope| {
            let mut receivers = Vec::with_capacity(workers);
            for worker in 0..workers {
                let (sender, receiver) = mpsc::sync_channel::<Batch>(queue_depth);
                receivers.push(receiver);
                let parents = &parents;
                scope.spawn(move |_| {
                    produce(worker, workers, frontier, parents, tests, batch_size, &sender);
                });
            }
            drain(&receivers, parents.len(), |batch| {
                aggregate(arena, tests, batch, generation, &mut keep, &mut stats);
            });
            // Dropping the receivers here unblocks any worker still sending.
        });

        self.frontier = parents.len();
        self.generation = generation;

        info!(
            "generation {}: {} pairs, {} candidates, {} created, {} replaced, {} discarded, {} overflowed; {} vertices",
            stats.generation,
            stats.pairs,
            stats.candidates,
            stats.created,
            stats.replaced,
            stats.discarded,
            stats.overflowed,
            self.arena.vertices.len()
        );
        stats
    }
}

/// Worker body: handle sources `first`, `first + stride`, ... in order.
///
/// Source `i` is crossed with every `j` in `max(frontier, i)..n`, so each
/// unordered pair with at least one member at or past the frontier is
/// crossed exactly once across all workers.
fn produce(
    first: usize,
    stride: usize,
    frontier: usize,
    parents: &[GeneticDistribution],
    tests: &[Test],
    batch_size: usize,
    sender: &SyncSender<Batch>,
) {
    for i in (first..parents.len()).step_by(stride) {
        let mut batch = Batch::new(i, 0);
        for j in frontier.max(i)..parents.len() {
            batch.pairs += 1;
            let cross = match parents[i].breed(&parents[j]) {
                Ok(cross) => cross,
                Err(err) => {
                    warn!("skipping cross of vertices {i} and {j}: {err}");
                    batch.overflowed += 1;
                    continue;
                }
            };
            if cross.is_zero() {
                continue;
            }

            for (index, test) in tests.iter().enumerate() {
                match test.apply(&cross) {
                    TestOutcome::Selected { distribution, cost } => batch.candidates.push(Candidate {
                        parents: [VertexId(i), VertexId(j)],
                        test: index,
                        cost,
                        distribution,
                    }),
                    TestOutcome::Inapplicable => batch.inapplicable += 1,
                }
            }

            if batch.candidates.len() >= batch_size {
                let sequence = batch.sequence + 1;
                let full = std::mem::replace(&mut batch, Batch::new(i, sequence));
                if sender.send(full).is_err() {
                    return;
                }
            }
        }

        batch.last = true;
        if sender.send(batch).is_err() {
            // The aggregator is gone; nothing left to do.
            return;
        }
    }
}

/// Receive every batch for sources `0..sources` in (source, sequence) order
/// and hand each to `apply`.
///
/// Source `i` is read from `receivers[i % receivers.len()]`. Stops early,
/// with a warning, if a worker hangs up before sending its last batch.
fn drain<F>(receivers: &[Receiver<Batch>], sources: usize, mut apply: F)
where
    F: FnMut(Batch),
{
    for source in 0..sources {
        let receiver = &receivers[source % receivers.len()];
        loop {
            let Ok(batch) = receiver.recv() else {
                warn!("worker for source {source} stopped before sending all batches");
                return;
            };
            debug_assert_eq!(batch.source, source);
            let last = batch.last;
            apply(batch);
            if last {
                break;
            }
        }
    }
}

/// Apply one batch to the arena.
fn aggregate<F>(
    arena: &mut Arena,
    tests: &[Test],
    batch: Batch,
    generation: usize,
    keep: &mut F,
    stats: &mut ExpandStats,
) where
    F: FnMut(&GeneticDistribution) -> bool,
{
    if batch.last {
        debug!(
            "source {} done: {} candidates in final batch {}",
            batch.source,
            batch.candidates.len(),
            batch.sequence
        );
    }
    stats.pairs += batch.pairs;
    stats.overflowed += batch.overflowed;
    stats.inapplicable += batch.inapplicable;

    for candidate in batch.candidates {
        stats.candidates += 1;
        let edge = Edge {
            parents: candidate.parents,
            child: VertexId(0),
            test: candidate.test,
            cost: candidate.cost,
            generation,
        };

        if let Some(&child) = arena.index.get(&candidate.distribution) {
            if improves(arena, tests, child, &edge) {
                let id = arena.push_edge(Edge { child, ..edge });
                arena.vertices[child.0].best_predecessor = Some(id);
                stats.replaced += 1;
                debug!("vertex {} re-parented by edge {}", child.0, id.0);
            }
            continue;
        }

        if !keep(&candidate.distribution) {
            stats.discarded += 1;
            continue;
        }
        let child = VertexId(arena.vertices.len());
        let id = arena.push_edge(Edge { child, ..edge });
        arena.push_vertex(candidate.distribution, Some(id), generation);
        stats.created += 1;
    }
}

/// Whether `candidate` should replace the best predecessor of `child`.
fn improves(arena: &Arena, tests: &[Test], child: VertexId, candidate: &Edge) -> bool {
    let Some(current) = arena.vertices[child.0].best_predecessor else {
        return false;
    };
    let proposed = arena.candidate_path_cost(candidate.parents, candidate.cost);
    match proposed.total_cmp(&arena.path_cost(child)) {
        Ordering::Less => true,
        Ordering::Equal => {
            tests[candidate.test].priority() < tests[arena.edges[current.0].test].priority()
        }
        Ordering::Greater => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpandConfig;
    use crate::selection::phenotype_tests;
    use crate::species::Species;

    fn snapdragon() -> Species {
        Species::new("Snap", [("aa", "White"), ("Aa", "Pink"), ("AA", "Red")]).unwrap()
    }

    fn graph_with(species: &Species, tests: Vec<Test>, seeds: &[&str], workers: usize) -> BreedGraph {
        let seeds = seeds
            .iter()
            .map(|s| species.format().parse_distribution(s).unwrap());
        let config = ExpandConfig {
            workers: Some(workers),
            ..ExpandConfig::default()
        };
        BreedGraph::with_config(tests, seeds, config).unwrap()
    }

    #[test]
    fn test_single_seed_self_cross() {
        let species = snapdragon();
        let mut tests = vec![Test::none()];
        tests.extend(phenotype_tests(&species));
        let mut graph = graph_with(&species, tests, &["Aa"], 2);

        let stats = graph.expand(|_| true);
        assert_eq!(stats.generation, 1);
        assert_eq!(stats.pairs, 1);
        assert_eq!(graph.frontier(), 1);

        let red = graph.search(|d| species.is_uniform(d, "Red")).unwrap();
        assert!((graph.path_cost(red) - 4.0).abs() < f64::EPSILON);
        let edge = graph.edge(graph.vertex(red).best_predecessor().unwrap());
        assert_eq!(edge.parents(), [VertexId(0), VertexId(0)]);
        assert_eq!(graph.test(edge).name(), "P∈{Red}");
        assert_eq!(graph.best_predecessor(red), Some(edge));
        assert_eq!(graph.best_predecessor(VertexId(0)), None);
    }

    #[test]
    fn test_frontier_limits_pairs() {
        let species = snapdragon();
        let mut graph = graph_with(&species, vec![Test::none()], &["aa", "AA"], 1);

        // 2 seeds: (0,0), (0,1), (1,1).
        let first = graph.expand(|_| true);
        assert_eq!(first.pairs, 3);
        assert_eq!(graph.frontier(), 2);
        // aa x AA gives Aa; the self-crosses give the seeds back.
        assert_eq!(first.created, 1);
        assert_eq!(graph.vertex_count(), 3);

        // Only pairs involving vertex 2: (0,2), (1,2), (2,2).
        let second = graph.expand(|_| true);
        assert_eq!(second.pairs, 3);
        assert_eq!(graph.frontier(), 3);
    }

    #[test]
    fn test_seeds_never_reparented() {
        let species = snapdragon();
        let mut graph = graph_with(&species, vec![Test::none()], &["aa", "AA"], 1);
        graph.expand(|_| true);
        graph.expand(|_| true);
        assert!(graph.vertex(VertexId(0)).is_seed());
        assert!(graph.vertex(VertexId(1)).is_seed());
    }

    #[test]
    fn test_keep_predicate_discards() {
        let species = snapdragon();
        let mut graph = graph_with(&species, vec![Test::none()], &["aa", "AA"], 1);
        let stats = graph.expand(|d| species.is_uniform(d, "White"));
        assert_eq!(stats.created, 0);
        assert_eq!(stats.discarded, 1);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_priority_breaks_exact_tie() {
        let species = snapdragon();
        // aa x Aa passes P∈{White,Pink} untouched at cost 1, so the none
        // test ties it and wins on priority despite arriving second.
        let tests = vec![Test::phenotype(&species, &["White", "Pink"]), Test::none()];
        let mut graph = graph_with(&species, tests, &["aa", "Aa"], 1);
        graph.expand(|_| true);

        let mixed = species.format().parse_distribution("{1:aa, 1:Aa}").unwrap();
        let vertex = graph.lookup(&mixed).unwrap();
        let edge = graph.edge(graph.vertex(vertex).best_predecessor().unwrap());
        assert_eq!(graph.test(edge).name(), "");
        // The replaced edge stays in the arena.
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_cheaper_rediscovery_replaces_predecessor() {
        let species = snapdragon();
        let tests = vec![
            Test::phenotype(&species, &["Red"]),
            Test::phenotype(&species, &["Pink", "Red"]),
        ];
        let mut graph = graph_with(&species, tests, &["aa", "Aa"], 2);

        // Aa x Aa: AA at cost 4 and {2:Aa, 1:AA} at cost 4/3.
        let first = graph.expand(|_| true);
        assert_eq!(first.created, 2);
        assert_eq!(first.replaced, 0);
        let red = graph.lookup(&species.format().parse_distribution("AA").unwrap()).unwrap();
        let old = graph.vertex(red).best_predecessor().unwrap();
        assert!((graph.path_cost(red) - 4.0).abs() < 1e-9);

        // Crossing {2:Aa, 1:AA} with itself selects AA at cost 9/4.
        let second = graph.expand(|_| false);
        assert_eq!(second.created, 0);
        assert_eq!(second.replaced, 1);

        let new = graph.vertex(red).best_predecessor().unwrap();
        assert_ne!(new, old);
        let edge = graph.edge(new);
        assert_eq!(edge.generation(), 2);
        assert_eq!(graph.test(edge).name(), "P∈{Red}");
        assert!((graph.path_cost(red) - (4.0 / 3.0 + 9.0 / 4.0)).abs() < 1e-9);

        let mut live = Vec::new();
        graph.visit_edges(|id, _| live.push(id));
        assert!(live.contains(&new));
        assert!(!live.contains(&old));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_equal_cost_and_priority_keeps_first() {
        let species = snapdragon();
        // aa x AA gives Aa, which both tests pass untouched at cost 1 with
        // the same priority.
        let tests = vec![
            Test::phenotype(&species, &["White", "Pink"]),
            Test::phenotype(&species, &["Pink", "Red"]),
        ];
        let mut graph = graph_with(&species, tests, &["aa", "AA"], 1);

        let stats = graph.expand(|_| true);
        assert_eq!(stats.created, 1);
        assert_eq!(stats.replaced, 0);
        assert_eq!(graph.edge_count(), 1);

        let het = graph.lookup(&species.format().parse_distribution("Aa").unwrap()).unwrap();
        let edge = graph.edge(graph.vertex(het).best_predecessor().unwrap());
        assert_eq!(edge.test_index(), 0);
    }

    #[test]
    fn test_drain_applies_in_order_without_buffering() {
        use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

        let workers = 3;
        let sources = 10;
        let sent = AtomicUsize::new(0);
        let mut order = Vec::new();

        std::thread::scope(|scope| {
            let mut receivers = Vec::new();
            for worker in 0..workers {
                // Rendezvous: a send only completes once the batch is received.
                let (sender, receiver) = mpsc::sync_channel::<Batch>(0);
                receivers.push(receiver);
                let sent = &sent;
                scope.spawn(move || {
                    for source in (worker..sources).step_by(workers) {
                        for sequence in 0..3 {
                            let mut batch = Batch::new(source, sequence);
                            batch.last = sequence == 2;
                            if sender.send(batch).is_err() {
                                return;
                            }
                            sent.fetch_add(1, AtomicOrdering::SeqCst);
                        }
                    }
                });
            }

            let mut applied = 0;
            drain(&receivers, sources, |batch| {
                applied += 1;
                assert!(sent.load(AtomicOrdering::SeqCst) <= applied);
                order.push((batch.source, batch.sequence));
            });
        });

        let expected: Vec<(usize, usize)> = (0..sources)
            .flat_map(|source| (0..3).map(move |sequence| (source, sequence)))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_small_batches_match_single_batch() {
        let species = Species::builtin("Roses").unwrap();
        let seeds = ["rryyWwss", "rrYYWWss", "RRyyWWSs"];
        let tests = || {
            let mut tests = vec![Test::none()];
            tests.extend(crate::selection::phenotype_tests_up_to_size(&species, 1));
            tests
        };
        let build = |batch_size| {
            let config = ExpandConfig {
                workers: Some(3),
                queue_depth: 0,
                batch_size,
            };
            let seeds = seeds
                .iter()
                .map(|s| species.format().parse_distribution(s).unwrap());
            let mut graph = BreedGraph::with_config(tests(), seeds, config).unwrap();
            graph.expand(|_| true);
            graph.expand(|_| true);
            graph
        };

        let a = build(1);
        let b = build(100_000);
        assert_eq!(a.vertex_count(), b.vertex_count());
        assert_eq!(a.edge_count(), b.edge_count());
        for i in 0..a.vertex_count() {
            assert_eq!(a.vertex(VertexId(i)), b.vertex(VertexId(i)));
        }
    }
}
