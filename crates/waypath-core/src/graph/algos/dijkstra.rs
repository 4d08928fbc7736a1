//! Single-source shortest paths with exclusion sets
//!
//! Label-setting Dijkstra over the forward-star graph. Instead of a
//! decrease-key heap this uses lazy deletion: relaxing a node pushes a fresh
//! heap entry, and popped entries whose recorded distance is stale (or whose
//! node is already settled) are discarded. The deviation search in the path
//! enumerator depends on this exact discipline interacting with the
//! forbidden-node and forbidden-edge filters, so it is not interchangeable
//! with decrease-key.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use crate::graph::types::{NodeId, UndirectedEdge};
use crate::graph::weighted::WeightedGraph;

/// Heap entry ordered by tentative distance (wrapped in `Reverse` at the
/// push site to get min-heap behavior out of `BinaryHeap`).
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    node: NodeId,
    dist: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Distances are finite non-negative by the graph contract.
        self.dist.partial_cmp(&other.dist).unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Result of one solver run. Arrays are indexed by node id (`0..=node_count`,
/// slot 0 unused). Unreached nodes carry `f64::INFINITY` and no predecessor;
/// the source itself also has no predecessor.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub dist: Vec<f64>,
    pub pred: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub fn distance_to(&self, node: NodeId) -> f64 {
        self.dist.get(node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance_to(node).is_finite()
    }
}

/// Compute shortest distances and predecessors from `source`.
///
/// `forbidden_nodes` are treated as absent: they are never relaxed into and
/// never finalized. `forbidden_edges` are undirected pairs; an edge is
/// skipped if either orientation is in the set, modeling "this connection
/// was already consumed by a previously returned path".
///
/// Unreachable targets are represented in the result, never raised.
#[tracing::instrument(level = "debug", skip_all, fields(source = source, nodes = graph.node_count()))]
pub fn solve(
    source: NodeId,
    graph: &WeightedGraph,
    forbidden_nodes: Option<&HashSet<NodeId>>,
    forbidden_edges: Option<&HashSet<UndirectedEdge>>,
) -> ShortestPaths {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n + 1];
    let mut pred: Vec<Option<NodeId>> = vec![None; n + 1];
    let mut settled = vec![false; n + 1];

    if source == 0 || source > n {
        return ShortestPaths { dist, pred };
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    dist[source] = 0.0;
    heap.push(Reverse(HeapEntry {
        node: source,
        dist: 0.0,
    }));

    while let Some(Reverse(HeapEntry { node: u, dist: d })) = heap.pop() {
        // Lazy deletion: drop stale duplicates and already-settled nodes.
        if settled[u] || d != dist[u] {
            continue;
        }
        settled[u] = true;

        for edge in graph.out_edges(u) {
            let v = edge.target;
            if forbidden_nodes.is_some_and(|set| set.contains(&v)) {
                continue;
            }
            if forbidden_edges.is_some_and(|set| set.contains(&UndirectedEdge::new(u, v))) {
                continue;
            }
            let candidate = dist[u] + edge.weight;
            if !settled[v] && candidate < dist[v] {
                dist[v] = candidate;
                pred[v] = Some(u);
                heap.push(Reverse(HeapEntry {
                    node: v,
                    dist: candidate,
                }));
            }
        }
    }

    ShortestPaths { dist, pred }
}

/// Reconstruct the path `source -> … -> target` from a predecessor array.
/// `None` when the predecessor walk from `target` does not reach `source`
/// (unreachable target, or a target outside the solved id range).
pub fn build_path(
    source: NodeId,
    target: NodeId,
    paths: &ShortestPaths,
) -> Option<Vec<NodeId>> {
    if target == 0 || target >= paths.pred.len() {
        return None;
    }
    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        path.push(node);
        current = paths.pred[node];
    }
    path.reverse();
    (path.first() == Some(&source)).then_some(path)
}
