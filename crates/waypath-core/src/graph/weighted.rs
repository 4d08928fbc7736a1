//! Forward-star weighted digraph
//!
//! All edges live in one append-only pool; each node's out-edges form a
//! singly-linked list threaded through that pool via a `next` index. This
//! keeps adjacency iteration allocation-free and makes the whole graph two
//! flat vectors plus a dedup map.

use std::collections::HashMap;

use crate::graph::types::NodeId;

/// A directed weighted edge in the pool. `next` is the pool index of the
/// next edge leaving the same source (0 terminates the list — slot 0 of the
/// pool is an unused sentinel).
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    next: usize,
}

/// In-memory weighted digraph over dense integer node ids.
///
/// `node_count` tracks the maximum id ever referenced; nodes need no
/// registration beyond appearing in an edge. Edge insertion is idempotent
/// per ordered `(source, target)` pair — the first weight wins.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    node_count: usize,
    edges: Vec<Edge>,
    head: Vec<usize>,
    edge_ids: HashMap<(NodeId, NodeId), usize>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        WeightedGraph {
            node_count: 0,
            // Slot 0 is the sentinel terminating every adjacency list.
            edges: vec![Edge {
                source: 0,
                target: 0,
                weight: 0.0,
                next: 0,
            }],
            head: vec![0],
            edge_ids: HashMap::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        let mut graph = WeightedGraph::new();
        graph.edges.reserve(edge_count);
        graph.head.reserve(node_count);
        graph.edge_ids.reserve(edge_count);
        graph
    }

    /// Insert a directed edge. A repeated `(source, target)` pair is a no-op:
    /// the originally recorded weight stays in effect and no parallel edge is
    /// created. `node_count` grows to cover both endpoints either way.
    ///
    /// Weights must be non-negative and finite; negative weights break the
    /// shortest-path contract and are a caller error.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: f64) {
        debug_assert!(weight >= 0.0 && weight.is_finite());
        self.node_count = self.node_count.max(source).max(target);
        if self.edge_ids.contains_key(&(source, target)) {
            return;
        }
        if self.head.len() <= source {
            self.head.resize(source + 1, 0);
        }
        let index = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
            next: self.head[source],
        });
        self.head[source] = index;
        self.edge_ids.insert((source, target), index);
    }

    /// Iterate the out-edges of `source` by walking its linked list. Empty
    /// for nodes with no recorded out-edges, including ids beyond
    /// `node_count`. Most recently inserted edge first.
    pub fn out_edges(&self, source: NodeId) -> OutEdges<'_> {
        OutEdges {
            graph: self,
            cursor: self.head.get(source).copied().unwrap_or(0),
        }
    }

    /// The recorded weight of `(source, target)`, if that edge exists.
    pub fn edge_weight(&self, source: NodeId, target: NodeId) -> Option<f64> {
        self.edge_ids
            .get(&(source, target))
            .map(|&index| self.edges[index].weight)
    }

    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.edge_ids.contains_key(&(source, target))
    }

    /// Iterate every edge in insertion order (the sentinel slot is skipped).
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().skip(1)
    }

    /// A new graph with every edge direction flipped. Weights and the node
    /// id space are preserved.
    pub fn reversed(&self) -> WeightedGraph {
        let mut reversed = WeightedGraph::with_capacity(self.node_count, self.edge_count());
        for edge in self.edges() {
            reversed.add_edge(edge.target, edge.source, edge.weight);
        }
        reversed.node_count = reversed.node_count.max(self.node_count);
        reversed
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len() - 1
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        WeightedGraph::new()
    }
}

/// Lazy, restartable out-edge cursor. Borrowing the graph keeps iteration
/// allocation-free; the graph is immutable while any cursor is live.
pub struct OutEdges<'a> {
    graph: &'a WeightedGraph,
    cursor: usize,
}

impl<'a> Iterator for OutEdges<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == 0 {
            return None;
        }
        let edge = &self.graph.edges[self.cursor];
        self.cursor = edge.next;
        Some(edge)
    }
}
