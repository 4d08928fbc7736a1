//! Exhaustive bounded path enumeration
//!
//! Two queries on top of the same machinery: every simple path within a hop
//! bound, and the subgraph of nodes lying on some path within a weight
//! bound. Unlike the lazy enumerator these compute their full answer up
//! front, so both prune aggressively.

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::graph::algos::dijkstra;
use crate::graph::index::LabeledGraph;
use crate::graph::types::NodeId;
use crate::graph::weighted::WeightedGraph;

/// All loopless paths from `source` to `target` with at most `max_hops`
/// edges, in DFS discovery order. `source == target` yields the single
/// trivial path.
///
/// Branches are cut when the exact hop distance from the current node to the
/// target (BFS on the reversed graph) no longer fits the remaining budget.
pub fn all_paths(
    source: NodeId,
    target: NodeId,
    max_hops: usize,
    graph: &WeightedGraph,
) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();
    if source == 0 || target == 0 || source > n || target > n {
        return Vec::new();
    }
    if source == target {
        return vec![vec![source]];
    }

    let hops_to_target = reverse_hop_distances(graph, target);
    if hops_to_target[source] > max_hops {
        return Vec::new();
    }

    let mut search = Search {
        graph,
        target,
        hops_to_target,
        stack: Vec::new(),
        on_stack: vec![false; n + 1],
        found: Vec::new(),
    };
    search.dfs(source, max_hops);
    search.found
}

struct Search<'g> {
    graph: &'g WeightedGraph,
    target: NodeId,
    hops_to_target: Vec<usize>,
    stack: Vec<NodeId>,
    on_stack: Vec<bool>,
    found: Vec<Vec<NodeId>>,
}

impl Search<'_> {
    fn dfs(&mut self, u: NodeId, remaining: usize) {
        if u == self.target {
            let mut path = self.stack.clone();
            path.push(u);
            self.found.push(path);
            return;
        }
        if remaining == 0 || self.hops_to_target[u] > remaining {
            return;
        }
        self.stack.push(u);
        self.on_stack[u] = true;
        let graph = self.graph;
        for edge in graph.out_edges(u) {
            if !self.on_stack[edge.target] {
                self.dfs(edge.target, remaining - 1);
            }
        }
        self.stack.pop();
        self.on_stack[u] = false;
    }
}

/// Hop distance from every node to `target`: unweighted BFS over the
/// reversed adjacency. `usize::MAX` marks nodes that cannot reach `target`.
fn reverse_hop_distances(graph: &WeightedGraph, target: NodeId) -> Vec<usize> {
    let n = graph.node_count();
    let mut inbound: Vec<Vec<NodeId>> = vec![Vec::new(); n + 1];
    for edge in graph.edges() {
        inbound[edge.target].push(edge.source);
    }

    let mut hops = vec![usize::MAX; n + 1];
    hops[target] = 0;
    let mut queue = VecDeque::from([target]);
    while let Some(u) = queue.pop_front() {
        for &v in &inbound[u] {
            if hops[v] == usize::MAX {
                hops[v] = hops[u] + 1;
                queue.push_back(v);
            }
        }
    }
    hops
}

/// The subgraph induced by every node lying on some path from `from` to `to`
/// of total weight at most `max_distance`, translated back into the caller's
/// identifier space. `Ok(None)` when no such path exists. Unknown endpoints
/// are an input error, distinct from "no path".
pub fn path_subgraph<N>(
    from: &N,
    to: &N,
    max_distance: f64,
    source_graph: &LabeledGraph<N>,
) -> Result<Option<LabeledGraph<N>>>
where
    N: Eq + Hash + Clone + fmt::Display,
{
    let s = source_graph.id_of(from).ok_or_else(|| Error::UnknownNode {
        name: from.to_string(),
    })?;
    let t = source_graph.id_of(to).ok_or_else(|| Error::UnknownNode {
        name: to.to_string(),
    })?;

    let mut result = LabeledGraph::new();
    result.add_vertex(from);
    if s == t {
        return Ok(Some(result));
    }

    let forward = dijkstra::solve(s, source_graph.graph(), None, None);
    if forward.distance_to(t) > max_distance {
        return Ok(None);
    }
    let backward = dijkstra::solve(t, &source_graph.graph().reversed(), None, None);

    let n = source_graph.graph().node_count();
    let keep: Vec<bool> = (0..=n)
        .map(|node| forward.distance_to(node) + backward.distance_to(node) <= max_distance)
        .collect();

    for edge in source_graph.graph().edges() {
        if keep[edge.source] && keep[edge.target] {
            if let (Some(u), Some(v)) = (
                source_graph.name_of(edge.source),
                source_graph.name_of(edge.target),
            ) {
                result.add_edge(u, v, edge.weight)?;
            }
        }
    }
    Ok(Some(result))
}
