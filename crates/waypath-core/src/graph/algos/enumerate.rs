//! Successive shortest loopless paths
//!
//! A Yen-style enumerator: each emitted path seeds deviation searches (one
//! constrained Dijkstra per prefix boundary) that feed a candidate frontier,
//! and each pull takes the frontier head. The session is an explicit state
//! machine — the frontier, the emitted-path set and the per-root forbidden
//! edges are exactly the locals a paused generator would hold — so no work
//! happens between pulls and dropping the session discards everything.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::algos::dijkstra;
use crate::graph::types::{NodeId, UndirectedEdge};
use crate::graph::weighted::WeightedGraph;

/// A not-yet-emitted candidate path. `deviation` is the index in the parent
/// path where this candidate branched off; it only serves as a deterministic
/// tie-break between candidates of equal length.
#[derive(Debug, Clone)]
struct Candidate {
    deviation: usize,
    path: Vec<NodeId>,
}

impl Candidate {
    fn key(&self) -> (usize, usize) {
        (self.path.len(), self.deviation)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

/// Pull-driven session yielding loopless paths from `source` to `target`
/// in non-decreasing hop-count order, up to `max_hops` edges per path.
///
/// Each `next()` call computes exactly one more path; nothing is precomputed
/// ahead of the most recent pull. Exhaustion (`None`) is terminal and
/// sticky. The first path is the weight-shortest one from an unconstrained
/// Dijkstra run and is exempt from the hop bound; the bound applies from the
/// second path on.
///
/// The graph must not be mutated while the session is alive (enforced by
/// the shared borrow).
#[derive(Debug)]
pub struct PathEnumerator<'g> {
    graph: &'g WeightedGraph,
    source: NodeId,
    target: NodeId,
    max_hops: usize,
    emitted: HashSet<Vec<NodeId>>,
    frontier: BinaryHeap<Reverse<Candidate>>,
    /// Edges already known to lead from a deviation root toward previously
    /// emitted paths. Accumulated across pulls, never reset: this is what
    /// prevents both regeneration of old paths and missed alternatives.
    forbidden_by_root: HashMap<NodeId, HashSet<UndirectedEdge>>,
    last: Option<Vec<NodeId>>,
    started: bool,
    exhausted: bool,
}

impl<'g> PathEnumerator<'g> {
    pub fn new(
        graph: &'g WeightedGraph,
        source: NodeId,
        target: NodeId,
        max_hops: usize,
    ) -> Self {
        PathEnumerator {
            graph,
            source,
            target,
            max_hops,
            emitted: HashSet::new(),
            frontier: BinaryHeap::new(),
            forbidden_by_root: HashMap::new(),
            last: None,
            started: false,
            exhausted: false,
        }
    }

    /// Compute and return the next shortest loopless path, or `None` once no
    /// further path within the bound exists.
    pub fn next_path(&mut self) -> Option<Vec<NodeId>> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return self.first_path();
        }

        let Some(previous) = self.last.take() else {
            self.exhausted = true;
            return None;
        };
        self.deviate_from(&previous);

        // Duplicate suppression: deviation searches across pulls can rebuild
        // an already-emitted sequence.
        while self
            .frontier
            .peek()
            .is_some_and(|Reverse(candidate)| self.emitted.contains(&candidate.path))
        {
            self.frontier.pop();
        }

        let Some(Reverse(candidate)) = self.frontier.pop() else {
            tracing::debug!(emitted = self.emitted.len(), "frontier exhausted");
            self.exhausted = true;
            return None;
        };
        // Frontier is length-ordered, so every remaining candidate is at
        // least this long: over-bound means done, not skip.
        if candidate.path.len() > self.max_hops + 1 {
            tracing::debug!(
                hops = candidate.path.len() - 1,
                max_hops = self.max_hops,
                "next candidate exceeds bound"
            );
            self.exhausted = true;
            return None;
        }
        self.emit(candidate.path)
    }

    fn first_path(&mut self) -> Option<Vec<NodeId>> {
        if self.source == self.target {
            self.exhausted = true;
            let trivial = vec![self.source];
            self.emitted.insert(trivial.clone());
            return Some(trivial);
        }
        let sp = dijkstra::solve(self.source, self.graph, None, None);
        match dijkstra::build_path(self.source, self.target, &sp) {
            Some(path) => self.emit(path),
            None => {
                tracing::debug!(
                    source = self.source,
                    target = self.target,
                    "target unreachable"
                );
                self.exhausted = true;
                None
            }
        }
    }

    /// Run one constrained Dijkstra per prefix boundary of `previous`,
    /// pushing every successful deviation onto the frontier.
    fn deviate_from(&mut self, previous: &[NodeId]) {
        for pair in previous.windows(2) {
            self.forbidden_by_root
                .entry(pair[0])
                .or_default()
                .insert(UndirectedEdge::new(pair[0], pair[1]));
        }

        // The committed prefix grows with the deviation index, keeping every
        // spliced candidate loopless.
        let mut committed: HashSet<NodeId> = HashSet::new();
        for (i, &root) in previous.iter().enumerate().take(previous.len() - 1) {
            let sp = dijkstra::solve(
                root,
                self.graph,
                Some(&committed),
                self.forbidden_by_root.get(&root),
            );
            if let Some(tail) = dijkstra::build_path(root, self.target, &sp) {
                let mut path = previous[..i].to_vec();
                path.extend(tail);
                tracing::trace!(deviation = i, hops = path.len() - 1, "candidate found");
                self.frontier.push(Reverse(Candidate { deviation: i, path }));
            }
            committed.insert(root);
        }
    }

    fn emit(&mut self, path: Vec<NodeId>) -> Option<Vec<NodeId>> {
        self.emitted.insert(path.clone());
        self.last = Some(path.clone());
        Some(path)
    }
}

impl Iterator for PathEnumerator<'_> {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_path()
    }
}

#[cfg(test)]
mod tests;
