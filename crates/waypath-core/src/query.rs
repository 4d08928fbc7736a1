//! Identifier-level query surface
//!
//! Callers (the CLI, a panel, a plugin host) speak external identifiers;
//! this module translates to dense ids, drives the solvers, and shapes
//! serializable results. Unknown endpoints are reported as input errors,
//! which is a different condition from "no path exists".

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::algos::dijkstra;
use crate::graph::algos::enumerate::PathEnumerator;
use crate::graph::index::LabeledGraph;

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShortestPathResult<N> {
    /// Source and target are the same node; the trivial case, not an error.
    SameNode { node: N },
    /// No path exists (distance is infinite).
    Unreachable,
    /// A shortest path with its total edge weight.
    Found { distance: f64, path: Vec<N> },
}

/// Weight-shortest path between two named nodes.
#[tracing::instrument(level = "debug", skip(graph), fields(from = %from, to = %to))]
pub fn shortest_path<N>(
    graph: &LabeledGraph<N>,
    from: &N,
    to: &N,
) -> Result<ShortestPathResult<N>>
where
    N: Eq + Hash + Clone + fmt::Display,
{
    let source = graph.id_of(from).ok_or_else(|| Error::UnknownNode {
        name: from.to_string(),
    })?;
    let target = graph.id_of(to).ok_or_else(|| Error::UnknownNode {
        name: to.to_string(),
    })?;

    if source == target {
        return Ok(ShortestPathResult::SameNode { node: from.clone() });
    }

    let sp = dijkstra::solve(source, graph.graph(), None, None);
    match dijkstra::build_path(source, target, &sp) {
        // Ids on a reconstructed path came from the index, so resolution
        // cannot fail in practice.
        Some(ids) => Ok(graph.resolve_path(&ids).map_or(
            ShortestPathResult::Unreachable,
            |path| ShortestPathResult::Found {
                distance: sp.distance_to(target),
                path,
            },
        )),
        None => Ok(ShortestPathResult::Unreachable),
    }
}

/// A pull-driven enumeration session over external identifiers.
///
/// Wraps [`PathEnumerator`] and resolves each yielded id sequence back into
/// names. One path is computed per pull; dropping the session abandons it
/// with no further work.
#[derive(Debug)]
pub struct PathSession<'g, N> {
    enumerator: PathEnumerator<'g>,
    graph: &'g LabeledGraph<N>,
}

impl<'g, N> PathSession<'g, N>
where
    N: Eq + Hash + Clone + fmt::Display,
{
    /// Open a session. Endpoint validation happens here: querying between
    /// unknown names fails up front rather than reading as "no path".
    /// `max_hops` bounds the edge count of every path after the first and
    /// must be positive.
    pub fn new(
        graph: &'g LabeledGraph<N>,
        from: &N,
        to: &N,
        max_hops: usize,
    ) -> Result<Self> {
        if max_hops == 0 {
            return Err(Error::InvalidBound { value: 0 });
        }
        let source = graph.id_of(from).ok_or_else(|| Error::UnknownNode {
            name: from.to_string(),
        })?;
        let target = graph.id_of(to).ok_or_else(|| Error::UnknownNode {
            name: to.to_string(),
        })?;
        Ok(PathSession {
            enumerator: PathEnumerator::new(graph.graph(), source, target, max_hops),
            graph,
        })
    }

    /// The next shortest loopless path as external identifiers, or `None`
    /// once the session is exhausted (terminal).
    pub fn next_path(&mut self) -> Option<Vec<N>> {
        self.enumerator
            .next_path()
            .and_then(|ids| self.graph.resolve_path(&ids))
    }
}

impl<N> Iterator for PathSession<'_, N>
where
    N: Eq + Hash + Clone + fmt::Display,
{
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_diamond() -> LabeledGraph<String> {
        let mut graph = LabeledGraph::new();
        for (u, v, w) in [
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("a", "c", 5.0),
            ("c", "d", 1.0),
            ("b", "d", 4.0),
        ] {
            graph.add_edge(&u.to_string(), &v.to_string(), w).unwrap();
        }
        graph
    }

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shortest_path_found_with_distance() {
        let graph = labeled_diamond();
        let result = shortest_path(&graph, &"a".to_string(), &"d".to_string()).unwrap();
        assert_eq!(
            result,
            ShortestPathResult::Found {
                distance: 3.0,
                path: names(&["a", "b", "c", "d"]),
            }
        );
    }

    #[test]
    fn shortest_path_same_node() {
        let graph = labeled_diamond();
        let result = shortest_path(&graph, &"b".to_string(), &"b".to_string()).unwrap();
        assert_eq!(
            result,
            ShortestPathResult::SameNode {
                node: "b".to_string()
            }
        );
    }

    #[test]
    fn shortest_path_unreachable_is_not_an_error() {
        let mut graph = labeled_diamond();
        graph
            .add_edge(&"island".to_string(), &"rock".to_string(), 1.0)
            .unwrap();
        let result = shortest_path(&graph, &"a".to_string(), &"island".to_string()).unwrap();
        assert_eq!(result, ShortestPathResult::Unreachable);
    }

    #[test]
    fn shortest_path_unknown_endpoint_is_an_error() {
        let graph = labeled_diamond();
        let err = shortest_path(&graph, &"a".to_string(), &"ghost".to_string()).unwrap_err();
        assert!(matches!(err, Error::UnknownNode { .. }));
    }

    #[test]
    fn result_serializes_with_status_tag() {
        let result = ShortestPathResult::Found {
            distance: 2.0,
            path: names(&["a", "b"]),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"status\":\"found\""));
        assert!(json.contains("\"distance\":2.0"));
    }

    #[test]
    fn session_yields_paths_as_names() {
        let graph = labeled_diamond();
        let mut session =
            PathSession::new(&graph, &"a".to_string(), &"d".to_string(), 10).unwrap();
        assert_eq!(session.next_path(), Some(names(&["a", "b", "c", "d"])));
        assert_eq!(session.next_path(), Some(names(&["a", "c", "d"])));
        assert_eq!(session.next_path(), Some(names(&["a", "b", "d"])));
        assert_eq!(session.next_path(), None);
        assert_eq!(session.next_path(), None);
    }

    #[test]
    fn session_validates_endpoints_up_front() {
        let graph = labeled_diamond();
        let err = PathSession::new(&graph, &"ghost".to_string(), &"d".to_string(), 10)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownNode { .. }));
    }

    #[test]
    fn session_rejects_zero_bound() {
        let graph = labeled_diamond();
        let err =
            PathSession::new(&graph, &"a".to_string(), &"d".to_string(), 0).unwrap_err();
        assert!(matches!(err, Error::InvalidBound { value: 0 }));
    }

    #[test]
    fn session_same_endpoint_yields_trivial_path() {
        let graph = labeled_diamond();
        let paths: Vec<Vec<String>> =
            PathSession::new(&graph, &"c".to_string(), &"c".to_string(), 5)
                .unwrap()
                .collect();
        assert_eq!(paths, vec![names(&["c"])]);
    }
}
