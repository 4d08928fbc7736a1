//! Identifier interning and the labeled graph facade
//!
//! [`WeightedGraph`] only understands dense integer ids; external callers
//! speak note names, file paths, or whatever identifiers their link index
//! produces. [`IdentifierIndex`] owns the bidirectional mapping and
//! [`LabeledGraph`] composes the two so callers never juggle raw ids.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::graph::types::NodeId;
use crate::graph::weighted::WeightedGraph;

/// Bidirectional mapping between external identifiers and dense node ids.
///
/// Ids are assigned sequentially starting at 1 (0 stays the graph sentinel),
/// so `id - 1` indexes the name table directly.
#[derive(Debug, Clone)]
pub struct IdentifierIndex<N> {
    name_to_id: HashMap<N, NodeId>,
    names: Vec<N>,
}

impl<N> Default for IdentifierIndex<N> {
    fn default() -> Self {
        IdentifierIndex {
            name_to_id: HashMap::new(),
            names: Vec::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> IdentifierIndex<N> {
    pub fn new() -> Self {
        IdentifierIndex {
            name_to_id: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Register a new identifier and return its id. Re-registering an
    /// existing identifier is an error; use [`get_or_create`] for the
    /// idempotent path.
    ///
    /// [`get_or_create`]: IdentifierIndex::get_or_create
    pub fn insert(&mut self, name: N) -> Result<NodeId>
    where
        N: fmt::Display,
    {
        if self.name_to_id.contains_key(&name) {
            return Err(Error::AlreadyExists {
                name: name.to_string(),
            });
        }
        Ok(self.allocate(name))
    }

    /// The id for `name`, creating one if it was never seen.
    pub fn get_or_create(&mut self, name: &N) -> NodeId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        self.allocate(name.clone())
    }

    fn allocate(&mut self, name: N) -> NodeId {
        self.names.push(name.clone());
        let id = self.names.len();
        self.name_to_id.insert(name, id);
        id
    }

    pub fn id_of(&self, name: &N) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    pub fn name_of(&self, id: NodeId) -> Option<&N> {
        self.names.get(id.checked_sub(1)?)
    }

    /// Number of identifiers registered (equal to the highest assigned id).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A weighted digraph addressed by external identifiers.
///
/// Composition replaces the inheritance the original design used: the graph
/// and the index are independent components and this type is the only place
/// that keeps them in sync.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N> {
    graph: WeightedGraph,
    index: IdentifierIndex<N>,
}

impl<N> Default for LabeledGraph<N> {
    fn default() -> Self {
        LabeledGraph {
            graph: WeightedGraph::new(),
            index: IdentifierIndex::default(),
        }
    }
}

impl<N: Eq + Hash + Clone> LabeledGraph<N> {
    pub fn new() -> Self {
        LabeledGraph {
            graph: WeightedGraph::new(),
            index: IdentifierIndex::new(),
        }
    }

    /// Ensure `name` has a node, returning its id.
    pub fn add_vertex(&mut self, name: &N) -> NodeId {
        self.index.get_or_create(name)
    }

    /// Add a directed edge between two named nodes, interning either name on
    /// first sight. Rejects weights outside the non-negative finite contract.
    pub fn add_edge(&mut self, from: &N, to: &N, weight: f64) -> Result<()> {
        if !(weight >= 0.0 && weight.is_finite()) {
            return Err(Error::InvalidWeight { value: weight });
        }
        let source = self.index.get_or_create(from);
        let target = self.index.get_or_create(to);
        self.graph.add_edge(source, target, weight);
        Ok(())
    }

    /// Build a graph from link triples, the shape a link/reference index
    /// produces. With `bidirectional` each logical link is materialized as
    /// two directed edges.
    pub fn from_links<I>(links: I, bidirectional: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = LabeledGraph::new();
        for (from, to, weight) in links {
            graph.add_edge(&from, &to, weight)?;
            if bidirectional {
                graph.add_edge(&to, &from, weight)?;
            }
        }
        Ok(graph)
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn index(&self) -> &IdentifierIndex<N> {
        &self.index
    }

    pub fn id_of(&self, name: &N) -> Option<NodeId> {
        self.index.id_of(name)
    }

    pub fn name_of(&self, id: NodeId) -> Option<&N> {
        self.index.name_of(id)
    }

    /// Translate a path of dense ids back into external identifiers.
    /// `None` if any id was never interned.
    pub fn resolve_path(&self, path: &[NodeId]) -> Option<Vec<N>> {
        path.iter()
            .map(|&id| self.index.name_of(id).cloned())
            .collect()
    }
}
