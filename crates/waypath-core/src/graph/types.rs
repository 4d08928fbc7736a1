//! Shared graph types

/// Dense node identifier. Valid ids live in `[1, node_count]`; id 0 is the
/// reserved sentinel (it indexes the unused slot 0 of the edge pool).
pub type NodeId = usize;

/// An undirected node pair, normalized so `(u, v)` and `(v, u)` compare and
/// hash identically. Used to key "this edge may not be reused" sets
/// independent of traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UndirectedEdge(NodeId, NodeId);

impl UndirectedEdge {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            UndirectedEdge(a, b)
        } else {
            UndirectedEdge(b, a)
        }
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edge_normalizes_order() {
        assert_eq!(UndirectedEdge::new(3, 7), UndirectedEdge::new(7, 3));
        assert_eq!(UndirectedEdge::new(3, 7).endpoints(), (3, 7));
        assert_eq!(UndirectedEdge::new(7, 3).endpoints(), (3, 7));
    }

    #[test]
    fn undirected_edge_self_loop() {
        assert_eq!(UndirectedEdge::new(4, 4).endpoints(), (4, 4));
    }
}
