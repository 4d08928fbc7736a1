use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn diamond() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 3, 1.0);
    graph.add_edge(1, 3, 5.0);
    graph.add_edge(3, 4, 1.0);
    graph.add_edge(2, 4, 4.0);
    graph
}

#[test]
fn candidate_orders_by_length_then_deviation() {
    let short = Candidate {
        deviation: 5,
        path: vec![1, 2],
    };
    let long = Candidate {
        deviation: 0,
        path: vec![1, 2, 3],
    };
    assert!(short < long);

    let early = Candidate {
        deviation: 0,
        path: vec![1, 3, 4],
    };
    let late = Candidate {
        deviation: 1,
        path: vec![1, 2, 4],
    };
    assert!(early < late);
}

#[test]
fn first_path_is_the_weight_shortest() {
    let graph = diamond();
    let mut session = PathEnumerator::new(&graph, 1, 4, 10);
    assert_eq!(session.next_path(), Some(vec![1, 2, 3, 4]));
}

#[test]
fn diamond_enumeration_order_and_exhaustion() {
    let graph = diamond();
    let mut session = PathEnumerator::new(&graph, 1, 4, 10);
    // Weight-shortest first; the two 2-hop alternatives follow in
    // deviation-index order; then the frontier runs dry.
    assert_eq!(session.next_path(), Some(vec![1, 2, 3, 4]));
    assert_eq!(session.next_path(), Some(vec![1, 3, 4]));
    assert_eq!(session.next_path(), Some(vec![1, 2, 4]));
    assert_eq!(session.next_path(), None);
    // Exhaustion is sticky.
    assert_eq!(session.next_path(), None);
    assert_eq!(session.next_path(), None);
}

#[test]
fn same_endpoint_yields_trivial_path_then_exhausts() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(5, 6, 1.0);
    let mut session = PathEnumerator::new(&graph, 5, 5, 10);
    assert_eq!(session.next_path(), Some(vec![5]));
    assert_eq!(session.next_path(), None);
    assert_eq!(session.next_path(), None);
}

#[test]
fn unreachable_target_exhausts_with_zero_paths() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(3, 4, 1.0);
    let mut session = PathEnumerator::new(&graph, 1, 4, 10);
    assert_eq!(session.next_path(), None);
    assert_eq!(session.next_path(), None);
}

#[test]
fn first_path_is_exempt_from_the_hop_bound() {
    let graph = diamond();
    let mut session = PathEnumerator::new(&graph, 1, 4, 1);
    // Three hops, but the opening shortest path always comes through.
    assert_eq!(session.next_path(), Some(vec![1, 2, 3, 4]));
    // The 2-hop candidates exceed the bound, which terminates the session.
    assert_eq!(session.next_path(), None);
}

#[test]
fn bound_cuts_off_longer_candidates() {
    let graph = diamond();
    let mut session = PathEnumerator::new(&graph, 1, 4, 2);
    assert_eq!(session.next_path(), Some(vec![1, 2, 3, 4]));
    assert_eq!(session.next_path(), Some(vec![1, 3, 4]));
    assert_eq!(session.next_path(), Some(vec![1, 2, 4]));
    assert_eq!(session.next_path(), None);
}

#[test]
fn finds_every_route_in_a_parallel_diamond() {
    // 1→4 direct plus two 2-hop routes via 2 and 3.
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 4, 1.0);
    graph.add_edge(1, 3, 1.0);
    graph.add_edge(3, 4, 1.0);
    graph.add_edge(1, 4, 1.0);

    let session = PathEnumerator::new(&graph, 1, 4, 10);
    let paths: Vec<Vec<NodeId>> = session.collect();
    assert_eq!(paths[0], vec![1, 4]);
    assert_eq!(paths.len(), 3);
    assert!(paths.contains(&vec![1, 2, 4]));
    assert!(paths.contains(&vec![1, 3, 4]));
}

#[test]
fn session_is_an_iterator() {
    let graph = diamond();
    let paths: Vec<Vec<NodeId>> = PathEnumerator::new(&graph, 1, 4, 10).collect();
    assert_eq!(paths, vec![vec![1, 2, 3, 4], vec![1, 3, 4], vec![1, 2, 4]]);
}

fn random_graph(rng: &mut StdRng) -> WeightedGraph {
    let nodes = rng.gen_range(2..=8);
    let edges = rng.gen_range(1..=16);
    let mut graph = WeightedGraph::new();
    graph.add_edge(nodes, nodes, 0.0);
    for _ in 0..edges {
        let u = rng.gen_range(1..=nodes);
        let v = rng.gen_range(1..=nodes);
        let w = f64::from(rng.gen_range(1..=4));
        graph.add_edge(u, v, w);
        graph.add_edge(v, u, w);
    }
    graph
}

#[test]
fn enumeration_invariants_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    for round in 0..100 {
        let graph = random_graph(&mut rng);
        let nodes = graph.node_count();
        let source = rng.gen_range(1..=nodes);
        let target = rng.gen_range(1..=nodes);
        let max_hops = rng.gen_range(1..=nodes);

        let mut session = PathEnumerator::new(&graph, source, target, max_hops);
        let mut seen: HashSet<Vec<NodeId>> = HashSet::new();
        let mut pulls = 0;
        while let Some(path) = session.next_path() {
            pulls += 1;
            assert!(pulls <= 4096, "round {round}: session failed to terminate");

            // Endpoints and looplessness.
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&target));
            let distinct: HashSet<NodeId> = path.iter().copied().collect();
            assert_eq!(distinct.len(), path.len(), "round {round}: loop in {path:?}");

            // Every consecutive pair is a real edge.
            for pair in path.windows(2) {
                assert!(
                    graph.has_edge(pair[0], pair[1]),
                    "round {round}: missing edge {pair:?}"
                );
            }

            // Distinct from everything yielded before; bounded after the
            // opening shortest path.
            assert!(seen.insert(path.clone()), "round {round}: duplicate {path:?}");
            if seen.len() > 1 {
                assert!(path.len() <= max_hops + 1, "round {round}: bound violation");
            }
        }
        // Terminal exhaustion.
        assert_eq!(session.next_path(), None);
    }
}
