use dualgraph::{DiGraph, Error, GraphOptions, Sequence};

const EDGES: [(usize, usize); 6] = [(5, 8), (5, 4), (7, 4), (3, 4), (6, 9), (3, 2)];

fn sample() -> DiGraph {
    let mut g = DiGraph::with_vertex_count(10);
    for (head, tail) in EDGES {
        g.add_edge(head, tail).unwrap();
    }
    g
}

#[test]
fn directed_degrees_respect_direction() {
    let g = sample();
    assert_eq!(g.degree_out(5), 2);
    assert_eq!(g.degree_in(4), 3);
    assert_eq!(g.degree_out(4), 0);
    assert_eq!(g.degree_in(5), 0);
    assert_eq!(g.degree_out(3), 2);
    let out: usize = (0..10).map(|v| g.degree_out(v)).sum();
    let inc: usize = (0..10).map(|v| g.degree_in(v)).sum();
    assert_eq!(out, g.edge_count());
    assert_eq!(inc, g.edge_count());
}

#[test]
fn directed_membership_is_one_way() {
    let g = sample();
    assert!(g.is_edge(5, 4));
    assert!(!g.is_edge(4, 5));
    assert!(g.is_directed());
    for (head, tail) in EDGES {
        assert!(g.is_edge(head, tail));
        assert!(!g.is_edge(tail, head));
    }
}

#[test]
fn directed_edges_keep_their_orientation() {
    let g = sample();
    assert_eq!(g.edge(1), Some((5, 4)));
    assert_eq!(g.edge(5), Some((3, 2)));
    let ids: Vec<_> = g.edges().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn directed_edge_id_distinguishes_empty_buckets() {
    let g = sample();
    assert_eq!(g.edge_id(7, 4), Ok(2));
    assert_eq!(g.edge_id(4, 5), Err(Error::NoOutgoingEdges { vertex: 4 }));
    assert_eq!(g.edge_id(5, 3), Err(Error::NoIncomingEdges { vertex: 3 }));
    assert_eq!(g.edge_id(5, 9), Err(Error::EdgeNotFound { head: 5, tail: 9 }));
    assert_eq!(g.edge_id(11, 4), Err(Error::NoOutgoingEdges { vertex: 11 }));
    for err in [
        g.edge_id(4, 5).unwrap_err(),
        g.edge_id(5, 3).unwrap_err(),
        g.edge_id(5, 9).unwrap_err(),
    ] {
        assert!(err.is_edge_not_found());
    }
}

#[test]
fn directed_incident_edges_are_index_slices() {
    let g = sample();
    // out-bucket of 5 is ordered by tail: (5, 4) before (5, 8)
    assert_eq!(g.incident_edges_out(5).to_vec(), vec![1, 0]);
    assert_eq!(g.neighbours_out(5).to_vec(), vec![4, 8]);
    // in-bucket of 4 is ordered by head: (3, 4), (5, 4), (7, 4)
    assert_eq!(g.incident_edges_in(4).to_vec(), vec![3, 1, 2]);
    assert_eq!(g.neighbours_in(4).to_vec(), vec![3, 5, 7]);

    let (run, rest) = g.incident_edges_in(4).as_slices();
    assert_eq!(run, &[3, 1, 2]);
    assert!(rest.is_empty());
    assert_eq!(run.as_ptr(), g.index_by_tail()[1..].as_ptr());
}

#[test]
fn directed_sequences_restart_and_index_randomly() {
    let g = sample();
    let seq = g.neighbours_in(4);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.get(1), Some(5));
    let first: Vec<_> = seq.iter().collect();
    let second: Vec<_> = seq.into_iter().rev().collect();
    assert_eq!(first, vec![3, 5, 7]);
    assert_eq!(second, vec![7, 5, 3]);
}

#[test]
fn directed_index_orders_by_both_keys() {
    let g = sample();
    // by (head, tail): (3,2) (3,4) (5,4) (5,8) (6,9) (7,4)
    assert_eq!(g.index_by_head(), &[5, 3, 1, 0, 4, 2]);
    // by (tail, head): (3,2) (3,4) (5,4) (7,4) (5,8) (6,9)
    assert_eq!(g.index_by_tail(), &[5, 3, 1, 2, 0, 4]);
}

#[test]
fn directed_edge_id_does_not_depend_on_which_bucket_is_scanned() {
    let mut g = DiGraph::with_vertex_count(64);
    // a hub with a large out-bucket, and a sink with a large in-bucket
    for t in 1..50 {
        g.add_edge(0, t).unwrap();
    }
    for h in 10..60 {
        g.add_edge(h, 63).unwrap();
    }
    g.add_edge(0, 63).unwrap();
    g.add_edge(0, 25).unwrap();

    let first_match = |g: &DiGraph, h: usize, t: usize| {
        g.edges()
            .find(|&(_, e)| e == (h, t))
            .map(|(id, _)| id)
    };

    // out(0) = 51 > in(25) = 2: the in-bucket is scanned
    assert_eq!(g.edge_id(0, 25).ok(), first_match(&g, 0, 25));
    assert_eq!(g.edge_id(0, 25), Ok(24));
    // out(12) = 1 < in(63) = 51: the out-bucket is scanned
    assert_eq!(g.edge_id(12, 63).ok(), first_match(&g, 12, 63));
    // both buckets large
    assert_eq!(g.edge_id(0, 63).ok(), first_match(&g, 0, 63));
    assert_eq!(g.edge_id(0, 63), Ok(99));
    assert!(!g.is_edge(12, 25));
}

#[test]
fn directed_duplicates_resolve_to_the_oldest_edge() {
    let mut g = DiGraph::with_vertex_count(8);
    g.add_edge(1, 2).unwrap();
    g.add_edge(1, 3).unwrap();
    g.add_edge(1, 2).unwrap();
    // in(2) = 2 <= out(1) = 3
    assert_eq!(g.edge_id(1, 2), Ok(0));
    g.add_edges([(4, 2), (5, 2), (6, 2)]).unwrap();
    // in(2) = 5 > out(1) = 3
    assert_eq!(g.edge_id(1, 2), Ok(0));
    assert_eq!(g.incident_edges_out(1).to_vec(), vec![0, 2, 1]);
}

#[test]
fn directed_small_batches_follow_the_incremental_limit() {
    let options = GraphOptions {
        vertex_count: 10,
        incremental_batch_limit: 16,
        ..Default::default()
    };
    let mut incremental = DiGraph::new(options);
    incremental.add_edges(EDGES).unwrap();

    let batch = DiGraph::from_edges(10, EDGES).unwrap();
    assert_eq!(incremental.index_by_head(), batch.index_by_head());
    assert_eq!(incremental.index_by_tail(), batch.index_by_tail());
    assert_eq!(incremental.options(), options);
}
