use dualgraph::{CacheStats, CachedGraph, CachedSeq, DiGraph, GraphApi, Sequence, UnGraph};

fn sample_undirected() -> CachedGraph<false> {
    let g = UnGraph::from_edges(10, [(5, 8), (5, 4), (7, 4), (3, 4), (6, 9), (3, 2)]).unwrap();
    CachedGraph::new(g)
}

#[test]
fn cached_queries_match_the_indexed_graph() {
    let cg = sample_undirected();
    let g = cg.inner().clone();
    for v in 0..10 {
        assert_eq!(cg.degree(v), g.degree(v));
        assert_eq!(cg.neighbours(v).to_vec(), g.neighbours(v).to_vec());
        assert_eq!(cg.incident_edges(v).to_vec(), g.incident_edges(v).to_vec());
    }
    assert_eq!(&*cg.neighbours(4), &[5, 7, 3]);
}

#[test]
fn repeated_queries_are_served_from_the_memo() {
    let cg = sample_undirected();
    let first = cg.neighbours(4).to_vec();
    let second = cg.neighbours(4).to_vec();
    assert_eq!(first, second);
    assert_eq!(
        cg.cache_stats(),
        CacheStats {
            hits: 1,
            misses: 1,
            memoized: 1
        }
    );

    // edges and neighbours of the same vertex are memoized separately
    let _ = cg.incident_edges(4);
    assert_eq!(cg.cache_stats().misses, 2);
    assert_eq!(cg.cache_stats().memoized, 2);
}

#[test]
fn mutation_drops_memoized_sequences() {
    let mut cg = sample_undirected();
    assert_eq!(cg.neighbours(4).to_vec(), vec![5, 7, 3]);
    assert_eq!(cg.cache_stats().memoized, 1);

    cg.add_edge(4, 0).unwrap();
    assert_eq!(cg.cache_stats().memoized, 0);
    assert_eq!(cg.neighbours(4).to_vec(), vec![5, 7, 0, 3]);
    assert_eq!(cg.degree(4), 4);

    let _ = cg.neighbours(4);
    cg.add_edges([(1, 4), (4, 4)]).unwrap();
    assert_eq!(cg.cache_stats().memoized, 0);
    assert_eq!(cg.neighbours(4).to_vec(), vec![4, 5, 7, 0, 1, 3, 4]);
    assert_eq!(cg.cache_stats().misses, 3);
}

#[test]
fn vertex_count_changes_drop_memos_but_failures_do_not() {
    let mut cg = sample_undirected();
    let _ = cg.neighbours(9);
    assert!(cg.set_vertex_count(5).is_err());
    assert!(cg.add_edge(0, 10).is_err());
    assert_eq!(cg.cache_stats().memoized, 1);

    cg.set_vertex_count(10).unwrap();
    assert_eq!(cg.cache_stats().memoized, 1);

    cg.set_vertex_count(12).unwrap();
    assert_eq!(cg.cache_stats().memoized, 0);
    assert!(cg.neighbours(11).is_empty());
}

#[test]
fn outstanding_memo_borrows_fall_back_to_fresh_buffers() {
    let cg = sample_undirected();
    let held = cg.neighbours(4);
    let other = cg.neighbours(5);
    assert!(matches!(held, CachedSeq::Memo(_)));
    assert!(matches!(other, CachedSeq::Fresh(_)));
    assert_eq!(other.to_vec(), vec![8, 4]);

    // a memoized entry can still be shared while another is held
    let again = cg.neighbours(4);
    assert!(matches!(again, CachedSeq::Memo(_)));
    drop((held, other, again));

    assert!(matches!(cg.neighbours(5), CachedSeq::Memo(_)));
    assert_eq!(cg.cache_stats().memoized, 2);
}

#[test]
fn directed_cache_keeps_in_and_out_separate() {
    let g = DiGraph::from_edges(4, [(0, 1), (2, 1), (1, 3)]).unwrap();
    let mut cg = CachedGraph::from(g);
    assert!(cg.is_directed());
    assert_eq!(cg.neighbours_out(1).to_vec(), vec![3]);
    assert_eq!(cg.neighbours_in(1).to_vec(), vec![0, 2]);
    assert_eq!(cg.incident_edges_in(1).to_vec(), vec![0, 1]);
    assert_eq!(cg.incident_edges_out(1).to_vec(), vec![2]);
    assert_eq!(cg.degree_in(1), 2);
    assert_eq!(cg.degree_out(1), 1);
    assert_eq!(cg.cache_stats().memoized, 4);

    cg.add_edge(3, 1).unwrap();
    assert_eq!(cg.neighbours_in(1).to_vec(), vec![0, 2, 3]);
    assert_eq!(cg.edge_id(3, 1), Ok(3));
    assert!(cg.is_edge(2, 1));
    assert_eq!(cg.edge(3), Some((3, 1)));
    assert_eq!(cg.edge_count(), 4);
    assert_eq!(cg.into_inner().edge_count(), 4);
}

#[test]
fn clear_cache_empties_the_arena() {
    let mut cg = sample_undirected();
    for v in 0..10 {
        let _ = cg.incident_edges(v);
    }
    assert_eq!(cg.cache_stats().memoized, 10);
    cg.clear_cache();
    assert_eq!(cg.cache_stats().memoized, 0);
}

#[test]
fn undirected_cache_collapses_in_and_out() {
    let cg = sample_undirected();
    assert_eq!(GraphApi::degree_in(&cg, 4), 3);
    assert_eq!(GraphApi::degree_out(&cg, 4), 3);
    assert_eq!(
        GraphApi::neighbours_in(&cg, 4).to_vec(),
        GraphApi::neighbours_out(&cg, 4).to_vec()
    );
    // both names share the single unified memo slot
    assert_eq!(cg.cache_stats().memoized, 1);
}
