use baconpath_core::{
    CastRecord, GraphError, MovieFilter, MovieGraph, Recommendations, cast_similarity,
    get_recommendations,
};

/// Query cast {Xena, Yuri, Zoe}; Close Call shares two of them, Long Shot
/// shares one, Solo Act shares none.
fn overlap_graph() -> MovieGraph {
    MovieGraph::from_records(vec![
        CastRecord::new("Xena", "Query Feature", 2005, 7.5),
        CastRecord::new("Yuri", "Query Feature", 2005, 7.5),
        CastRecord::new("Zoe", "Query Feature", 2005, 7.5),
        CastRecord::new("Xena", "Close Call", 2012, 8.0),
        CastRecord::new("Yuri", "Close Call", 2012, 8.0),
        CastRecord::new("Wes", "Close Call", 2012, 8.0),
        CastRecord::new("Xena", "Long Shot", 1995, 6.0),
        CastRecord::new("Pat", "Long Shot", 1995, 6.0),
        CastRecord::new("Quinn", "Long Shot", 1995, 6.0),
        CastRecord::new("Solo", "Solo Act", 2001, 5.0),
    ])
}

#[test]
fn test_jaccard_overlap_values() {
    let graph = overlap_graph();
    let query = graph.movie_id("Query Feature").unwrap();
    let close = graph.movie_id("Close Call").unwrap();
    let long = graph.movie_id("Long Shot").unwrap();

    // Shared {Xena, Yuri} over union of four names.
    assert_eq!(cast_similarity(&graph, query, close), 0.5);
    // Shared {Xena} over union of five names.
    assert!((cast_similarity(&graph, query, long) - 0.2).abs() < 1e-12);
}

#[test]
fn test_similarity_is_symmetric() {
    let graph = overlap_graph();
    let query = graph.movie_id("Query Feature").unwrap();
    let close = graph.movie_id("Close Call").unwrap();
    let long = graph.movie_id("Long Shot").unwrap();

    assert_eq!(
        cast_similarity(&graph, query, close),
        cast_similarity(&graph, close, query)
    );
    assert_eq!(
        cast_similarity(&graph, query, long),
        cast_similarity(&graph, long, query)
    );
}

#[test]
fn test_top_recommendation_is_the_strongest_overlap() {
    let graph = overlap_graph();

    let recs = get_recommendations(&graph, "Query Feature", 1, None).unwrap();
    match recs {
        Recommendations::Ranked(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].0, "Close Call");
            assert_eq!(entries[0].1, 0.5);
        }
        other => panic!("expected a ranked list, got {other:?}"),
    }
}

#[test]
fn test_query_movie_never_recommends_itself() {
    let graph = overlap_graph();

    let recs = get_recommendations(&graph, "Query Feature", 10, None).unwrap();
    match recs {
        Recommendations::Ranked(entries) => {
            let titles: Vec<&str> = entries.iter().map(|(title, _)| title.as_str()).collect();
            assert_eq!(titles, vec!["Close Call", "Long Shot"]);
        }
        other => panic!("expected a ranked list, got {other:?}"),
    }
}

#[test]
fn test_no_shared_cast_means_no_candidates() {
    let graph = overlap_graph();

    let recs = get_recommendations(&graph, "Solo Act", 10, None).unwrap();
    assert_eq!(recs, Recommendations::NoCandidates);
    assert!(recs.is_empty());
}

#[test]
fn test_filtered_calls_return_the_matching_facts() {
    let graph = overlap_graph();

    // Long Shot (1995) fails the candidate-side window; Close Call passes
    // and reports why.
    let filter = MovieFilter::year_range(2010, 2020);
    let recs = get_recommendations(&graph, "Query Feature", 10, Some(&filter)).unwrap();
    match recs {
        Recommendations::Filtered(entries) => {
            assert_eq!(entries.len(), 1);
            let matched = &entries["Close Call"];
            assert_eq!(matched.score, 0.5);
            assert_eq!(matched.year, 2012);
            assert_eq!(matched.rating, 8.0);
        }
        other => panic!("expected a filtered map, got {other:?}"),
    }
}

#[test]
fn test_filter_rejecting_everything_is_empty_but_not_no_candidates() {
    let graph = overlap_graph();

    let filter = MovieFilter::year_range(2030, 2040);
    let recs = get_recommendations(&graph, "Query Feature", 10, Some(&filter)).unwrap();
    match &recs {
        Recommendations::Filtered(entries) => assert!(entries.is_empty()),
        other => panic!("expected an empty filtered map, got {other:?}"),
    }
    assert!(recs.is_empty());
}

#[test]
fn test_equal_scores_order_by_title() {
    let graph = MovieGraph::from_records(vec![
        CastRecord::new("Ann", "Pivot", 2000, 6.0),
        CastRecord::new("Ben", "Pivot", 2000, 6.0),
        CastRecord::new("Ann", "Beta Reel", 2001, 6.0),
        CastRecord::new("Cal", "Beta Reel", 2001, 6.0),
        CastRecord::new("Ben", "Alpha Reel", 2002, 6.0),
        CastRecord::new("Dot", "Alpha Reel", 2002, 6.0),
    ]);

    // Both candidates share exactly one of Pivot's two names.
    let recs = get_recommendations(&graph, "Pivot", 10, None).unwrap();
    match recs {
        Recommendations::Ranked(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].1, entries[1].1);
            assert_eq!(entries[0].0, "Alpha Reel");
            assert_eq!(entries[1].0, "Beta Reel");
        }
        other => panic!("expected a ranked list, got {other:?}"),
    }
}

#[test]
fn test_count_truncates_the_ranking() {
    let graph = overlap_graph();

    let recs = get_recommendations(&graph, "Query Feature", 1, None).unwrap();
    match recs {
        Recommendations::Ranked(entries) => assert_eq!(entries.len(), 1),
        other => panic!("expected a ranked list, got {other:?}"),
    }
}

#[test]
fn test_unknown_movie_is_a_typed_failure() {
    let graph = overlap_graph();

    let error = get_recommendations(&graph, "Lost Reel", 5, None).unwrap_err();
    assert_eq!(error, GraphError::UnknownMovie("Lost Reel".to_string()));
}
