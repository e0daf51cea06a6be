use baconpath_core::{CastRecord, GraphError, MovieGraph};

fn sample_records() -> Vec<CastRecord> {
    vec![
        CastRecord::new("Alice", "First Picture", 2000, 7.0),
        CastRecord::new("Bob", "First Picture", 2000, 7.0),
        CastRecord::new("Alice", "Second Picture", 2005, 6.5),
        CastRecord::new("Carol", "Second Picture", 2005, 6.5),
        CastRecord::new("Dave", "Lonely Feature", 2010, 4.0),
    ]
}

#[test]
fn test_every_edge_is_mutual() {
    let graph = MovieGraph::from_records(sample_records());

    for actor in graph.actor_ids() {
        for &movie in graph.appearances(actor) {
            assert!(
                graph.cast(movie).contains(&actor),
                "movie {} does not list actor {}",
                graph.movie_title(movie),
                graph.actor_name(actor)
            );
        }
    }

    for movie in graph.movie_ids() {
        for &actor in graph.cast(movie) {
            assert!(graph.appearances(actor).contains(&movie));
        }
    }
}

#[test]
fn test_adjacency_keeps_ingestion_order() {
    let records = vec![
        CastRecord::new("Alice", "Zeta", 1999, 5.0),
        CastRecord::new("Alice", "Alpha", 2001, 6.0),
        CastRecord::new("Alice", "Mid", 2003, 7.0),
        CastRecord::new("Bob", "Mid", 2003, 7.0),
        CastRecord::new("Carol", "Mid", 2003, 7.0),
    ];
    let graph = MovieGraph::from_records(records);

    let alice = graph.actor_id("Alice").unwrap();
    let titles: Vec<&str> = graph
        .appearances(alice)
        .iter()
        .map(|&movie| graph.movie_title(movie))
        .collect();
    assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);

    let mid = graph.movie_id("Mid").unwrap();
    let cast: Vec<&str> = graph
        .cast(mid)
        .iter()
        .map(|&actor| graph.actor_name(actor))
        .collect();
    assert_eq!(cast, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_duplicate_rows_insert_one_edge() {
    let records = vec![
        CastRecord::new("Alice", "First Picture", 2000, 7.0),
        CastRecord::new("Alice", "First Picture", 2000, 7.0),
    ];
    let graph = MovieGraph::from_records(records);

    let alice = graph.actor_id("Alice").unwrap();
    let movie = graph.movie_id("First Picture").unwrap();
    assert_eq!(graph.appearances(alice), &[movie]);
    assert_eq!(graph.cast(movie), &[alice]);
}

#[test]
fn test_malformed_rows_are_skipped_and_counted() {
    let records = vec![
        CastRecord::new("Alice", "First Picture", 2000, 7.0),
        CastRecord::new("", "First Picture", 2000, 7.0),
        CastRecord::new("Bob", "   ", 2000, 7.0),
    ];
    let graph = MovieGraph::from_records(records);

    assert_eq!(graph.skipped_records(), 2);
    assert_eq!(graph.actor_count(), 1);
    assert_eq!(graph.movie_count(), 1);
    assert!(graph.actor_id("Bob").is_none());
}

#[test]
fn test_record_validation_names_the_missing_field() {
    let no_actor = CastRecord::new("", "First Picture", 2000, 7.0);
    assert_eq!(
        no_actor.validate(),
        Err(GraphError::MalformedRecord("actor"))
    );

    let no_movie = CastRecord::new("Alice", "", 2000, 7.0);
    assert_eq!(
        no_movie.validate(),
        Err(GraphError::MalformedRecord("movie"))
    );
}

#[test]
fn test_movie_facts_fixed_on_first_sight() {
    let records = vec![
        CastRecord::new("Alice", "First Picture", 2000, 7.0),
        CastRecord::new("Bob", "First Picture", 1987, 2.5),
    ];
    let graph = MovieGraph::from_records(records);

    let movie = graph.movie_id("First Picture").unwrap();
    assert_eq!(graph.movie_year(movie), 2000);
    assert_eq!(graph.movie_rating(movie), 7.0);
}

#[test]
fn test_rebuild_from_same_records_is_identical() {
    let first = MovieGraph::from_records(sample_records());
    let second = MovieGraph::from_records(sample_records());

    assert_eq!(first.actor_count(), second.actor_count());
    assert_eq!(first.movie_count(), second.movie_count());

    for actor in first.actor_ids() {
        let name = first.actor_name(actor);
        let other = second.actor_id(name).unwrap();

        let first_titles: Vec<&str> = first
            .appearances(actor)
            .iter()
            .map(|&movie| first.movie_title(movie))
            .collect();
        let second_titles: Vec<&str> = second
            .appearances(other)
            .iter()
            .map(|&movie| second.movie_title(movie))
            .collect();
        assert_eq!(first_titles, second_titles);
    }
}

#[test]
fn test_unknown_names_are_typed_failures() {
    let graph = MovieGraph::from_records(sample_records());

    assert!(graph.actor_id("Nobody").is_none());
    assert_eq!(
        graph.require_actor("Nobody"),
        Err(GraphError::UnknownActor("Nobody".to_string()))
    );
    assert_eq!(
        graph.require_movie("Lost Reel"),
        Err(GraphError::UnknownMovie("Lost Reel".to_string()))
    );
}

#[test]
fn test_connecting_movies_respects_filter() {
    use baconpath_core::MovieFilter;

    let records = vec![
        CastRecord::new("Alice", "Old One", 1980, 6.0),
        CastRecord::new("Bob", "Old One", 1980, 6.0),
        CastRecord::new("Alice", "New One", 2015, 8.0),
        CastRecord::new("Bob", "New One", 2015, 8.0),
    ];
    let graph = MovieGraph::from_records(records);
    let alice = graph.actor_id("Alice").unwrap();
    let bob = graph.actor_id("Bob").unwrap();

    let all = graph.connecting_movies(alice, bob, None);
    assert_eq!(all.len(), 2);

    let filter = MovieFilter::year_range(2010, 2020);
    let recent = graph.connecting_movies(alice, bob, Some(&filter));
    let titles: Vec<&str> = recent
        .iter()
        .map(|&movie| graph.movie_title(movie))
        .collect();
    assert_eq!(titles, vec!["New One"]);
}
