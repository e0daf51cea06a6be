use baconpath::cache::{read_scores, write_scores};
use baconpath_core::ActorScore;
use tempfile::TempDir;

fn sample_scores() -> Vec<ActorScore> {
    vec![
        ActorScore {
            actor: "Alice".to_string(),
            score: 1.25,
            reachable: 40,
            degenerate: false,
        },
        ActorScore {
            actor: "Bob".to_string(),
            score: 2.5,
            reachable: 3,
            degenerate: true,
        },
    ]
}

#[test]
fn test_round_trip_preserves_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");

    let scores = sample_scores();
    write_scores(&path, &scores).unwrap();
    let reloaded = read_scores(&path).unwrap();

    assert_eq!(reloaded, scores);
}

#[test]
fn test_write_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("scores.json");

    write_scores(&path, &sample_scores()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_missing_cache_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = read_scores(&dir.path().join("absent.json"));
    assert!(result.is_err());
}

#[test]
fn test_corrupt_cache_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, "not json at all").unwrap();

    let result = read_scores(&path);
    assert!(result.is_err());
}
