use baconpath::args::{Cli, Command, FilterArgs};
use clap::Parser;

#[test]
fn test_path_command_with_filter_flags() {
    let cli = Cli::try_parse_from([
        "baconpath",
        "--data",
        "movies.csv",
        "path",
        "Kevin Bacon",
        "Alfred Molina",
        "--min-year",
        "2000",
        "--max-rating",
        "8.5",
    ])
    .unwrap();

    match cli.command {
        Command::Path {
            actor1,
            actor2,
            filter,
            json,
        } => {
            assert_eq!(actor1, "Kevin Bacon");
            assert_eq!(actor2, "Alfred Molina");
            assert!(!json);

            let filter = filter.to_filter().expect("bounds were given");
            assert_eq!(filter.min_year, Some(2000));
            assert_eq!(filter.max_year, None);
            assert_eq!(filter.max_rating, Some(8.5));
        }
        _ => panic!("expected the path command"),
    }
}

#[test]
fn test_no_bounds_means_no_filter() {
    let args = FilterArgs::default();
    assert!(args.to_filter().is_none());
}

#[test]
fn test_rank_defaults() {
    let cli = Cli::try_parse_from(["baconpath", "--data", "movies.csv", "rank"]).unwrap();

    match cli.command {
        Command::Rank {
            top,
            min_reachable,
            cache,
            refresh,
        } => {
            assert_eq!(top, 20);
            assert_eq!(min_reachable, 10);
            assert!(cache.is_none());
            assert!(!refresh);
        }
        _ => panic!("expected the rank command"),
    }
}

#[test]
fn test_global_flags_can_follow_the_subcommand() {
    let cli = Cli::try_parse_from([
        "baconpath",
        "--data",
        "movies.csv",
        "recommend",
        "Footloose",
        "--count",
        "5",
        "--no-color",
        "--quiet",
    ])
    .unwrap();

    assert!(cli.no_color);
    assert!(cli.quiet);
    match cli.command {
        Command::Recommend { movie, count, .. } => {
            assert_eq!(movie, "Footloose");
            assert_eq!(count, 5);
        }
        _ => panic!("expected the recommend command"),
    }
}

#[test]
fn test_missing_dataset_flag_is_rejected() {
    let result = Cli::try_parse_from(["baconpath", "rank"]);
    assert!(result.is_err());
}
