use baconpath_core::MovieFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "baconpath")]
#[command(about = "Degrees of separation and recommendations over an actor-movie graph")]
pub struct Cli {
    /// Path to the actor-movie CSV dataset
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show load and search statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - only show the essential result lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the shortest chain of shared movies between two actors
    Path {
        /// First actor name
        actor1: String,

        /// Second actor name
        actor2: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Emit the path as JSON for downstream tooling
        #[arg(long)]
        json: bool,
    },

    /// Rank actors by average distance to the rest of the population
    Rank {
        /// Show the top N actors
        #[arg(short, long, value_name = "COUNT", default_value = "20")]
        top: usize,

        /// Flag actors reaching fewer than this many others as outliers
        #[arg(long, value_name = "COUNT", default_value = "10")]
        min_reachable: usize,

        /// Score cache file (defaults to the user cache directory)
        #[arg(long, value_name = "FILE")]
        cache: Option<PathBuf>,

        /// Recompute scores even when a cache is present
        #[arg(long)]
        refresh: bool,
    },

    /// Look up one actor's average score and rank position
    Score {
        /// Actor name
        actor: String,

        /// Flag actors reaching fewer than this many others as outliers
        #[arg(long, value_name = "COUNT", default_value = "10")]
        min_reachable: usize,

        /// Score cache file (defaults to the user cache directory)
        #[arg(long, value_name = "FILE")]
        cache: Option<PathBuf>,

        /// Recompute scores even when a cache is present
        #[arg(long)]
        refresh: bool,
    },

    /// Recommend movies that share cast with a query movie
    Recommend {
        /// Query movie title
        movie: String,

        /// Number of recommendations to return
        #[arg(short, long, value_name = "COUNT", default_value = "10")]
        count: usize,

        #[command(flatten)]
        filter: FilterArgs,

        /// Emit the recommendations as JSON for downstream tooling
        #[arg(long)]
        json: bool,
    },
}

/// Shared year/rating bounds, all optional and inclusive.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct FilterArgs {
    /// Only use movies released in or after this year
    #[arg(long, value_name = "YEAR")]
    pub min_year: Option<i32>,

    /// Only use movies released in or before this year
    #[arg(long, value_name = "YEAR")]
    pub max_year: Option<i32>,

    /// Only use movies rated at or above this value
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<f32>,

    /// Only use movies rated at or below this value
    #[arg(long, value_name = "RATING")]
    pub max_rating: Option<f32>,
}

impl FilterArgs {
    /// `None` when no bound was given, so unfiltered calls stay unfiltered.
    pub fn to_filter(self) -> Option<MovieFilter> {
        let filter = MovieFilter::new(self.min_year, self.max_year, self.min_rating, self.max_rating);
        (!filter.is_unrestricted()).then_some(filter)
    }
}
