use crate::colors::ColorScheme;
use crate::utils::format_number;
use baconpath_core::{
    ActorPath, MovieFilter, MovieGraph, PathVertex, Recommendations, ScoreBoard, Standing,
};

pub fn display_load_stats(
    graph: &MovieGraph,
    unparsable_rows: usize,
    duration: f64,
    colors: &ColorScheme,
) {
    println!(
        "📦 Loaded {} actors and {} movies in {} sec",
        colors.number(&format_number(graph.actor_count())),
        colors.number(&format_number(graph.movie_count())),
        colors.number(&format!("{duration:.3}")),
    );

    let dropped = graph.skipped_records() + unparsable_rows;
    if dropped > 0 {
        println!(
            "🧹 Skipped {} malformed rows",
            colors.number(&format_number(dropped))
        );
    }
}

pub fn display_path_search_info(
    from: &str,
    to: &str,
    filter: Option<&MovieFilter>,
    colors: &ColorScheme,
) {
    println!(
        "🎬 Finding the shortest movie chain from {} to {}",
        colors.actor_name(&format!("\"{from}\"")),
        colors.actor_name(&format!("\"{to}\""))
    );
    describe_filter(filter, colors);
    println!("🔍 Searching...");
}

pub fn describe_filter(filter: Option<&MovieFilter>, colors: &ColorScheme) {
    let Some(filter) = filter else {
        return;
    };

    if filter.min_year.is_some() || filter.max_year.is_some() {
        println!(
            "⚡ Only using movies released {}",
            colors.number(&bounds_label(filter.min_year, filter.max_year))
        );
    }
    if filter.min_rating.is_some() || filter.max_rating.is_some() {
        println!(
            "⭐ Only using movies rated {}",
            colors.number(&bounds_label(filter.min_rating, filter.max_rating))
        );
    }
}

fn bounds_label<T: std::fmt::Display>(min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{min} to {max}"),
        (Some(min), None) => format!("{min} or later"),
        (None, Some(max)) => format!("up to {max}"),
        (None, None) => "without bounds".to_string(),
    }
}

pub fn display_path_result(
    result: Option<&ActorPath>,
    from: &str,
    to: &str,
    filtered: bool,
    quiet: bool,
    verbose: bool,
    duration: f64,
    colors: &ColorScheme,
) {
    if verbose {
        println!("\n---\n");
    }

    match result {
        Some(path) => {
            display_found_path(path, quiet, verbose, colors);
            if verbose {
                display_search_statistics(duration, colors);
            }
        }
        None => {
            println!(
                "{} {} and {}{}",
                colors.error("❌ No connection found between"),
                colors.actor_name(&format!("\"{from}\"")),
                colors.actor_name(&format!("\"{to}\"")),
                if filtered { " under the active filter" } else { "" }
            );
            if verbose {
                display_search_statistics(duration, colors);
            }
        }
    }
}

fn display_found_path(path: &ActorPath, quiet: bool, verbose: bool, colors: &ColorScheme) {
    if verbose {
        println!(
            "{} Connected in {} {}:\n",
            colors.success("✅"),
            colors.number(&path.hops.to_string()),
            if path.hops == 1 { "hop" } else { "hops" }
        );
    }

    // Show the alternating flow first
    let flow = path
        .vertices
        .iter()
        .map(|vertex| match vertex {
            PathVertex::Actor(name) => colors.actor_name(&format!("\"{name}\"")).to_string(),
            PathVertex::Movie(title) => colors.movie_title(&format!("[{title}]")).to_string(),
        })
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{flow}");

    // Detailed list with every movie connecting each consecutive pair
    if !quiet && !path.links.is_empty() {
        println!();
        for (step, link) in path.links.iter().enumerate() {
            let movies = link
                .movies
                .iter()
                .map(|title| colors.movie_title(title).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{:2} {} and {} shared: {}",
                colors.step_number(&format!("{}.", step + 1)),
                colors.actor_name(&format!("\"{}\"", link.from)),
                colors.actor_name(&format!("\"{}\"", link.to)),
                movies
            );
        }
    }
}

pub fn display_rankings(
    graph: &MovieGraph,
    board: &ScoreBoard,
    top: usize,
    colors: &ColorScheme,
) {
    if board.ranking().is_empty() {
        println!(
            "{}",
            colors.error("❌ No actors qualify for the ranking - every component is too small")
        );
        return;
    }

    println!("🏆 Most central actors (lower average distance wins):\n");
    for (position, (actor, score)) in board.top(top).iter().enumerate() {
        println!(
            "{:3} {} {}",
            colors.step_number(&format!("{}.", position + 1)),
            colors.actor_name(&format!("\"{}\"", graph.actor_name(*actor))),
            colors.number(&format!("{score:.3}"))
        );
    }
}

pub fn display_standing(name: &str, standing: &Standing, colors: &ColorScheme) {
    let Some(score) = standing.score else {
        println!(
            "{} {} has no co-star connections at all",
            colors.error("❌"),
            colors.actor_name(&format!("\"{name}\""))
        );
        return;
    };

    println!(
        "🎯 {} averages {} hops to {} reachable actors",
        colors.actor_name(&format!("\"{name}\"")),
        colors.number(&format!("{score:.3}")),
        colors.number(&format_number(standing.reachable))
    );

    match standing.rank {
        Some(rank) => println!(
            "🏅 Ranked {} overall",
            colors.number(&format!("#{rank}"))
        ),
        None => println!(
            "{}",
            colors.stats("📎 Component too small to rank - score is indicative only")
        ),
    }
}

pub fn display_recommendations(title: &str, recommendations: &Recommendations, colors: &ColorScheme) {
    match recommendations {
        Recommendations::NoCandidates => {
            println!(
                "{} {} shares no cast with any other movie",
                colors.error("❌"),
                colors.movie_title(&format!("\"{title}\""))
            );
        }
        Recommendations::Ranked(entries) => {
            if entries.is_empty() {
                println!("{}", colors.error("❌ Nothing to recommend"));
                return;
            }
            println!(
                "🍿 Movies sharing cast with {}:\n",
                colors.movie_title(&format!("\"{title}\""))
            );
            for (position, (candidate, score)) in entries.iter().enumerate() {
                println!(
                    "{:3} {} {}",
                    colors.step_number(&format!("{}.", position + 1)),
                    colors.movie_title(&format!("\"{candidate}\"")),
                    colors.number(&format!("{score:.3}"))
                );
            }
        }
        Recommendations::Filtered(entries) => {
            if entries.is_empty() {
                println!(
                    "{}",
                    colors.error("❌ Every cast-overlap candidate fails the filter")
                );
                return;
            }
            println!(
                "🍿 Movies sharing cast with {} (filtered):\n",
                colors.movie_title(&format!("\"{title}\""))
            );

            // Keyed by title; present best score first
            let mut ordered: Vec<_> = entries.iter().collect();
            ordered.sort_by(|(title_a, match_a), (title_b, match_b)| {
                match_b
                    .score
                    .partial_cmp(&match_a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| title_a.cmp(title_b))
            });

            for (position, (candidate, matched)) in ordered.iter().enumerate() {
                println!(
                    "{:3} {} {} ({}, rated {})",
                    colors.step_number(&format!("{}.", position + 1)),
                    colors.movie_title(&format!("\"{candidate}\"")),
                    colors.number(&format!("{:.3}", matched.score)),
                    matched.year,
                    matched.rating
                );
            }
        }
    }
}

fn display_search_statistics(duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Search took {} sec",
        colors.stats("📊"),
        colors.number(&format!("{duration:.3}"))
    );
}
