use anyhow::Result;
use baconpath::app::BaconPathApp;
use baconpath::args::{Cli, Command, FilterArgs};
use baconpath::colors::ColorScheme;
use baconpath::search::NameLookup;
use baconpath::{display, scores};
use baconpath_core::{MovieGraph, get_recommendations, shortest_path};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let colors = ColorScheme::new(!cli.no_color);

    if let Err(error) = run(cli, &colors) {
        eprintln!("{} {error:#}", colors.error("❌ Error:"));
        std::process::exit(1);
    }
}

fn run(cli: Cli, colors: &ColorScheme) -> Result<()> {
    let app = BaconPathApp::new(cli.data)?;

    let load_timer = Instant::now();
    let (graph, unparsable_rows) = app.load_graph()?;
    if cli.verbose {
        display::display_load_stats(
            &graph,
            unparsable_rows,
            load_timer.elapsed().as_secs_f64(),
            colors,
        );
    }

    match cli.command {
        Command::Path {
            actor1,
            actor2,
            filter,
            json,
        } => run_path(
            &graph, &actor1, &actor2, filter, json, cli.quiet, cli.verbose, colors,
        ),
        Command::Rank {
            top,
            min_reachable,
            cache,
            refresh,
        } => run_rank(
            &app, &graph, top, min_reachable, cache, refresh, cli.quiet, colors,
        ),
        Command::Score {
            actor,
            min_reachable,
            cache,
            refresh,
        } => run_score(
            &app, &graph, &actor, min_reachable, cache, refresh, cli.quiet, colors,
        ),
        Command::Recommend {
            movie,
            count,
            filter,
            json,
        } => run_recommend(&graph, &movie, count, filter, json, colors),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_path(
    graph: &MovieGraph,
    actor1: &str,
    actor2: &str,
    filter_args: FilterArgs,
    json: bool,
    quiet: bool,
    verbose: bool,
    colors: &ColorScheme,
) -> Result<()> {
    let lookup = NameLookup::build(graph);
    let from = lookup.best_actor_match(actor1)?.to_string();
    let to = lookup.best_actor_match(actor2)?.to_string();
    let filter = filter_args.to_filter();

    if verbose && !json {
        display::display_path_search_info(&from, &to, filter.as_ref(), colors);
    }

    let search_timer = Instant::now();
    let result = shortest_path(graph, &from, &to, filter.as_ref())?;
    let duration = search_timer.elapsed().as_secs_f64();

    if json {
        match &result {
            Some(path) => println!("{}", serde_json::to_string_pretty(path)?),
            None => println!("null"),
        }
        return Ok(());
    }

    display::display_path_result(
        result.as_ref(),
        &from,
        &to,
        filter.is_some(),
        quiet,
        verbose,
        duration,
        colors,
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_rank(
    app: &BaconPathApp,
    graph: &MovieGraph,
    top: usize,
    min_reachable: usize,
    cache: Option<PathBuf>,
    refresh: bool,
    quiet: bool,
    colors: &ColorScheme,
) -> Result<()> {
    let board = scores::load_or_compute(app, graph, min_reachable, cache, refresh, colors, quiet)?;
    display::display_rankings(graph, &board, top, colors);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_score(
    app: &BaconPathApp,
    graph: &MovieGraph,
    actor: &str,
    min_reachable: usize,
    cache: Option<PathBuf>,
    refresh: bool,
    quiet: bool,
    colors: &ColorScheme,
) -> Result<()> {
    let lookup = NameLookup::build(graph);
    let name = lookup.best_actor_match(actor)?.to_string();

    let board = scores::load_or_compute(app, graph, min_reachable, cache, refresh, colors, quiet)?;
    let standing = board.standing(graph, &name)?;
    display::display_standing(&name, &standing, colors);
    Ok(())
}

fn run_recommend(
    graph: &MovieGraph,
    movie: &str,
    count: usize,
    filter_args: FilterArgs,
    json: bool,
    colors: &ColorScheme,
) -> Result<()> {
    let lookup = NameLookup::build(graph);
    let title = lookup.best_movie_match(movie)?.to_string();
    let filter = filter_args.to_filter();

    let recommendations = get_recommendations(graph, &title, count, filter.as_ref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    display::display_recommendations(&title, &recommendations, colors);
    Ok(())
}
