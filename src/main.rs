use clap::Parser;
use dialoguer::{Input, Select};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tv_finder::display::html::render_page;
use tv_finder::display::{EpisodesTarget, ShowsTarget};
use tv_finder::{ProgressEvent, ShowFinder, TvMazeProvider, UiEvent};

/// Search TVMaze for TV shows and browse their episodes
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Run this search right away
    query: Option<String>,

    /// Write the current results as an HTML page to this file after every update
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Run the given query once, print the results and exit
    #[arg(long, requires = "query")]
    no_interactive: bool,
}

type Finder = ShowFinder<TvMazeProvider>;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Searching { query } => {
            println!("Searching TVMaze for '{}'...", query);
        }
        ProgressEvent::ShowsRendered { count } => {
            println!("Found {} show(s)\n", count);
        }
        ProgressEvent::FetchingEpisodes { show_id } => {
            println!("Fetching episodes for show #{}...", show_id);
        }
        ProgressEvent::EpisodesRendered { count, .. } => {
            println!("Found {} episode(s)", count);
        }
    }
}

fn print_shows(finder: &Finder) {
    let cards = finder.shows().cards();
    if cards.is_empty() {
        println!("No shows found.");
        return;
    }

    for (index, card) in cards.iter().enumerate() {
        println!("[{}] {} (#{})", index + 1, card.name, card.show_id);

        let summary = nanohtml2text::html2text(&card.summary_html);
        let summary = summary.trim();
        if !summary.is_empty() {
            println!("    {}", summary);
        }
        println!("    Image: {}", card.image);
    }
    println!();
}

fn print_episodes(finder: &Finder) {
    let episodes = finder.episodes();
    if !episodes.is_visible() {
        return;
    }

    println!("\n=== Episodes ===");
    for line in episodes.items() {
        println!("  {}", line);
    }
    println!();
}

fn write_html(finder: &Finder, path: &Path) {
    let page = match render_page(finder.shows(), finder.episodes()) {
        Ok(page) => page,
        Err(e) => {
            warn!(error = %e, "failed to render HTML page");
            eprintln!("Error: Could not render HTML page: {}", e);
            return;
        }
    };
    if let Err(e) = fs::write(path, page) {
        warn!(path = %path.display(), error = %e, "failed to write HTML page");
        eprintln!("Error: Could not write {}: {}", path.display(), e);
    }
}

/// Dispatches an event and prints whatever changed
///
/// Failures are reported and leave the display as it is.
fn run_event(finder: &mut Finder, event: UiEvent, html: Option<&Path>) -> bool {
    let is_search = matches!(event, UiEvent::SearchSubmitted { .. });

    match finder.dispatch(event) {
        Ok(false) => true,
        Ok(true) => {
            if is_search {
                print_shows(finder);
            } else {
                print_episodes(finder);
            }
            if let Some(path) = html {
                write_html(finder, path);
            }
            true
        }
        Err(e) => {
            eprintln!("\nError: {}", e);
            false
        }
    }
}

fn prompt_search(finder: &mut Finder, html: Option<&Path>) -> Result<(), dialoguer::Error> {
    let query: String = Input::new()
        .with_prompt("Search shows")
        .allow_empty(true)
        .interact_text()?;

    run_event(finder, UiEvent::SearchSubmitted { query }, html);
    Ok(())
}

fn interactive(finder: &mut Finder, html: Option<&Path>) -> Result<(), dialoguer::Error> {
    let mut needs_search = finder.shows().cards().is_empty();

    loop {
        if needs_search {
            prompt_search(finder, html)?;
        }

        let cards = finder.shows().cards();
        let mut choices: Vec<String> = cards
            .iter()
            .map(|card| format!("Display episodes: {}", card.name))
            .collect();
        let card_count = choices.len();
        choices.push("New search".to_string());
        choices.push("Quit".to_string());

        let selection = Select::new()
            .with_prompt("What next?")
            .items(&choices)
            .default(0)
            .interact()?;

        if selection < card_count {
            run_event(finder, UiEvent::EpisodesRequested { card: selection }, html);
            needs_search = false;
        } else if selection == card_count {
            needs_search = true;
        } else {
            return Ok(());
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let html = cli.html.as_deref();

    let mut finder = ShowFinder::with_provider(TvMazeProvider::new())
        .with_progress(handle_progress_event);

    if let Some(query) = cli.query {
        let succeeded = run_event(&mut finder, UiEvent::SearchSubmitted { query }, html);
        if cli.no_interactive {
            process::exit(if succeeded { 0 } else { 1 });
        }
    }

    if let Err(e) = interactive(&mut finder, html) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
