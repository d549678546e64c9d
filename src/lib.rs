//! TV Finder - Search TV shows by title and browse their episodes
//!
//! This library looks shows up on TVMaze, flattens the responses into simple
//! show and episode records and renders them into a display surface made of a
//! show card container and an episode area. The `ShowFinder` ties user actions
//! to those lookups.
//!
//! # Examples
//!
//! ```no_run
//! use tv_finder::{ShowFinder, TvMazeProvider, UiEvent};
//! use tv_finder::display::{EpisodesTarget, ShowsTarget};
//!
//! let mut finder = ShowFinder::with_provider(TvMazeProvider::new());
//!
//! finder.dispatch(UiEvent::SearchSubmitted { query: "batman".to_string() })?;
//! for card in finder.shows().cards() {
//!     println!("{} ({})", card.name, card.show_id);
//! }
//!
//! finder.dispatch(UiEvent::EpisodesRequested { card: 0 })?;
//! for line in finder.episodes().items() {
//!     println!("{}", line);
//! }
//! # Ok::<(), tv_finder::TvFinderError>(())
//! ```

pub mod display;
mod finder;
mod metadata_retrieval;

pub use finder::{ProgressCallback, ShowFinder, UiEvent};
pub use metadata_retrieval::{
    Episode, MISSING_IMAGE_URL, MetadataProvider, MetadataRetrievalError, Show, ShowId,
    TVMAZE_API_BASE, TvMazeProvider,
};

use thiserror::Error;

/// Progress event emitted while handling user actions
///
/// These events allow front-ends to give feedback while a lookup is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A show search request is about to be sent
    Searching { query: String },

    /// Search results replaced the show cards
    ShowsRendered { count: usize },

    /// An episode list request is about to be sent
    FetchingEpisodes { show_id: ShowId },

    /// The episode list was rendered and made visible
    EpisodesRendered { show_id: ShowId, count: usize },
}

/// Top-level error type for TV Finder operations
#[derive(Debug, Error)]
pub enum TvFinderError {
    /// Error during metadata retrieval
    #[error("Metadata retrieval error: {0}")]
    MetadataRetrieval(#[from] MetadataRetrievalError),

    /// An episode trigger referred to a card that is not displayed
    #[error("No show card at position {0}")]
    NoSuchCard(usize),
}
