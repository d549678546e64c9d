/// Data structures and traits for show and episode lookups.
///
/// This module provides the flattened show and episode records the display
/// layer works with, as well as the trait that abstracts the HTTP API those
/// records are fetched from.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::{TVMAZE_API_BASE, TvMazeProvider};

use thiserror::Error;

/// Image shown for shows that have no artwork upstream.
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Identifier of a show as assigned by the metadata provider.
pub type ShowId = u64;

/// Errors that can occur during metadata retrieval operations.
#[derive(Debug, Error)]
pub enum MetadataRetrievalError {
    /// Request to the metadata provider failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The provider does not know the requested show
    #[error("Show not found: {0}")]
    ShowNotFound(ShowId),
}

/// A show returned by a title search.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    /// Provider identifier, used to look up the episode list
    pub id: ShowId,
    /// The show title
    pub name: String,
    /// Summary as provided upstream; may contain HTML markup
    pub summary: String,
    /// Artwork URL, or [`MISSING_IMAGE_URL`] if the show has none
    pub image: String,
}

/// Represents a single episode of a show.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    /// Provider identifier of the episode
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season number this episode belongs to
    pub season: usize,
    /// The episode number within the season (None for specials)
    pub number: Option<usize>,
}

/// Trait for metadata providers that can search shows and list their episodes.
///
/// This is the only network capability the finder depends on, which lets
/// tests substitute an in-memory implementation.
pub trait MetadataProvider {
    /// Searches shows matching the given free-text query.
    ///
    /// Results are returned in the order the provider ranked them.
    fn search_shows(&self, query: &str) -> Result<Vec<Show>, MetadataRetrievalError>;

    /// Fetches the full episode list of a show.
    ///
    /// Episodes are returned in provider order, which is already sorted by
    /// season and episode number. No additional sorting is applied.
    fn fetch_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>, MetadataRetrievalError>;
}
