/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use serde::Deserialize;

/// One entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show as embedded in search results.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    /// The name of the TV show
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Artwork, null when the show has no image
    pub image: Option<TvMazeImage>,
}

/// Image URLs in the sizes TVMaze offers.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub original: String,
}

/// A single episode from the `/shows/{id}/episodes` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number
    pub season: usize,
    /// Episode number within the season (null for specials)
    pub number: Option<usize>,
}
