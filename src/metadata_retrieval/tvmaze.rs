/// TVMaze metadata provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult, TvMazeShow};
use super::{
    Episode, MISSING_IMAGE_URL, MetadataProvider, MetadataRetrievalError, Show, ShowId,
};
use reqwest::StatusCode;
use reqwest::blocking::{RequestBuilder, Response};
use tracing::{debug, info, warn};

/// Base URL of the public TVMaze API.
pub const TVMAZE_API_BASE: &str = "https://api.tvmaze.com";

/// Metadata provider for the TVMaze API.
///
/// This provider searches shows through `/search/shows` and lists episodes
/// through `/shows/{id}/episodes`. Every call issues exactly one request.
pub struct TvMazeProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Default for TvMazeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TvMazeProvider {
    /// Creates a new TVMaze provider instance.
    pub fn new() -> Self {
        Self::with_base_url(TVMAZE_API_BASE)
    }

    /// Creates a provider talking to a different host serving the TVMaze API.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Converts a TVMaze show to our internal Show structure.
    fn convert_show(tvmaze_show: TvMazeShow) -> Show {
        Show {
            id: tvmaze_show.id,
            name: tvmaze_show.name,
            summary: tvmaze_show.summary.unwrap_or_default(),
            image: tvmaze_show
                .image
                .map(|image| image.original)
                .unwrap_or_else(|| MISSING_IMAGE_URL.to_string()),
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Episode {
        Episode {
            id: tvmaze_episode.id,
            name: tvmaze_episode.name.unwrap_or_else(|| "Unknown".to_string()),
            season: tvmaze_episode.season,
            number: tvmaze_episode.number,
        }
    }

    /// Sends a request, mapping transport failures to a RequestError.
    fn send(request: RequestBuilder) -> Result<Response, MetadataRetrievalError> {
        request.send().map_err(|e| {
            warn!(error = %e, "TVMaze request failed");
            MetadataRetrievalError::RequestError(e.to_string())
        })
    }

    /// Turns any non-2xx status into a RequestError.
    fn ensure_success(response: Response) -> Result<Response, MetadataRetrievalError> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %response.url(), "TVMaze returned an error status");
            return Err(MetadataRetrievalError::RequestError(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }
        Ok(response)
    }
}

impl MetadataProvider for TvMazeProvider {
    fn search_shows(&self, query: &str) -> Result<Vec<Show>, MetadataRetrievalError> {
        let url = format!("{}/search/shows", self.base_url);
        debug!(%url, query, "searching shows");

        // The query is URL-encoded by reqwest
        let response = Self::send(self.client.get(&url).query(&[("q", query)]))?;
        let response = Self::ensure_success(response)?;

        let results: Vec<TvMazeSearchResult> = response
            .json()
            .map_err(|e| MetadataRetrievalError::ParseError(e.to_string()))?;

        let shows: Vec<Show> = results
            .into_iter()
            .map(|result| Self::convert_show(result.show))
            .collect();

        info!(query, count = shows.len(), "show search complete");
        Ok(shows)
    }

    fn fetch_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>, MetadataRetrievalError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);
        debug!(%url, show_id, "fetching episodes");

        let response = Self::send(self.client.get(&url))?;

        // Check if the show exists
        if response.status() == StatusCode::NOT_FOUND {
            return Err(MetadataRetrievalError::ShowNotFound(show_id));
        }

        let response = Self::ensure_success(response)?;

        let tvmaze_episodes: Vec<TvMazeEpisode> = response
            .json()
            .map_err(|e| MetadataRetrievalError::ParseError(e.to_string()))?;

        let episodes: Vec<Episode> = tvmaze_episodes
            .into_iter()
            .map(Self::convert_episode)
            .collect();

        info!(show_id, count = episodes.len(), "episode lookup complete");
        Ok(episodes)
    }
}
