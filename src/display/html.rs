//! HTML export of the display surface
//!
//! Produces a standalone page with the search form, one Bootstrap card per
//! show and the episode list, so a render can be inspected in a browser.
//! Names, image URLs and episode lines are escaped by the templates; summaries
//! are inserted verbatim since they already are upstream markup.

use super::{EpisodesTarget, ShowCard, ShowsTarget};
use askama::Template;

/// Template for a single show card.
#[derive(Template)]
#[template(path = "show_card.html")]
pub struct ShowCardTemplate<'a> {
    pub card: &'a ShowCard,
}

/// Template for the complete page.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub cards: &'a [ShowCard],
    pub episodes: &'a [String],
    /// Hidden areas keep their items, matching the in-memory state
    pub episodes_visible: bool,
}

/// Renders a single show card
pub fn render_show_card(card: &ShowCard) -> askama::Result<String> {
    ShowCardTemplate { card }.render()
}

/// Renders the complete page for the current display state
pub fn render_page<S, E>(shows: &S, episodes: &E) -> askama::Result<String>
where
    S: ShowsTarget + ?Sized,
    E: EpisodesTarget + ?Sized,
{
    PageTemplate {
        cards: shows.cards(),
        episodes: episodes.items(),
        episodes_visible: episodes.is_visible(),
    }
    .render()
}
