//! Display surface module
//!
//! This module models the two regions the finder renders into: the show card
//! container and the (initially hidden) episode area. Renderers only talk to
//! the `ShowsTarget` and `EpisodesTarget` traits, so any front-end can supply
//! its own targets. The in-memory `ShowsList` and `EpisodesArea` are used by
//! the CLI and by tests.

pub mod html;
mod render;

pub use render::{format_episode_line, populate_episodes, populate_shows};

use crate::metadata_retrieval::ShowId;

/// A rendered show card
///
/// The `show_id` plays the role of the card's data attribute: it is read back
/// from the card whenever its episode trigger is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    /// Identifier of the show this card represents
    pub show_id: ShowId,
    /// Artwork URL (or the missing-image placeholder)
    pub image: String,
    /// The show title
    pub name: String,
    /// Summary markup, kept exactly as received
    pub summary_html: String,
}

/// Container receiving show cards
pub trait ShowsTarget {
    /// Removes every card
    fn clear(&mut self);

    /// Appends a card after the existing ones
    fn append(&mut self, card: ShowCard);

    /// All cards in display order
    fn cards(&self) -> &[ShowCard];

    /// The card at the given position, if any
    fn card(&self, index: usize) -> Option<&ShowCard> {
        self.cards().get(index)
    }
}

/// Area holding the episode list, which can be shown or hidden as a whole
pub trait EpisodesTarget {
    /// Removes every list item
    fn clear(&mut self);

    /// Appends a list item
    fn append(&mut self, line: String);

    /// All list items in display order
    fn items(&self) -> &[String];

    /// Makes the area visible
    fn show(&mut self);

    /// Hides the area without touching its items
    fn hide(&mut self);

    /// Whether the area is currently visible
    fn is_visible(&self) -> bool;
}

/// In-memory show card container
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShowsList {
    cards: Vec<ShowCard>,
}

impl ShowsList {
    /// Creates an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no cards are displayed
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of displayed cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

impl ShowsTarget for ShowsList {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append(&mut self, card: ShowCard) {
        self.cards.push(card);
    }

    fn cards(&self) -> &[ShowCard] {
        &self.cards
    }
}

/// In-memory episode area, hidden until the first episode lookup completes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EpisodesArea {
    items: Vec<String>,
    visible: bool,
}

impl EpisodesArea {
    /// Creates an empty, hidden episode area
    pub fn new() -> Self {
        Self::default()
    }
}

impl EpisodesTarget for EpisodesArea {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn append(&mut self, line: String) {
        self.items.push(line);
    }

    fn items(&self) -> &[String] {
        &self.items
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
