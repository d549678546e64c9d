//! Renderers turning show and episode records into display content
//!
//! Both renderers clear their target first and then populate it, so rendering
//! the same records twice leaves the target in the same state.

use super::{EpisodesTarget, ShowCard, ShowsTarget};
use crate::metadata_retrieval::{Episode, Show};

/// Replaces the content of the show container with one card per show
pub fn populate_shows<T: ShowsTarget + ?Sized>(shows: &[Show], target: &mut T) {
    target.clear();

    for show in shows {
        target.append(ShowCard {
            show_id: show.id,
            image: show.image.clone(),
            name: show.name.clone(),
            summary_html: show.summary.clone(),
        });
    }
}

/// Replaces the episode list with one line per episode
///
/// Visibility of the area is left to the caller.
pub fn populate_episodes<T: EpisodesTarget + ?Sized>(episodes: &[Episode], target: &mut T) {
    target.clear();

    for episode in episodes {
        target.append(format_episode_line(episode));
    }
}

/// Formats an episode as `"{name} (Season {season}, Episode {number})"`
///
/// Specials have no episode number and are labelled as such.
pub fn format_episode_line(episode: &Episode) -> String {
    match episode.number {
        Some(number) => format!(
            "{} (Season {}, Episode {})",
            episode.name, episode.season, number
        ),
        None => format!("{} (Season {}, Special)", episode.name, episode.season),
    }
}
