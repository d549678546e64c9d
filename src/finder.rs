//! Event wiring between user input, the lookup pipelines and the display
//!
//! A `ShowFinder` owns the metadata provider and both display targets. Front-ends
//! translate user actions into `UiEvent`s and hand them to `dispatch`; each event
//! is processed to completion before the call returns.

use crate::display::{
    EpisodesArea, EpisodesTarget, ShowsList, ShowsTarget, populate_episodes, populate_shows,
};
use crate::metadata_retrieval::MetadataProvider;
use crate::{ProgressEvent, TvFinderError};
use tracing::debug;

/// A user action the finder reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search form was submitted with the given query
    SearchSubmitted { query: String },

    /// The episode trigger of the card at this position was clicked
    EpisodesRequested { card: usize },
}

/// Callback receiving progress events
pub type ProgressCallback = Box<dyn FnMut(ProgressEvent)>;

/// Connects a metadata provider to a show container and an episode area
pub struct ShowFinder<P, S = ShowsList, E = EpisodesArea>
where
    P: MetadataProvider,
    S: ShowsTarget,
    E: EpisodesTarget,
{
    /// Source of show and episode records
    provider: P,
    /// Where show cards are rendered
    shows: S,
    /// Where episode lines are rendered
    episodes: E,
    /// Optional progress listener
    progress: Option<ProgressCallback>,
}

impl<P> ShowFinder<P>
where
    P: MetadataProvider,
{
    /// Creates a finder rendering into fresh in-memory targets
    pub fn with_provider(provider: P) -> Self {
        Self::new(provider, ShowsList::new(), EpisodesArea::new())
    }
}

impl<P, S, E> ShowFinder<P, S, E>
where
    P: MetadataProvider,
    S: ShowsTarget,
    E: EpisodesTarget,
{
    /// Creates a finder rendering into the given targets
    pub fn new(provider: P, shows: S, episodes: E) -> Self {
        Self {
            provider,
            shows,
            episodes,
            progress: None,
        }
    }

    /// Registers a closure called with progress events
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ProgressEvent) + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// The provider lookups go through
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The show card container
    pub fn shows(&self) -> &S {
        &self.shows
    }

    /// Mutable access to the show card container
    pub fn shows_mut(&mut self) -> &mut S {
        &mut self.shows
    }

    /// The episode area
    pub fn episodes(&self) -> &E {
        &self.episodes
    }

    /// Routes a user action to its handler
    ///
    /// Returns whether the action was acted upon. Empty searches are ignored.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<bool, TvFinderError> {
        debug!(?event, "dispatching ui event");
        match event {
            UiEvent::SearchSubmitted { query } => self.handle_search(&query),
            UiEvent::EpisodesRequested { card } => {
                self.handle_episodes_request(card)?;
                Ok(true)
            }
        }
    }

    /// Handles a search form submission
    ///
    /// An empty query is ignored entirely: no request is made and the display,
    /// including the episode area's visibility, stays as it is. Otherwise the
    /// episode area is hidden, the search runs and the show cards are replaced.
    /// On failure the cards from the previous search remain.
    pub fn handle_search(&mut self, query: &str) -> Result<bool, TvFinderError> {
        if query.is_empty() {
            return Ok(false);
        }

        self.episodes.hide();

        self.emit(ProgressEvent::Searching {
            query: query.to_string(),
        });
        let shows = self.provider.search_shows(query)?;

        populate_shows(&shows, &mut self.shows);
        self.emit(ProgressEvent::ShowsRendered { count: shows.len() });

        Ok(true)
    }

    /// Handles a click on the episode trigger of a show card
    ///
    /// The episode list is cleared first. The show identifier is read from the
    /// card at `card` at this moment, then the episodes are fetched, rendered
    /// and the episode area is made visible.
    pub fn handle_episodes_request(&mut self, card: usize) -> Result<(), TvFinderError> {
        self.episodes.clear();

        let show_id = self
            .shows
            .card(card)
            .map(|c| c.show_id)
            .ok_or(TvFinderError::NoSuchCard(card))?;

        self.emit(ProgressEvent::FetchingEpisodes { show_id });
        let episodes = self.provider.fetch_episodes(show_id)?;

        populate_episodes(&episodes, &mut self.episodes);
        self.episodes.show();
        self.emit(ProgressEvent::EpisodesRendered {
            show_id,
            count: episodes.len(),
        });

        Ok(())
    }

    fn emit(&mut self, event: ProgressEvent) {
        if let Some(callback) = self.progress.as_mut() {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ShowCard;
    use crate::metadata_retrieval::{
        Episode, MISSING_IMAGE_URL, MetadataRetrievalError, Show, ShowId,
    };
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// A request the fake provider received
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Search(String),
        Episodes(ShowId),
    }

    /// In-memory provider recording every request
    #[derive(Default)]
    struct FakeProvider {
        searches: HashMap<String, Vec<Show>>,
        episodes: HashMap<ShowId, Vec<Episode>>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeProvider {
        fn with_search(mut self, query: &str, shows: Vec<Show>) -> Self {
            self.searches.insert(query.to_string(), shows);
            self
        }

        fn with_episodes(mut self, show_id: ShowId, episodes: Vec<Episode>) -> Self {
            self.episodes.insert(show_id, episodes);
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl MetadataProvider for FakeProvider {
        fn search_shows(&self, query: &str) -> Result<Vec<Show>, MetadataRetrievalError> {
            self.calls.borrow_mut().push(Call::Search(query.to_string()));
            self.searches
                .get(query)
                .cloned()
                .ok_or_else(|| MetadataRetrievalError::RequestError("HTTP 500".to_string()))
        }

        fn fetch_episodes(
            &self,
            show_id: ShowId,
        ) -> Result<Vec<Episode>, MetadataRetrievalError> {
            self.calls.borrow_mut().push(Call::Episodes(show_id));
            self.episodes
                .get(&show_id)
                .cloned()
                .ok_or(MetadataRetrievalError::ShowNotFound(show_id))
        }
    }

    fn show(id: ShowId, name: &str, image: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary: String::new(),
            image: image.to_string(),
        }
    }

    fn pilot() -> Episode {
        Episode {
            id: 1,
            name: "Pilot".to_string(),
            season: 1,
            number: Some(1),
        }
    }

    fn batman_provider() -> FakeProvider {
        FakeProvider::default()
            .with_search(
                "batman",
                vec![
                    show(5, "Batman", "http://img/batman.jpg"),
                    show(8, "The Batman", MISSING_IMAGE_URL),
                ],
            )
            .with_episodes(5, vec![pilot()])
            .with_episodes(8, vec![])
    }

    #[test]
    fn test_search_renders_cards() {
        let mut finder = ShowFinder::with_provider(batman_provider());

        assert!(finder.handle_search("batman").unwrap());

        let cards = finder.shows().cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Batman");
        assert_eq!(cards[0].image, "http://img/batman.jpg");
        assert_eq!(cards[1].name, "The Batman");
        assert_eq!(cards[1].image, MISSING_IMAGE_URL);
        assert_eq!(
            finder.provider().calls(),
            vec![Call::Search("batman".to_string())]
        );
    }

    #[test]
    fn test_empty_query_is_ignored() {
        let mut finder = ShowFinder::with_provider(batman_provider());
        finder.handle_search("batman").unwrap();
        finder.handle_episodes_request(0).unwrap();
        let shows_before = finder.shows().clone();

        assert!(!finder.handle_search("").unwrap());

        assert_eq!(finder.shows(), &shows_before);
        assert!(finder.episodes().is_visible());
        assert_eq!(finder.provider().calls().len(), 2);
    }

    #[test]
    fn test_whitespace_query_is_searched() {
        let provider = batman_provider().with_search("   ", vec![]);
        let mut finder = ShowFinder::with_provider(provider);
        finder.handle_search("batman").unwrap();
        finder.handle_episodes_request(0).unwrap();
        assert!(finder.episodes().is_visible());

        assert!(finder.handle_search("   ").unwrap());

        assert_eq!(
            finder.provider().calls().last(),
            Some(&Call::Search("   ".to_string()))
        );
        assert!(!finder.episodes().is_visible());
        assert!(finder.shows().is_empty());
    }

    #[test]
    fn test_episode_request_renders_and_shows_area() {
        let mut finder = ShowFinder::with_provider(batman_provider());
        finder.handle_search("batman").unwrap();
        assert!(!finder.episodes().is_visible());

        finder.handle_episodes_request(0).unwrap();

        assert_eq!(
            finder.episodes().items(),
            &["Pilot (Season 1, Episode 1)".to_string()]
        );
        assert!(finder.episodes().is_visible());
        assert_eq!(finder.provider().calls()[1], Call::Episodes(5));
    }

    #[test]
    fn test_new_search_hides_episode_area() {
        let mut finder = ShowFinder::with_provider(batman_provider());
        finder.handle_search("batman").unwrap();
        finder.handle_episodes_request(0).unwrap();
        assert!(finder.episodes().is_visible());

        finder.handle_search("batman").unwrap();
        assert!(!finder.episodes().is_visible());

        // A second episode lookup does not hide the area first
        finder.handle_episodes_request(0).unwrap();
        finder.handle_episodes_request(1).unwrap();
        assert!(finder.episodes().is_visible());
        assert!(finder.episodes().items().is_empty());
    }

    #[test]
    fn test_episode_request_reads_id_from_clicked_card() {
        let provider = batman_provider().with_episodes(42, vec![pilot()]);
        let mut finder = ShowFinder::with_provider(provider);
        finder.handle_search("batman").unwrap();

        finder.handle_episodes_request(1).unwrap();

        // Replace the first card behind the finder's back; the click must use it
        finder.shows_mut().clear();
        finder.shows_mut().append(ShowCard {
            show_id: 42,
            image: MISSING_IMAGE_URL.to_string(),
            name: "Elsewhere".to_string(),
            summary_html: String::new(),
        });
        finder.handle_episodes_request(0).unwrap();

        assert_eq!(
            finder.provider().calls(),
            vec![
                Call::Search("batman".to_string()),
                Call::Episodes(8),
                Call::Episodes(42),
            ]
        );
    }

    #[test]
    fn test_failed_search_keeps_previous_cards() {
        let mut finder = ShowFinder::with_provider(batman_provider());
        finder.handle_search("batman").unwrap();
        finder.handle_episodes_request(0).unwrap();

        let result = finder.handle_search("unknown");

        assert!(matches!(
            result,
            Err(TvFinderError::MetadataRetrieval(
                MetadataRetrievalError::RequestError(_)
            ))
        ));
        assert_eq!(finder.shows().len(), 2);
        assert!(!finder.episodes().is_visible());
    }

    #[test]
    fn test_failed_episode_request_leaves_list_cleared() {
        let provider = FakeProvider::default().with_search("x", vec![show(7, "X", "")]);
        let mut finder = ShowFinder::with_provider(provider);
        finder.handle_search("x").unwrap();

        let result = finder.handle_episodes_request(0);

        assert!(matches!(
            result,
            Err(TvFinderError::MetadataRetrieval(
                MetadataRetrievalError::ShowNotFound(7)
            ))
        ));
        assert!(finder.episodes().items().is_empty());
        assert!(!finder.episodes().is_visible());
    }

    #[test]
    fn test_unknown_card() {
        let mut finder = ShowFinder::with_provider(batman_provider());
        finder.handle_search("batman").unwrap();

        assert!(matches!(
            finder.handle_episodes_request(2),
            Err(TvFinderError::NoSuchCard(2))
        ));
        assert_eq!(finder.provider().calls().len(), 1);
    }

    #[test]
    fn test_dispatch_and_progress_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut finder = ShowFinder::with_provider(batman_provider())
            .with_progress(move |event| sink.borrow_mut().push(event));

        assert!(!finder
            .dispatch(UiEvent::SearchSubmitted {
                query: String::new()
            })
            .unwrap());
        assert!(finder
            .dispatch(UiEvent::SearchSubmitted {
                query: "batman".to_string()
            })
            .unwrap());
        assert!(finder.dispatch(UiEvent::EpisodesRequested { card: 0 }).unwrap());

        let events = events.borrow();
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], ProgressEvent::Searching { query } if query == "batman"));
        assert!(matches!(events[1], ProgressEvent::ShowsRendered { count: 2 }));
        assert!(matches!(events[2], ProgressEvent::FetchingEpisodes { show_id: 5 }));
        assert!(matches!(
            events[3],
            ProgressEvent::EpisodesRendered {
                show_id: 5,
                count: 1
            }
        ));
    }
}
