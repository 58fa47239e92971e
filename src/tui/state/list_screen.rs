//! Movie list screen state.
//!
//! The screen starts in [`ListPhase::Loading`] and asks for the movie
//! collection and the rating vocabulary together. Searches and rating
//! filters re-enter loading and replace the collection; each request bumps a
//! generation counter so a superseded response is discarded.

use crate::api::{ApiError, Movie, SearchField};

/// Sentinel rating option that removes the rating filter.
pub const ALL_RATINGS: &str = "All Ratings";

/// Lifecycle of the movie collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    /// A request is in flight.
    Loading,
    /// The collection is displayed.
    Ready,
    /// The last movie request failed.
    Error(String),
}

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFocus {
    /// Movie cards.
    Cards,
    /// Title search box.
    Search,
}

/// Data the screen needs fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    /// Movie collection and rating vocabulary together.
    Initial,
    /// Unfiltered movie collection.
    All,
    /// Movies matching `query` on `field`.
    Search {
        /// Trimmed search text.
        query: String,
        /// Field the query applies to.
        field: SearchField,
    },
}

/// One rendered movie entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    /// Movie title.
    pub title: String,
    /// Rating label, or `Not Rated`.
    pub rating: String,
    /// Detail route the card links to.
    pub link: String,
}

/// State of the movie list screen.
#[derive(Debug, Clone)]
pub struct ListScreen {
    phase: ListPhase,
    movies: Vec<Movie>,
    ratings: Vec<String>,
    rating_index: usize,
    search_text: String,
    focus: ListFocus,
    cursor: usize,
    generation: u64,
}

impl ListScreen {
    /// Creates the screen in its loading state with the initial request.
    #[must_use]
    pub fn open() -> (Self, ListRequest) {
        let screen = Self {
            phase: ListPhase::Loading,
            movies: Vec::new(),
            ratings: vec![ALL_RATINGS.to_owned()],
            rating_index: 0,
            search_text: String::new(),
            focus: ListFocus::Cards,
            cursor: 0,
            generation: 0,
        };
        (screen, ListRequest::Initial)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &ListPhase {
        &self.phase
    }

    /// Returns the generation of the most recent request.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the loaded movies.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Returns the rating options, always starting with [`ALL_RATINGS`].
    #[must_use]
    pub fn ratings(&self) -> &[String] {
        &self.ratings
    }

    /// Returns the selected rating option.
    #[must_use]
    pub fn selected_rating(&self) -> &str {
        self.ratings
            .get(self.rating_index)
            .map_or(ALL_RATINGS, String::as_str)
    }

    /// Returns the search box contents.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Returns which part of the screen has focus.
    #[must_use]
    pub const fn focus(&self) -> ListFocus {
        self.focus
    }

    /// Returns the selected card index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Applies the initial collection and vocabulary.
    ///
    /// A ratings failure leaves only [`ALL_RATINGS`]; a movies failure moves
    /// the screen to [`ListPhase::Error`]. Results for an older generation
    /// are ignored.
    pub fn apply_initial(
        &mut self,
        generation: u64,
        movies: Result<Vec<Movie>, ApiError>,
        ratings: Result<Vec<String>, ApiError>,
    ) {
        if generation != self.generation {
            return;
        }
        self.ratings = std::iter::once(ALL_RATINGS.to_owned())
            .chain(
                ratings
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|label| label != ALL_RATINGS),
            )
            .collect();
        self.rating_index = 0;
        self.apply_movies(movies);
    }

    /// Applies search, filter or reload results of `generation`.
    pub fn apply_results(&mut self, generation: u64, movies: Result<Vec<Movie>, ApiError>) {
        if generation == self.generation {
            self.apply_movies(movies);
        }
    }

    fn apply_movies(&mut self, movies: Result<Vec<Movie>, ApiError>) {
        match movies {
            Ok(loaded) => {
                self.movies = loaded;
                self.cursor = 0;
                self.phase = ListPhase::Ready;
            }
            Err(error) => {
                self.phase = ListPhase::Error(format!("Could not load movies: {error}"));
            }
        }
    }

    /// Searches by title; blank text reloads the unfiltered collection.
    pub fn search_by_title(&mut self, text: &str) -> ListRequest {
        let query = text.trim();
        self.rating_index = 0;
        if query.is_empty() {
            return self.begin(ListRequest::All);
        }
        self.begin(ListRequest::Search {
            query: query.to_owned(),
            field: SearchField::Title,
        })
    }

    /// Filters by rating; [`ALL_RATINGS`] reloads the unfiltered collection.
    pub fn filter_by_rating(&mut self, label: &str) -> ListRequest {
        if let Some(index) = self.ratings.iter().position(|known| known == label) {
            self.rating_index = index;
        }
        if label == ALL_RATINGS || label.trim().is_empty() {
            return self.begin(ListRequest::All);
        }
        self.begin(ListRequest::Search {
            query: label.to_owned(),
            field: SearchField::Rating,
        })
    }

    /// Selects the next rating option and filters by it.
    pub fn cycle_rating(&mut self) -> ListRequest {
        let count = self.ratings.len().max(1);
        let next = self.rating_index.saturating_add(1).checked_rem(count).unwrap_or(0);
        let label = self
            .ratings
            .get(next)
            .cloned()
            .unwrap_or_else(|| ALL_RATINGS.to_owned());
        self.filter_by_rating(&label)
    }

    fn begin(&mut self, request: ListRequest) -> ListRequest {
        self.generation = self.generation.wrapping_add(1);
        self.phase = ListPhase::Loading;
        request
    }

    /// Moves focus to the search box.
    pub const fn focus_search(&mut self) {
        self.focus = ListFocus::Search;
    }

    /// Returns focus to the cards without searching.
    pub const fn focus_cards(&mut self) {
        self.focus = ListFocus::Cards;
    }

    /// Appends a character to the search box.
    pub fn insert_char(&mut self, ch: char) {
        self.search_text.push(ch);
    }

    /// Removes the last character from the search box.
    pub fn delete_char(&mut self) {
        self.search_text.pop();
    }

    /// Submits the search box and returns focus to the cards.
    pub fn submit_search(&mut self) -> ListRequest {
        self.focus = ListFocus::Cards;
        let text = self.search_text.clone();
        self.search_by_title(&text)
    }

    /// Moves the selection up one card.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the selection down one card.
    pub fn cursor_down(&mut self) {
        if self.cursor.saturating_add(1) < self.movies.len() {
            self.cursor += 1;
        }
    }

    /// Returns the cards to render.
    #[must_use]
    pub fn cards(&self) -> Vec<MovieCard> {
        self.movies
            .iter()
            .map(|movie| MovieCard {
                title: movie.title.clone(),
                rating: movie.rating_label().to_owned(),
                link: movie.id.detail_route(),
            })
            .collect()
    }

    /// Returns the link of the selected card.
    #[must_use]
    pub fn selected_link(&self) -> Option<String> {
        self.movies
            .get(self.cursor)
            .map(|movie| movie.id.detail_route())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{ALL_RATINGS, ListFocus, ListPhase, ListRequest, ListScreen, MovieCard};
    use crate::api::models::test_support::movie;
    use crate::api::{ApiError, Movie, SearchField};

    fn rated(id: &str, title: &str, rating: &str) -> Movie {
        Movie {
            rated: Some(rating.to_owned()),
            ..movie(id, title)
        }
    }

    fn failure() -> ApiError {
        ApiError::NoResponse {
            message: "connection refused".to_owned(),
        }
    }

    #[fixture]
    fn ready_screen() -> ListScreen {
        let (mut screen, _) = ListScreen::open();
        screen.apply_initial(
            0,
            Ok(vec![rated("1", "Inception", "PG-13"), movie("2", "Unrated")]),
            Ok(vec!["G".to_owned(), "PG-13".to_owned()]),
        );
        screen
    }

    #[test]
    fn starts_loading_with_both_requests() {
        let (screen, request) = ListScreen::open();
        assert_eq!(screen.phase(), &ListPhase::Loading);
        assert_eq!(request, ListRequest::Initial);
        assert_eq!(screen.ratings(), [ALL_RATINGS.to_owned()]);
    }

    #[test]
    fn single_movie_renders_one_card_linking_to_detail() {
        let (mut screen, _) = ListScreen::open();
        screen.apply_initial(0, Ok(vec![rated("1", "Inception", "PG-13")]), Ok(Vec::new()));

        assert_eq!(
            screen.cards(),
            vec![MovieCard {
                title: "Inception".to_owned(),
                rating: "PG-13".to_owned(),
                link: "/movies/1".to_owned(),
            }]
        );
    }

    #[test]
    fn ratings_failure_is_not_fatal() {
        let (mut screen, _) = ListScreen::open();
        screen.apply_initial(0, Ok(vec![movie("1", "Inception")]), Err(failure()));

        assert_eq!(screen.phase(), &ListPhase::Ready);
        assert_eq!(screen.ratings(), [ALL_RATINGS.to_owned()]);
        assert_eq!(screen.cards().len(), 1);
    }

    #[test]
    fn movies_failure_moves_to_error() {
        let (mut screen, _) = ListScreen::open();
        screen.apply_initial(0, Err(failure()), Ok(vec!["G".to_owned()]));

        assert!(matches!(screen.phase(), ListPhase::Error(_)));
        assert_eq!(screen.ratings().len(), 2, "ratings still apply");
    }

    #[rstest]
    fn vocabulary_is_prefixed_with_sentinel(ready_screen: ListScreen) {
        assert_eq!(screen_labels(&ready_screen), vec![ALL_RATINGS, "G", "PG-13"]);
    }

    fn screen_labels(screen: &ListScreen) -> Vec<&str> {
        screen.ratings().iter().map(String::as_str).collect()
    }

    #[rstest]
    fn title_search_reenters_loading(mut ready_screen: ListScreen) {
        let request = ready_screen.search_by_title("  Matrix ");

        assert_eq!(
            request,
            ListRequest::Search {
                query: "Matrix".to_owned(),
                field: SearchField::Title,
            }
        );
        assert_eq!(ready_screen.phase(), &ListPhase::Loading);
        assert_eq!(ready_screen.generation(), 1);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn blank_title_search_reloads_everything(mut ready_screen: ListScreen, #[case] text: &str) {
        assert_eq!(ready_screen.search_by_title(text), ListRequest::All);
    }

    #[rstest]
    fn sentinel_rating_reloads_everything(mut ready_screen: ListScreen) {
        assert_eq!(ready_screen.filter_by_rating(ALL_RATINGS), ListRequest::All);
    }

    #[rstest]
    fn rating_filter_searches_rated_field(mut ready_screen: ListScreen) {
        let request = ready_screen.filter_by_rating("PG-13");

        assert_eq!(
            request,
            ListRequest::Search {
                query: "PG-13".to_owned(),
                field: SearchField::Rating,
            }
        );
        assert_eq!(ready_screen.selected_rating(), "PG-13");
    }

    #[rstest]
    fn cycling_wraps_back_to_sentinel(mut ready_screen: ListScreen) {
        ready_screen.cycle_rating();
        ready_screen.cycle_rating();
        assert_eq!(ready_screen.selected_rating(), "PG-13");

        assert_eq!(ready_screen.cycle_rating(), ListRequest::All);
        assert_eq!(ready_screen.selected_rating(), ALL_RATINGS);
    }

    #[rstest]
    fn results_replace_collection(mut ready_screen: ListScreen) {
        ready_screen.search_by_title("Matrix");
        ready_screen.apply_results(1, Ok(vec![movie("9", "The Matrix")]));

        assert_eq!(ready_screen.phase(), &ListPhase::Ready);
        assert_eq!(ready_screen.movies().len(), 1);
    }

    #[rstest]
    fn superseded_results_are_ignored(mut ready_screen: ListScreen) {
        ready_screen.search_by_title("Mat");
        ready_screen.search_by_title("Matrix");
        ready_screen.apply_results(1, Ok(vec![movie("8", "Matilda")]));

        assert_eq!(ready_screen.phase(), &ListPhase::Loading);
        assert_eq!(ready_screen.movies().len(), 2, "prior data kept");
    }

    #[rstest]
    fn search_failure_keeps_prior_movies(mut ready_screen: ListScreen) {
        ready_screen.search_by_title("Matrix");
        ready_screen.apply_results(1, Err(failure()));

        assert!(matches!(ready_screen.phase(), ListPhase::Error(_)));
        assert_eq!(ready_screen.movies().len(), 2);
    }

    #[rstest]
    fn typing_then_submitting_searches(mut ready_screen: ListScreen) {
        ready_screen.focus_search();
        for ch in "Up!".chars() {
            ready_screen.insert_char(ch);
        }
        ready_screen.delete_char();

        let request = ready_screen.submit_search();

        assert_eq!(ready_screen.focus(), ListFocus::Cards);
        assert_eq!(
            request,
            ListRequest::Search {
                query: "Up".to_owned(),
                field: SearchField::Title,
            }
        );
    }

    #[rstest]
    fn cursor_stays_within_cards(mut ready_screen: ListScreen) {
        ready_screen.cursor_up();
        assert_eq!(ready_screen.cursor(), 0);
        ready_screen.cursor_down();
        ready_screen.cursor_down();
        assert_eq!(ready_screen.cursor(), 1);
        assert_eq!(ready_screen.selected_link().as_deref(), Some("/movies/2"));
    }
}
