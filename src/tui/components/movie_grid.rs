//! Movie list rendering: search box, rating filter and movie cards.

use crate::tui::state::{ListFocus, ListPhase, ListScreen};

use super::text::truncate_with_ellipsis;

/// Shown when the collection is empty.
pub const NO_MOVIES_MESSAGE: &str = "No movies found.";

/// Context for rendering the movie list.
#[derive(Debug, Clone, Copy)]
pub struct MovieGridViewContext<'a> {
    /// Screen state to render.
    pub screen: &'a ListScreen,
    /// Maximum line width in columns.
    pub max_width: usize,
    /// Maximum number of card lines.
    pub visible_height: usize,
}

/// Renders the movie list screen body.
#[must_use]
pub fn render_movie_grid(ctx: &MovieGridViewContext<'_>) -> String {
    let screen = ctx.screen;
    let mut output = String::new();

    let caret = if screen.focus() == ListFocus::Search { "_" } else { "" };
    output.push_str(&format!("Search title: [{}{caret}]\n", screen.search_text()));
    output.push_str(&render_rating_bar(screen));
    output.push('\n');

    // The error line shares the card window.
    let mut card_rows = ctx.visible_height;
    match screen.phase() {
        ListPhase::Loading => output.push_str("Loading movies...\n"),
        ListPhase::Error(message) => {
            output.push_str(message);
            output.push('\n');
            card_rows = card_rows.saturating_sub(1);
        }
        ListPhase::Ready => {}
    }

    if matches!(screen.phase(), ListPhase::Loading) {
        return output;
    }

    let cards = screen.cards();
    if cards.is_empty() {
        if matches!(screen.phase(), ListPhase::Ready) {
            output.push_str(NO_MOVIES_MESSAGE);
            output.push('\n');
        }
        return output;
    }

    let visible = card_rows.max(1);
    let start = screen.cursor().saturating_sub(visible.saturating_sub(1));
    for (index, card) in cards.iter().enumerate().skip(start).take(visible) {
        let prefix = if index == screen.cursor() { ">" } else { " " };
        let line = format!("{prefix} {} [{}] ({})", card.title, card.rating, card.link);
        output.push_str(&truncate_with_ellipsis(&line, ctx.max_width));
        output.push('\n');
    }

    output
}

fn render_rating_bar(screen: &ListScreen) -> String {
    let options: Vec<String> = screen
        .ratings()
        .iter()
        .map(|label| {
            if label == screen.selected_rating() {
                format!("<{label}>")
            } else {
                label.clone()
            }
        })
        .collect();
    format!("Rating: {}\n", options.join(" "))
}

#[cfg(test)]
mod tests {
    use super::{MovieGridViewContext, NO_MOVIES_MESSAGE, render_movie_grid};
    use crate::api::models::test_support::movie;
    use crate::api::{ApiError, Movie};
    use crate::tui::state::ListScreen;

    fn render(screen: &ListScreen) -> String {
        render_movie_grid(&MovieGridViewContext {
            screen,
            max_width: 80,
            visible_height: 10,
        })
    }

    #[test]
    fn card_shows_title_rating_and_link() {
        let (mut screen, _) = ListScreen::open();
        let inception = Movie {
            rated: Some("PG-13".to_owned()),
            ..movie("1", "Inception")
        };
        screen.apply_initial(0, Ok(vec![inception]), Ok(vec!["PG-13".to_owned()]));

        let output = render(&screen);

        assert!(output.contains("> Inception [PG-13] (/movies/1)"), "{output}");
        assert!(output.contains("Rating: <All Ratings> PG-13"), "{output}");
    }

    #[test]
    fn empty_collection_says_so() {
        let (mut screen, _) = ListScreen::open();
        screen.apply_initial(0, Ok(Vec::new()), Ok(Vec::new()));
        assert!(render(&screen).contains(NO_MOVIES_MESSAGE));
    }

    #[test]
    fn missing_rating_renders_not_rated() {
        let (mut screen, _) = ListScreen::open();
        screen.apply_initial(0, Ok(vec![movie("2", "Unrated")]), Ok(Vec::new()));
        assert!(render(&screen).contains("Unrated [Not Rated]"));
    }

    #[test]
    fn loading_hides_cards() {
        let (screen, _) = ListScreen::open();
        let output = render(&screen);
        assert!(output.contains("Loading movies..."));
        assert!(!output.contains(NO_MOVIES_MESSAGE));
    }

    #[test]
    fn error_is_shown() {
        let (mut screen, _) = ListScreen::open();
        screen.apply_initial(
            0,
            Err(ApiError::NoResponse {
                message: "refused".to_owned(),
            }),
            Ok(Vec::new()),
        );
        assert!(render(&screen).contains("Could not load movies"));
    }

    #[test]
    fn error_line_shares_the_card_window() {
        let (mut screen, _) = ListScreen::open();
        let movies = (1..=5)
            .map(|n| movie(&n.to_string(), &format!("Movie {n}")))
            .collect();
        screen.apply_initial(0, Ok(movies), Ok(Vec::new()));
        let generation = screen.generation();
        screen.apply_results(
            generation,
            Err(ApiError::NoResponse {
                message: "refused".to_owned(),
            }),
        );

        let output = render_movie_grid(&MovieGridViewContext {
            screen: &screen,
            max_width: 80,
            visible_height: 3,
        });

        // Search, rating bar and spacer, then the error and two cards.
        assert_eq!(output.lines().count(), 6, "{output}");
        assert!(output.contains("Could not load movies"), "{output}");
        assert!(output.contains("> Movie 1"), "{output}");
        assert!(!output.contains("Movie 3"), "{output}");
    }
}
