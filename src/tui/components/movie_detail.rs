//! Movie detail rendering with the review list.

use std::ops::Range;

use crate::api::{Movie, Review};
use crate::session::{Session, can_modify};
use crate::tui::state::{DetailPhase, DetailScreen};

use super::text::wrap_words;

/// Shown when a movie has no reviews.
pub const NO_REVIEWS_MESSAGE: &str = "No reviews yet.";

/// Context for rendering the detail screen.
#[derive(Debug, Clone, Copy)]
pub struct MovieDetailViewContext<'a> {
    /// Screen state to render.
    pub screen: &'a DetailScreen,
    /// Active session, used to mark reviews the user may change.
    pub session: Option<&'a Session>,
    /// Maximum line width in columns.
    pub max_width: usize,
    /// Maximum number of body lines.
    pub visible_height: usize,
}

/// Renders the detail screen body.
///
/// When the movie does not fit, the lines scroll so the selected review
/// stays in view. The notice always keeps its row.
#[must_use]
pub fn render_movie_detail(ctx: &MovieDetailViewContext<'_>) -> String {
    let screen = ctx.screen;
    let (lines, selected) = match screen.phase() {
        DetailPhase::Loading => (vec!["Loading movie...".to_owned()], None),
        DetailPhase::InvalidId => (vec!["Invalid movie id.".to_owned()], None),
        DetailPhase::FetchFailed(message) => (vec![message.clone()], None),
        DetailPhase::Ready(movie) => movie_lines(movie, ctx),
    };

    let notice_rows = usize::from(screen.notice().is_some());
    let rows = ctx.visible_height.saturating_sub(notice_rows).max(1);
    let start = selected.map_or(0, |span| window_start(&span, rows));

    let mut output = String::new();
    for line in lines.iter().skip(start).take(rows) {
        output.push_str(line);
        output.push('\n');
    }
    if let Some(notice) = screen.notice() {
        output.push_str(notice);
        output.push('\n');
    }
    output
}

/// First line of a `rows` tall window showing as much of `span` as fits,
/// starting with its header line.
fn window_start(span: &Range<usize>, rows: usize) -> usize {
    span.end.saturating_sub(rows).min(span.start)
}

/// Returns the movie's lines and the line span of the selected review.
fn movie_lines(
    movie: &Movie,
    ctx: &MovieDetailViewContext<'_>,
) -> (Vec<String>, Option<Range<usize>>) {
    let mut lines = vec![movie.title.clone(), render_facts(movie)];

    let poster = if movie.poster.is_some() {
        "Poster available"
    } else {
        "No poster"
    };
    lines.push(format!("[{poster}]"));

    if let Some(plot) = &movie.plot {
        lines.push(String::new());
        lines.extend(wrap_words(plot, ctx.max_width));
    }

    lines.push(String::new());
    lines.push("Reviews".to_owned());
    if movie.reviews.is_empty() {
        lines.push(NO_REVIEWS_MESSAGE.to_owned());
        return (lines, None);
    }

    let mut selected = None;
    for (index, review) in movie.reviews.iter().enumerate() {
        let is_selected = index == ctx.screen.cursor();
        let first = lines.len();
        lines.extend(review_lines(review, is_selected, ctx));
        if is_selected {
            selected = Some(first..lines.len());
        }
    }
    (lines, selected)
}

fn render_facts(movie: &Movie) -> String {
    let mut facts = vec![format!("Rating: {}", movie.rating_label())];
    if let Some(year) = movie.year {
        facts.push(format!("Year: {year}"));
    }
    if let Some(minutes) = movie.runtime_minutes {
        facts.push(format!("Runtime: {minutes} min"));
    }
    if !movie.genres.is_empty() {
        facts.push(format!("Genres: {}", movie.genres.join(", ")));
    }
    facts.join(" | ")
}

fn review_lines(
    review: &Review,
    selected: bool,
    ctx: &MovieDetailViewContext<'_>,
) -> Vec<String> {
    let prefix = if selected { ">" } else { " " };
    let owned = if can_modify(ctx.session, review) {
        " (yours)"
    } else {
        ""
    };
    let header = format!(
        "{prefix} {} reviewed on {}{owned}",
        review.author(),
        review.display_date()
    );
    std::iter::once(header)
        .chain(
            wrap_words(&review.text, ctx.max_width.saturating_sub(4))
                .into_iter()
                .map(|line| format!("    {line}")),
        )
        .collect()
}
