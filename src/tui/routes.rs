//! Navigation targets of the client.
//!
//! Routes mirror the paths of the original web client so a movie card can
//! display, and navigate by, the same link a browser would follow.

use crate::api::Review;

/// A screen the application can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/movies`
    MovieList,
    /// `/movies/:id`
    MovieDetail {
        /// Raw route parameter; validated by the detail screen.
        movie_id: String,
    },
    /// `/movies/:id/review`
    ReviewEditor {
        /// Movie the review belongs to.
        movie_id: String,
        /// Review being edited; `None` authors a new one.
        existing: Option<Review>,
    },
    /// `/login`
    Login,
}

impl Route {
    /// Returns the path for display.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::MovieList => "/movies".to_owned(),
            Self::MovieDetail { movie_id } => format!("/movies/{movie_id}"),
            Self::ReviewEditor { movie_id, .. } => format!("/movies/{movie_id}/review"),
            Self::Login => "/login".to_owned(),
        }
    }

    /// Resolves a path into a route.
    ///
    /// `/` and the empty path map to the movie list. Editor routes resolved
    /// from a path never carry an existing review. Unknown paths yield
    /// `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        match segments.as_slice() {
            [] | ["movies"] => Some(Self::MovieList),
            ["login"] => Some(Self::Login),
            ["movies", id] => Some(Self::MovieDetail {
                movie_id: (*id).to_owned(),
            }),
            ["movies", id, "review"] => Some(Self::ReviewEditor {
                movie_id: (*id).to_owned(),
                existing: None,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Route;

    #[rstest]
    #[case::root("/", Route::MovieList)]
    #[case::list("/movies", Route::MovieList)]
    #[case::trailing_slash("/movies/", Route::MovieList)]
    #[case::login("/login", Route::Login)]
    #[case::detail("/movies/1", Route::MovieDetail { movie_id: "1".to_owned() })]
    #[case::editor(
        "/movies/1/review",
        Route::ReviewEditor { movie_id: "1".to_owned(), existing: None }
    )]
    fn paths_resolve_to_routes(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::from_path(path), Some(expected));
    }

    #[rstest]
    #[case::unknown("/actors")]
    #[case::too_deep("/movies/1/review/extra")]
    fn unknown_paths_do_not_resolve(#[case] path: &str) {
        assert_eq!(Route::from_path(path), None);
    }

    #[test]
    fn detail_path_round_trips() {
        let route = Route::MovieDetail {
            movie_id: "573a1390f29313caabcd4135".to_owned(),
        };
        assert_eq!(Route::from_path(&route.path()), Some(route));
    }
}
