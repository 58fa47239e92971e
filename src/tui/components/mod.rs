//! UI components for the movie review client.
//!
//! Components are pure functions from screen state to text.

mod forms;
mod movie_detail;
mod movie_grid;
pub(crate) mod text;

pub use forms::{render_editor, render_login};
pub use movie_detail::{MovieDetailViewContext, NO_REVIEWS_MESSAGE, render_movie_detail};
pub use movie_grid::{MovieGridViewContext, NO_MOVIES_MESSAGE, render_movie_grid};
