//! Screen state machines.
//!
//! Each screen is plain state with methods that return the requests it
//! needs issued; the application shell turns those into async commands.

pub mod detail_screen;
pub mod editor_screen;
pub mod list_screen;
pub mod login_form;

pub use detail_screen::{DeleteRequest, DetailPhase, DetailScreen};
pub use editor_screen::{EditorPhase, EditorScreen, SubmitRequest};
pub use list_screen::{ALL_RATINGS, ListFocus, ListPhase, ListRequest, ListScreen, MovieCard};
pub use login_form::{LoginField, LoginForm};
