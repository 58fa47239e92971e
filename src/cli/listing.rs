//! One-shot listing mode: print every movie with its detail route.

use std::io::{self, Write};

use marquee::{ApiError, MarqueeConfig, Movie};

use super::build_service;

/// Fetches the collection and writes one line per movie to stdout.
///
/// # Errors
///
/// Returns the API error when the collection cannot be loaded, or
/// [`ApiError::Io`] when stdout cannot be written.
pub async fn run(config: &MarqueeConfig) -> Result<(), ApiError> {
    let movies = build_service(config)?.list_all().await?;
    write_listing(&mut io::stdout().lock(), &movies)
}

/// Writes `movies` as `Title [Rating] (/movies/<id>)` lines.
fn write_listing(out: &mut impl Write, movies: &[Movie]) -> Result<(), ApiError> {
    if movies.is_empty() {
        return writeln!(out, "No movies found.").map_err(|error| io_error(&error));
    }
    for movie in movies {
        writeln!(
            out,
            "{} [{}] ({})",
            movie.title,
            movie.rating_label(),
            movie.id.detail_route()
        )
        .map_err(|error| io_error(&error))?;
    }
    Ok(())
}

fn io_error(error: &io::Error) -> ApiError {
    ApiError::Io {
        message: error.to_string(),
    }
}
