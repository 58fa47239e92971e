//! Tests for movie and review normalisation.

use rstest::{fixture, rstest};
use serde_json::json;

use super::{ApiMovie, ApiMovieList, Movie, Review};
use crate::api::ids::UserId;

fn decode_movie(value: serde_json::Value) -> Option<Movie> {
    serde_json::from_value::<ApiMovie>(value)
        .expect("ApiMovie should deserialise")
        .into_movie()
}

#[fixture]
fn full_movie_json() -> serde_json::Value {
    json!({
        "_id": "573a1390f29313caabcd4135",
        "title": "Blacksmith Scene",
        "plot": "Three men hammer on an anvil.",
        "rated": "UNRATED",
        "poster": "https://example.invalid/poster.jpg",
        "runtime": 1,
        "genres": ["Short"],
        "year": 1893,
        "reviews": [
            {
                "_id": "r1",
                "user_id": "1234",
                "name": "jane",
                "review": "Historic",
                "date": "2021-03-01T10:00:00.000Z",
                "movie_id": "573a1390f29313caabcd4135"
            }
        ]
    })
}

#[rstest]
fn full_movie_converts_every_field(full_movie_json: serde_json::Value) {
    let movie = decode_movie(full_movie_json).expect("movie should convert");

    assert_eq!(movie.id.as_str(), "573a1390f29313caabcd4135");
    assert_eq!(movie.title, "Blacksmith Scene");
    assert_eq!(movie.plot.as_deref(), Some("Three men hammer on an anvil."));
    assert_eq!(movie.rated.as_deref(), Some("UNRATED"));
    assert_eq!(movie.runtime_minutes, Some(1));
    assert_eq!(movie.genres, vec!["Short".to_owned()]);
    assert_eq!(movie.year, Some(1893));

    let review = movie.reviews.first().expect("review should convert");
    assert_eq!(review.id.as_str(), "r1");
    assert_eq!(review.author(), "jane");
    assert_eq!(review.text, "Historic");
    assert_eq!(review.display_date(), "2021-03-01");
    assert_eq!(
        review.movie_id.as_ref().map(crate::api::MovieId::as_str),
        Some("573a1390f29313caabcd4135")
    );
}

#[test]
fn sparse_movie_is_fully_defaulted() {
    let movie = decode_movie(json!({ "_id": "7" })).expect("movie should convert");

    assert_eq!(movie.title, "");
    assert!(movie.plot.is_none());
    assert_eq!(movie.rating_label(), "Not Rated");
    assert!(movie.genres.is_empty());
    assert!(movie.reviews.is_empty());
}

#[rstest]
#[case::missing(json!({ "title": "No id" }))]
#[case::blank(json!({ "_id": "  ", "title": "Blank id" }))]
#[case::null(json!({ "_id": null, "title": "Null id" }))]
fn movies_without_identifier_are_dropped(#[case] value: serde_json::Value) {
    assert!(decode_movie(value).is_none());
}

#[test]
fn movie_list_drops_entries_lacking_identifier() {
    let list: ApiMovieList = serde_json::from_value(json!({
        "movies": [
            { "_id": "1", "title": "Inception" },
            { "title": "Ghost entry" },
            { "_id": { "$oid": "2" }, "title": "Memento" }
        ]
    }))
    .expect("list should deserialise");

    let titles: Vec<String> = list
        .into_movies()
        .into_iter()
        .map(|movie| movie.title)
        .collect();
    assert_eq!(titles, vec!["Inception".to_owned(), "Memento".to_owned()]);
}

#[rstest]
#[case::string_genre(json!({ "_id": "1", "genre": "Drama" }), vec!["Drama"])]
#[case::array_genres(json!({ "_id": "1", "genres": ["Drama", " ", "Crime"] }), vec!["Drama", "Crime"])]
fn genres_accept_string_or_array(#[case] value: serde_json::Value, #[case] expected: Vec<&str>) {
    let movie = decode_movie(value).expect("movie should convert");
    assert_eq!(movie.genres, expected);
}

#[rstest]
#[case::number(json!(2010), Some(2010))]
#[case::string_with_suffix(json!("1999è"), Some(1999))]
#[case::garbage(json!({"oops": true}), None)]
fn year_is_parsed_leniently(#[case] year: serde_json::Value, #[case] expected: Option<i32>) {
    let movie = decode_movie(json!({ "_id": "1", "year": year })).expect("movie should convert");
    assert_eq!(movie.year, expected);
}

#[test]
fn extended_json_review_date_is_unwrapped() {
    let movie = decode_movie(json!({
        "_id": "1",
        "reviews": [
            { "_id": "r1", "date": { "$date": "2020-01-02T00:00:00Z" } },
            { "review": "dropped: no id" }
        ]
    }))
    .expect("movie should convert");

    assert_eq!(movie.reviews.len(), 1);
    let review: &Review = movie.reviews.first().expect("review present");
    assert_eq!(review.display_date(), "2020-01-02");
    assert_eq!(review.author(), "Anonymous");
}

#[test]
fn ownership_requires_matching_user() {
    let movie = decode_movie(json!({
        "_id": "1",
        "reviews": [
            { "_id": "r1", "user_id": "alice" },
            { "_id": "r2" }
        ]
    }))
    .expect("movie should convert");
    let alice = UserId::new("alice").expect("user id");
    let bob = UserId::new("bob").expect("user id");

    let owned = movie.reviews.first().expect("first review");
    let orphan = movie.reviews.get(1).expect("second review");
    assert!(owned.is_owned_by(&alice));
    assert!(!owned.is_owned_by(&bob));
    assert!(!orphan.is_owned_by(&alice));
}
