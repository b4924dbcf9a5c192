use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_state, sample_movies};

#[test]
fn browse_renders_every_movie_on_the_page() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Alpha"));
    assert!(body.contains("Beta"));
    assert!(body.contains("Gamma"));
    assert!(body.contains("3 movies found"));
}

#[test]
fn browse_applies_filters_from_the_query_string() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/?genre=Drama&year_min=2005&year_max=2024"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Beta"));
    assert!(!body.contains(">Gamma<"));
    assert!(body.contains("1 movies found"));
}

#[test]
fn browse_title_search_is_case_insensitive() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/?title=ALP"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Alpha"));
    assert!(body.contains("1 movies found"));
}

#[test]
fn browse_paginates_and_clamps_out_of_range_pages() {
    let state = make_state(sample_movies(), 1);

    // Page 2 of 3 holds exactly the second movie.
    let mut resp = handle(get("/?page=2"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains(">Beta<"));
    assert!(!body.contains(">Alpha<"));
    assert!(!body.contains(">Gamma<"));

    // A page past the end is pulled back to the last page, not left empty.
    let mut resp = handle(get("/?page=99"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains(">Gamma<"));
}

#[test]
fn browse_with_no_matches_shows_the_empty_state() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/?title=zzz-no-such-film"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("0 movies found"));
    assert!(body.contains("No movies found"));
}

#[test]
fn facet_selects_list_catalog_genres_and_directors() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/"), &state).unwrap();
    let body = body_string(&mut resp);

    for facet in ["Comedy", "Drama", "Thriller", "X", "Y"] {
        assert!(body.contains(&format!(">{facet}<")), "missing facet {facet}");
    }
}

#[test]
fn unknown_routes_are_not_found() {
    let state = make_state(sample_movies(), 12);

    assert!(matches!(
        handle(get("/no-such-page"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/posters/"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn stylesheet_is_served() {
    let state = make_state(Vec::new(), 12);

    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
}
