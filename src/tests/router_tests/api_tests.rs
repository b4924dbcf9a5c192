use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_state, sample_movies};

#[test]
fn health_check_reports_healthy() {
    let state = make_state(Vec::new(), 12);

    let mut resp = handle(get("/api/health"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let body: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[test]
fn streaming_api_without_a_client_fails_in_band() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/api/streaming/Alpha"), &state).unwrap();
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["title"], "Alpha");
    assert!(body["services"].as_array().unwrap().is_empty());
    assert!(body["error"].is_string());
}

#[test]
fn streaming_api_decodes_percent_encoded_titles() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/api/streaming/Triangle%20of%20Sadness"), &state).unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(body["title"], "Triangle of Sadness");
}

#[test]
fn streaming_fragment_degrades_to_no_data() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/streaming/Alpha"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Not streaming"));
}

#[test]
fn poster_fragment_without_a_key_renders_the_placeholder() {
    let state = make_state(sample_movies(), 12);

    let mut resp = handle(get("/posters/tt0001"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("poster-placeholder"));
}

#[test]
fn invalid_percent_encoding_is_a_bad_request() {
    let state = make_state(sample_movies(), 12);

    assert!(matches!(
        handle(get("/streaming/%FF"), &state),
        Err(ServerError::BadRequest(_))
    ));
}
