use std::collections::HashMap;
use std::str::FromStr;

use astra::{Body, Request, ResponseBuilder};
use percent_encoding::percent_decode_str;
use serde_json::json;
use url::form_urlencoded;

use crate::catalog::movie::{
    ALL, DEFAULT_RATING_RANGE, DEFAULT_RUNTIME_RANGE, DEFAULT_YEAR_RANGE,
};
use crate::catalog::{filter::filter_movies, paginate, Catalog, MovieFilters};
use crate::enrichment::{JustWatchClient, OmdbClient};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates::components::{poster_image, poster_placeholder, streaming_badges};
use crate::templates::pages::{browse_page, BrowseVm};

/// Everything a request handler can reach: the immutable catalog and the
/// two optional enrichment clients.
pub struct AppState {
    pub catalog: Catalog,
    pub page_size: usize,
    pub omdb: Option<OmdbClient>,
    pub justwatch: Option<JustWatchClient>,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => browse(req.uri().query(), state),

        ("GET", "/static/main.css") => css_response(),

        ("GET", "/api/health") => json_response(200, &json!({ "status": "healthy" })),

        ("GET", path) if path.starts_with("/api/streaming/") => {
            let title = decode_segment(path.trim_start_matches("/api/streaming/"))?;
            streaming_api(&title, state)
        }

        ("GET", path) if path.starts_with("/streaming/") => {
            let title = decode_segment(path.trim_start_matches("/streaming/"))?;
            streaming_fragment(&title, state)
        }

        ("GET", path) if path.starts_with("/posters/") => {
            let title_id = decode_segment(path.trim_start_matches("/posters/"))?;
            poster_fragment(&title_id, state)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// The main catalog page: filter, clamp the requested page into range,
/// slice, render.
fn browse(query: Option<&str>, state: &AppState) -> ResultResp {
    let (filters, requested_page) = parse_browse_query(query);

    // A default filter set is the identity, no need to walk the records.
    let filtered = if filters.is_default() {
        state.catalog.movies.clone()
    } else {
        filter_movies(&state.catalog.movies, &filters)
    };
    let page_count = paginate::page_count(filtered.len(), state.page_size);

    // The paginator itself never clamps; a filter change that shrinks the
    // result set gets its page number pulled back into range here.
    let page = if page_count == 0 {
        1
    } else {
        requested_page.clamp(1, page_count)
    };
    let shown = paginate::page_of(&filtered, state.page_size, page);

    html_response(browse_page(&BrowseVm {
        filters: &filters,
        genres: &state.catalog.genres,
        directors: &state.catalog.directors,
        movies: shown,
        total_matches: filtered.len(),
        catalog_size: state.catalog.movies.len(),
        page,
        page_count,
        posters_enabled: state.omdb.is_some(),
    }))
}

/// JSON surface mirroring the original availability API: lookup errors are
/// reported in-band with `success: false`.
fn streaming_api(title: &str, state: &AppState) -> ResultResp {
    let Some(justwatch) = state.justwatch.as_ref() else {
        return json_response(
            500,
            &json!({
                "success": false,
                "title": title,
                "services": [],
                "error": "streaming lookup unavailable",
            }),
        );
    };

    match justwatch.offers_for_film(title) {
        Ok(services) if services.is_empty() => json_response(
            200,
            &json!({
                "success": true,
                "title": title,
                "services": [],
                "message": format!("No streaming services found for \"{title}\""),
            }),
        ),
        Ok(services) => json_response(
            200,
            &json!({
                "success": true,
                "title": title,
                "services": services,
            }),
        ),
        Err(e) => {
            log::warn!("streaming lookup failed for {title}: {e}");
            json_response(
                500,
                &json!({
                    "success": false,
                    "title": title,
                    "services": [],
                    "error": e.to_string(),
                }),
            )
        }
    }
}

/// htmx fragment with the streaming badges for one card. Always 200: a
/// failed lookup renders the quiet "no data" state.
fn streaming_fragment(title: &str, state: &AppState) -> ResultResp {
    let offers = match state.justwatch.as_ref() {
        Some(justwatch) => justwatch.offers_for_film(title).unwrap_or_else(|e| {
            log::warn!("streaming lookup failed for {title}: {e}");
            Vec::new()
        }),
        None => Vec::new(),
    };

    html_response(streaming_badges(&offers))
}

/// htmx fragment with the poster for one card. Missing key, OMDb miss and
/// lookup failure all degrade to the placeholder.
fn poster_fragment(title_id: &str, state: &AppState) -> ResultResp {
    let Some(omdb) = state.omdb.as_ref() else {
        return html_response(poster_placeholder());
    };

    let poster = match omdb.fetch_poster(title_id) {
        Ok(poster) => poster,
        Err(e) => {
            log::warn!("poster lookup failed for {title_id}: {e}");
            None
        }
    };

    let title = state
        .catalog
        .movies
        .iter()
        .find(|m| m.title_id == title_id)
        .map(|m| m.primary_title.as_str())
        .unwrap_or(title_id);

    match poster {
        Some(url) => html_response(poster_image(&url, title)),
        None => html_response(poster_placeholder()),
    }
}

/// Pulls the filter settings and requested page out of the query string.
/// Anything absent or unparseable falls back to its default.
fn parse_browse_query(query: Option<&str>) -> (MovieFilters, usize) {
    let params: HashMap<String, String> = match query {
        Some(q) => form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => HashMap::new(),
    };

    let get = |key: &str| params.get(key).map(String::as_str);
    let choice = |key: &str| {
        get(key)
            .filter(|v| !v.is_empty())
            .unwrap_or(ALL)
            .to_string()
    };

    let filters = MovieFilters {
        title: get("title").unwrap_or("").trim().to_string(),
        genre: choice("genre"),
        director: choice("director"),
        year_range: (
            parse_or(get("year_min"), DEFAULT_YEAR_RANGE.0),
            parse_or(get("year_max"), DEFAULT_YEAR_RANGE.1),
        ),
        rating_range: (
            parse_or(get("rating_min"), DEFAULT_RATING_RANGE.0),
            parse_or(get("rating_max"), DEFAULT_RATING_RANGE.1),
        ),
        runtime_range: (
            parse_or(get("runtime_min"), DEFAULT_RUNTIME_RANGE.0),
            parse_or(get("runtime_max"), DEFAULT_RUNTIME_RANGE.1),
        ),
    };
    let page = parse_or(get("page"), 1);

    (filters, page)
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|r| r.parse().ok()).unwrap_or(default)
}

fn decode_segment(segment: &str) -> Result<String, ServerError> {
    if segment.is_empty() {
        return Err(ServerError::NotFound);
    }
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| ServerError::BadRequest("invalid percent-encoding in path".into()))
}

fn css_response() -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/css; charset=utf-8")
        .body(Body::from(include_str!("../static/main.css").to_owned()))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
