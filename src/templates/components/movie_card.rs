use maud::{html, Markup};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::catalog::Movie;

const MAX_GENRE_CHIPS: usize = 3;

/// One result card. The poster and the streaming badges are lazy htmx
/// fragments so a slow or failed lookup never delays the page itself.
pub fn movie_card(movie: &Movie, posters_enabled: bool) -> Markup {
    let genres = movie.genre_list();
    let title_seg = encode_segment(&movie.primary_title);
    let id_seg = encode_segment(&movie.title_id);

    html! {
        article class="movie-card" {
            @if posters_enabled {
                div class="poster-slot"
                    hx-get=(format!("/posters/{id_seg}"))
                    hx-trigger="load"
                    hx-swap="outerHTML"
                {
                    (poster_placeholder())
                }
            }

            h2 class="movie-title" { (movie.primary_title) }

            p class="movie-meta" {
                span class="rating" { "★ " (format!("{:.1}", movie.average_rating)) }
                " · " (movie.start_year)
                " · " (movie.runtime_minutes) " min"
            }
            p class="movie-director" { (movie.primary_name) }

            div class="genre-chips" {
                @for genre in genres.iter().take(MAX_GENRE_CHIPS) {
                    span class="chip" { (genre) }
                }
                @if genres.len() > MAX_GENRE_CHIPS {
                    span class="chip chip-more" { "+" (genres.len() - MAX_GENRE_CHIPS) }
                }
            }

            div class="streaming-slot"
                hx-get=(format!("/streaming/{title_seg}"))
                hx-trigger="load"
                hx-swap="outerHTML"
            {
                span class="streaming-loading" { "Checking availability…" }
            }
        }
    }
}

pub fn poster_image(url: &str, title: &str) -> Markup {
    html! {
        img class="poster" src=(url) alt=(format!("{title} poster")) loading="lazy";
    }
}

pub fn poster_placeholder() -> Markup {
    html! {
        div class="poster poster-placeholder" { "🎞" }
    }
}

fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}
