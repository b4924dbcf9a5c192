use maud::{html, Markup};

use crate::enrichment::StreamingOffer;

/// Badge row for the streaming services a film is available on.
pub fn streaming_badges(offers: &[StreamingOffer]) -> Markup {
    if offers.is_empty() {
        return no_streaming_data();
    }

    html! {
        div class="streaming-badges" {
            @for offer in offers {
                a class="streaming-badge" href=(offer.offer_url) target="_blank" rel="noopener" {
                    img src=(offer.icon_url) alt=(offer.service_name) title=(offer.service_name);
                }
            }
        }
    }
}

/// Quiet degraded state: lookup failed or found nothing. Never an error page.
pub fn no_streaming_data() -> Markup {
    html! {
        span class="streaming-none" { "Not streaming" }
    }
}
