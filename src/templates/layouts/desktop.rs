use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, catalog_size: usize, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="topbar" {
                    h3 { "🎬 Film Finder" }
                    nav {
                        ul {
                            li { a href="/" { "Browse" } }
                        }
                    }
                    span class="chip" { (catalog_size) " movies" }
                }
                (content)
            }
        }
    }
}
