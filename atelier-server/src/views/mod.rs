//! Server-rendered HTML pages.

mod layout;

use axum::{http::StatusCode, response::Html};
use maud::{Markup, html};

use atelier_core::domain::Artwork;

use layout::page;

fn render(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

fn artwork_card(artwork: &Artwork, buyable: bool) -> Markup {
    html! {
        article.card {
            @if let Some(url) = &artwork.image_url {
                img src=(url) alt=(artwork.title);
            }
            h3 { (artwork.title) }
            p.price { "$" (artwork.price) }
            @if buyable {
                a.buy href={ "/buy/" (artwork.id) } { "Buy" }
            }
        }
    }
}

/// Anonymous landing page.
pub fn landing() -> Html<String> {
    render(page(
        "Welcome",
        false,
        html! {
            h1 { "Collect digital art" }
            p { "Browse the gallery and make a piece yours." }
            p { a href="/index" { "Log in or create an account" } }
        },
    ))
}

/// Login and registration forms, optionally with an error from the last
/// submission.
pub fn login_page(error: Option<&str>) -> Html<String> {
    render(page(
        "Log in",
        false,
        html! {
            @if let Some(error) = error {
                p.error role="alert" { (error) }
            }
            h2 { "Log in" }
            form method="post" action="/login" {
                input type="text" name="username" placeholder="Username" required;
                input type="password" name="password" placeholder="Password" required;
                button type="submit" { "Log in" }
            }
            h2 { "Register" }
            form method="post" action="/register" {
                input type="text" name="username" placeholder="Username" maxlength="25" required;
                input type="password" name="password" placeholder="Password" required;
                button type="submit" { "Register" }
            }
        },
    ))
}

pub fn dashboard(artworks: &[Artwork]) -> Html<String> {
    render(page(
        "Gallery",
        true,
        html! {
            h1 { "Gallery" }
            @if artworks.is_empty() {
                p { "No artworks yet." }
            } @else {
                section.grid {
                    @for artwork in artworks {
                        (artwork_card(artwork, true))
                    }
                }
            }
        },
    ))
}

pub fn my_art(greeting: &str, username: &str, artworks: &[Artwork]) -> Html<String> {
    render(page(
        "My art",
        true,
        html! {
            h1 { (greeting) (username) }
            @if artworks.is_empty() {
                p { "You don't own any artworks yet. " a href="/dashboard" { "Visit the gallery" } }
            } @else {
                section.grid {
                    @for artwork in artworks {
                        (artwork_card(artwork, false))
                    }
                }
            }
        },
    ))
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    render(page(
        status.canonical_reason().unwrap_or("Error"),
        false,
        html! {
            h1 { (status.as_u16()) }
            p.error { (message) }
            p { a href="/" { "Back to Atelier" } }
        },
    ))
}
