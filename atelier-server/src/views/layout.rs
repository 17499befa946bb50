use maud::{DOCTYPE, Markup, html};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #faf8f5; color: #222; }
header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #222; }
header a { color: #fff; text-decoration: none; margin-left: 1rem; }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1.5rem; }
.card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.card img { width: 100%; border-radius: 4px; }
.error { color: #b00020; }
form { margin-bottom: 1.5rem; }
"#;

/// Shared page chrome. `signed_in` switches the navigation links.
pub fn page(title: &str, signed_in: bool, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Atelier" }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                header {
                    a href="/" { strong { "Atelier" } }
                    nav {
                        @if signed_in {
                            a href="/dashboard" { "Gallery" }
                            a href="/myart" { "My art" }
                            a href="/logout" { "Log out" }
                        } @else {
                            a href="/index" { "Log in" }
                        }
                    }
                }
                main { (body) }
            }
        }
    }
}
