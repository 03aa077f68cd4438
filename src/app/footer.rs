use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::PORTFOLIO;

pub fn current_year() -> i32 {
    Utc::now().year()
}

#[component]
pub fn Footer(#[prop(optional)] year: Option<i32>) -> impl IntoView {
    let year = year.unwrap_or_else(current_year);
    view! {
        <footer class="py-16 text-center text-xs text-muted-foreground">
            "© "
            <span class="footer-year">{year}</span>
            " "
            {PORTFOLIO.profile.name}
            " · Built with Rust, Leptos, Axum, and Tailwind"
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_shows_given_year() {
        let html = view! { <Footer year=1999 /> }.to_html();
        assert!(html.contains(r#"class="footer-year""#));
        assert!(html.contains("1999"));
    }

    #[test]
    fn test_footer_defaults_to_current_year() {
        let html = view! { <Footer /> }.to_html();
        assert!(html.contains(&current_year().to_string()));
        assert!(html.contains("Ronav Jaiswal"));
    }
}
