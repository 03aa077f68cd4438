mod footer;
mod header;
mod hero;
mod homepage;
mod icons;
mod reveal;
mod scroll;
mod section;
pub mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::PORTFOLIO, schema::person_json_ld_script};

pub use footer::{current_year, Footer};
pub use header::Header;
pub use homepage::HomePage;
pub use scroll::BrowserScroller;

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="build-time" content=BUILD_TIME />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script
                    type="application/ld+json"
                    inner_html=person_json_ld_script(&PORTFOLIO)
                ></script>
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let name = PORTFOLIO.profile.name;
    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=PORTFOLIO.profile.intro />
        <Meta name="theme-color" content="#0b0b12" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
