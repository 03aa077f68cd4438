use leptos::prelude::*;

use super::{icons::Icon, scroll::BrowserScroller};
use crate::{content::PORTFOLIO, nav::SectionId};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 backdrop-blur supports-[backdrop-filter]:bg-background/60 border-b border-white/10">
            <div class="w-full px-6 py-3 flex items-center justify-between">
                <div class="flex items-center gap-2 font-semibold tracking-tight">
                    {Icon::Sparkles.view("h-5 w-5")}
                    " "
                    {PORTFOLIO.profile.brand}
                </div>
                <nav class="hidden md:flex items-center gap-6 text-sm text-muted-foreground">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| view! { <NavButton section /> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
fn NavButton(section: SectionId) -> impl IntoView {
    view! {
        <button
            type="button"
            class="hover:text-foreground"
            data-target=section.anchor()
            on:click=move |_| section.activate(&BrowserScroller)
        >
            {section.title()}
        </button>
    }
}
