use leptos::prelude::*;

use super::{icons::Icon, reveal::Reveal};
use crate::nav::SectionId;

/// A page section with a sticky label bar over its content.
#[component]
pub fn Section(
    id: SectionId,
    icon: Icon,
    /// Defaults to the section's display title.
    #[prop(optional)]
    title: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let title = title.unwrap_or(id.title());
    view! {
        <section id=id.anchor() class="relative scroll-mt-28">
            <div class="sticky top-14 -mx-6 z-10 backdrop-blur supports-[backdrop-filter]:bg-background/50">
                <div class="px-6 py-3">
                    <div class="flex items-center gap-2 text-muted-foreground text-sm tracking-widest uppercase">
                        {icon.view("w-4 h-4")}
                        <span>{title}</span>
                    </div>
                </div>
            </div>
            <Reveal>
                <div class="grid gap-6 pb-12">{children.map(|c| c())}</div>
            </Reveal>
        </section>
    }
}
