use leptos::prelude::*;

use super::{
    icons::Icon,
    scroll::BrowserScroller,
    ui::{Button, ButtonLink, ButtonVariant, Card, Pill},
};
use crate::{content::PORTFOLIO, nav::SectionId};

const FOCUS: [(Icon, &str); 4] = [
    (Icon::Cpu, "Systems"),
    (Icon::Brain, "ML / Vision"),
    (Icon::Zap, "Product"),
    (Icon::Rocket, "Startups"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let links = &PORTFOLIO.links;
    view! {
        <section class="hero-enter py-16 md:py-24 grid md:grid-cols-[1.2fr_0.8fr] gap-10 place-items-center">
            <div class="w-full max-w-4xl text-center">
                <h1 class="text-4xl md:text-6xl font-semibold leading-tight">
                    "Building "
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-fuchsia-500">
                        "robust systems"
                    </span> " &" <br class="hidden sm:block" />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-fuchsia-500 to-indigo-400">
                        "intelligent ML tools"
                    </span>
                </h1>
                <p class="mt-4 text-muted-foreground max-w-3xl mx-auto">
                    {PORTFOLIO.profile.intro}
                </p>

                <div class="mt-6 flex flex-wrap gap-3 justify-center">
                    <Button on:click=move |_| SectionId::Projects.activate(&BrowserScroller)>
                        {Icon::ChevronRight.view("w-4 h-4 mr-2")}
                        "See projects"
                    </Button>
                    <ButtonLink href=links.github variant=ButtonVariant::Outline external=true>
                        {Icon::Github.view("w-4 h-4 mr-2")}
                        "GitHub"
                    </ButtonLink>
                    <ButtonLink href=links.linkedin variant=ButtonVariant::Outline external=true>
                        {Icon::Linkedin.view("w-4 h-4 mr-2")}
                        "LinkedIn"
                    </ButtonLink>
                </div>

                <div class="mt-6 flex flex-wrap gap-2 justify-center">
                    {FOCUS
                        .into_iter()
                        .map(|(icon, label)| {
                            view! { <Pill>{icon.view("w-3 h-3 mr-1")} {label}</Pill> }
                        })
                        .collect_view()}
                </div>
            </div>
            <ProfileCard />
        </section>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let education = &PORTFOLIO.education;
    view! {
        <Card class="w-full max-w-md">
            <div class="aspect-video w-full rounded-xl bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900 border border-white/10 flex items-center justify-center text-sm text-muted-foreground">
                <span>"Drop a headshot here"</span>
            </div>
            <div class="mt-5 grid grid-cols-2 gap-2 text-sm">
                <div class="rounded-lg border border-white/10 p-3">
                    <div class="text-xs text-muted-foreground">"Education"</div>
                    <div class="font-medium">{education.school}</div>
                    <div class="text-xs">{education.degree}</div>
                </div>
                <div class="rounded-lg border border-white/10 p-3">
                    <div class="text-xs text-muted-foreground">"Graduation"</div>
                    <div class="font-medium">{education.grad}</div>
                    <div class="text-xs">{education.location}</div>
                </div>
            </div>
            <div class="mt-4 flex gap-2">
                <ButtonLink href=PORTFOLIO.links.email>
                    {Icon::Mail.view("w-4 h-4 mr-2")}
                    "Contact"
                </ButtonLink>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_two_column_grid() {
        let html = Owner::new().with(|| view! { <Hero /> }.to_html());
        assert!(html.contains("md:grid-cols-[1.2fr_0.8fr]"));
        assert!(!html.contains("1.2fr,0.8fr"));
        assert!(html.contains("See projects"));
        assert!(html.contains("Carnegie Mellon University"));
    }
}
