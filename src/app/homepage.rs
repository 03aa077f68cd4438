use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    footer::Footer,
    header::Header,
    hero::Hero,
    icons::Icon,
    section::Section,
    ui::{Badge, BadgeVariant, ButtonLink, ButtonVariant, Card, Pill},
};
use crate::{
    content::{Experience, Project, PORTFOLIO},
    nav::SectionId,
};

const DOMAINS: [(Icon, &str); 4] = [
    (Icon::Cpu, "Systems"),
    (Icon::Brain, "ML/AI"),
    (Icon::Database, "Data"),
    (Icon::Globe, "Web"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen w-full text-foreground bg-gradient-to-b from-background via-background/60 to-background relative overflow-x-clip">
            <Glows />
            <Header />
            <main class="w-full px-6">
                <Hero />
                <About />
                <ExperienceList />
                <Projects />
                <Skills />
                <Contact />
                <Footer />
            </main>
        </div>
    }
}

#[component]
fn Glows() -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 -z-10" aria-hidden="true">
            <div class="glow absolute -top-24 -left-32 h-80 w-80 rounded-full blur-3xl opacity-30 bg-cyan-500"></div>
            <div class="glow absolute top-1/3 -right-24 h-80 w-80 rounded-full blur-3xl opacity-30 bg-fuchsia-500"></div>
            <div class="glow absolute bottom-0 left-1/4 h-72 w-72 rounded-full blur-3xl opacity-20 bg-indigo-500"></div>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <Section id=SectionId::About icon=Icon::GraduationCap>
            <Card>
                <p class="text-muted-foreground">{PORTFOLIO.profile.about}</p>
                <ul class="mt-4 flex flex-wrap gap-2">
                    {PORTFOLIO
                        .tags
                        .coursework
                        .iter()
                        .copied()
                        .map(|course| {
                            view! {
                                <li data-course=course>
                                    <Badge class="border-white/10">{course}</Badge>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Card>
        </Section>
    }
}

#[component]
fn ExperienceList() -> impl IntoView {
    view! {
        <Section id=SectionId::Experience icon=Icon::Briefcase>
            <div class="grid md:grid-cols-2 gap-6">
                {PORTFOLIO
                    .experience
                    .iter()
                    .map(|exp| view! { <ExperienceCard exp /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ExperienceCard(exp: &'static Experience) -> impl IntoView {
    view! {
        <Card class="experience-card">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h3 class="font-medium leading-tight">{exp.role}</h3>
                    <div class="text-sm text-muted-foreground">{exp.org}</div>
                </div>
                <span class="text-xs text-muted-foreground whitespace-nowrap">{exp.time}</span>
            </div>
            <ul class="mt-3 space-y-2 text-sm text-muted-foreground">
                {exp
                    .points
                    .iter()
                    .copied()
                    .map(|p| {
                        view! {
                            <li class="flex gap-2">
                                <span class="mt-1">"•"</span>
                                <span>{p}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Card>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <Section id=SectionId::Projects icon=Icon::Code>
            <div class="grid md:grid-cols-2 gap-6">
                {PORTFOLIO
                    .projects
                    .iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <Card class="project-card group hover:border-white/20 transition">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h3 class="font-medium leading-tight">{project.title}</h3>
                    <p class="text-sm text-muted-foreground mt-1">{project.blurb}</p>
                </div>
                {project
                    .link
                    .map(|link| {
                        view! {
                            <a
                                class="project-link opacity-80 hover:opacity-100"
                                href=link
                                target="_blank"
                                rel="noreferrer"
                                aria-label=format!("{} source", project.title)
                            >
                                {Icon::ExternalLink.view("w-4 h-4")}
                            </a>
                        }
                    })}
            </div>
            <ul class="mt-3 space-y-1 text-sm text-muted-foreground">
                {project
                    .bullets
                    .iter()
                    .copied()
                    .map(|b| {
                        view! {
                            <li class="flex gap-2">
                                <span class="mt-1">"–"</span>
                                <span>{b}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="mt-4 flex flex-wrap gap-2">
                {project
                    .tech
                    .iter()
                    .copied()
                    .map(|t| {
                        view! {
                            <Badge variant=BadgeVariant::Outline class="border-white/10">
                                {t}
                            </Badge>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <Section id=SectionId::Skills icon=Icon::Terminal>
            <Card>
                <div class="grid md:grid-cols-2 gap-6">
                    <div>
                        <h3 class="text-sm font-medium mb-3">"Core Stack"</h3>
                        <ul class="flex flex-wrap gap-2">
                            {PORTFOLIO
                                .tags
                                .stack
                                .iter()
                                .copied()
                                .map(|skill| {
                                    view! {
                                        <li data-skill=skill>
                                            <Badge class="border-white/10">{skill}</Badge>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-sm font-medium mb-3">"Domains"</h3>
                        <div class="flex flex-wrap gap-2">
                            {DOMAINS
                                .into_iter()
                                .map(|(icon, label)| {
                                    view! { <Pill>{icon.view("w-3 h-3 mr-1")} {label}</Pill> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Card>
        </Section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let links = &PORTFOLIO.links;
    view! {
        <Section id=SectionId::Contact icon=Icon::Mail>
            <Card>
                <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                    <div>
                        <h3 class="font-medium">{PORTFOLIO.profile.contact_title}</h3>
                        <p class="text-sm text-muted-foreground">
                            {PORTFOLIO.profile.contact_blurb}
                        </p>
                    </div>
                    <div class="flex gap-2">
                        <ButtonLink href=links.email>
                            {Icon::Mail.view("w-4 h-4 mr-2")}
                            "Email"
                        </ButtonLink>
                        <ButtonLink href=links.linkedin variant=ButtonVariant::Outline external=true>
                            {Icon::Linkedin.view("w-4 h-4 mr-2")}
                            "LinkedIn"
                        </ButtonLink>
                        <ButtonLink href=links.github variant=ButtonVariant::Outline external=true>
                            {Icon::Github.view("w-4 h-4 mr-2")}
                            "GitHub"
                        </ButtonLink>
                    </div>
                </div>
            </Card>
        </Section>
    }
}
