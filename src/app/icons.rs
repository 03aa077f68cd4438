use leptos::{either::Either, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    ChevronRight,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    Cpu,
    Brain,
    Zap,
    Rocket,
    Database,
    Globe,
    Briefcase,
    GraduationCap,
    Code,
    Terminal,
}

impl Icon {
    /// Devicon class for brand marks, `None` for plain glyphs.
    fn devicon(self) -> Option<&'static str> {
        match self {
            Icon::Github => Some("devicon-github-plain"),
            Icon::Linkedin => Some("devicon-linkedin-plain"),
            _ => None,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Icon::Sparkles => "✨",
            Icon::ChevronRight => "›",
            Icon::Github | Icon::Linkedin => "",
            Icon::Mail => "✉",
            Icon::ExternalLink => "↗",
            Icon::Cpu => "⚙",
            Icon::Brain => "🧠",
            Icon::Zap => "⚡",
            Icon::Rocket => "🚀",
            Icon::Database => "🗄",
            Icon::Globe => "🌐",
            Icon::Briefcase => "💼",
            Icon::GraduationCap => "🎓",
            Icon::Code => "</>",
            Icon::Terminal => ">_",
        }
    }

    pub fn view(self, class: &'static str) -> impl IntoView {
        match self.devicon() {
            Some(devicon) => Either::Left(view! {
                <i class=format!("{devicon} {class}") aria-hidden="true"></i>
            }),
            None => Either::Right(view! {
                <span class=format!("inline-block leading-none {class}") aria-hidden="true">
                    {self.glyph()}
                </span>
            }),
        }
    }
}
