use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Secondary,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [
        ButtonVariant::Default,
        ButtonVariant::Outline,
        ButtonVariant::Secondary,
    ];

    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-foreground text-background hover:opacity-90",
            ButtonVariant::Outline => "border border-white/20 bg-transparent hover:bg-white/5",
            ButtonVariant::Secondary => "bg-white/10 hover:bg-white/20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-9 px-3 text-sm rounded-xl",
            ButtonSize::Md => "h-10 px-4 rounded-xl",
            ButtonSize::Lg => "h-12 px-5 text-base rounded-2xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 2] = [BadgeVariant::Secondary, BadgeVariant::Outline];

    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Secondary => "bg-white/10 text-foreground",
            BadgeVariant::Outline => "border border-white/15 text-foreground",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 transition focus:outline-none focus:ring-2 focus:ring-white/20";
const BADGE_BASE: &str = "inline-flex items-center rounded-full px-2.5 py-1 text-xs";
const PILL_BASE: &str = "inline-flex items-center gap-1 rounded-full border px-3 py-1 text-xs font-medium backdrop-blur bg-background/40 border-white/10";
const CARD_BASE: &str = "rounded-2xl border border-white/10 bg-background/50 backdrop-blur";

/// Joins class lists, skipping empty ones.
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cn(&[BUTTON_BASE, variant.class(), size.class(), extra])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_class(variant, size, &class)>
            {children()}
        </button>
    }
}

/// An anchor styled as a button. External links open in a new context.
#[component]
pub fn ButtonLink(
    href: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] external: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class=button_class(variant, size, "")
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
        >
            {children()}
        </a>
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <span class=cn(&[BADGE_BASE, variant.class(), &class])>{children()}</span> }
}

#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! { <span class=PILL_BASE>{children()}</span> }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=cn(&[CARD_BASE, &class])>
            <div class="p-6">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cn_skips_empty_parts() {
        assert_eq!(cn(&["a b", "", "  ", "c"]), "a b c");
    }

    #[test]
    fn test_button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        let class = button_class(ButtonVariant::Outline, ButtonSize::Lg, "w-full");
        assert!(class.starts_with(BUTTON_BASE));
        assert!(class.contains("border-white/20"));
        assert!(class.contains("h-12 px-5"));
        assert!(class.ends_with("w-full"));
    }

    #[test]
    fn test_every_button_combination() {
        let expected_variant = [
            (ButtonVariant::Default, "bg-foreground text-background hover:opacity-90"),
            (ButtonVariant::Outline, "border border-white/20 bg-transparent hover:bg-white/5"),
            (ButtonVariant::Secondary, "bg-white/10 hover:bg-white/20"),
        ];
        let expected_size = [
            (ButtonSize::Sm, "h-9 px-3 text-sm rounded-xl"),
            (ButtonSize::Md, "h-10 px-4 rounded-xl"),
            (ButtonSize::Lg, "h-12 px-5 text-base rounded-2xl"),
        ];
        assert_eq!(expected_variant.map(|(v, _)| v), ButtonVariant::ALL);
        assert_eq!(expected_size.map(|(s, _)| s), ButtonSize::ALL);

        for (variant, variant_class) in expected_variant {
            for (size, size_class) in expected_size {
                assert_eq!(
                    button_class(variant, size, ""),
                    format!("{BUTTON_BASE} {variant_class} {size_class}")
                );
                let html = view! {
                    <Button variant=variant size=size>
                        "Go"
                    </Button>
                }
                .to_html();
                assert!(html.contains(variant_class), "{variant:?}");
                assert!(html.contains(size_class), "{size:?}");
            }
        }
    }

    #[test]
    fn test_every_badge_variant() {
        let expected = [
            (BadgeVariant::Secondary, "bg-white/10 text-foreground"),
            (BadgeVariant::Outline, "border border-white/15 text-foreground"),
        ];
        assert_eq!(expected.map(|(v, _)| v), BadgeVariant::ALL);
        for (variant, class) in expected {
            assert_eq!(variant.class(), class);
            let html = view! { <Badge variant=variant>"Tag"</Badge> }.to_html();
            assert!(html.contains(&format!("{BADGE_BASE} {class}")), "{variant:?}");
        }
    }

    #[test]
    fn test_theme_declares_colour_tokens() {
        let css = include_str!("../../input.css");
        let theme = css
            .split("@theme {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .expect("input.css has an @theme block");
        for token in ["background", "foreground", "muted-foreground"] {
            assert!(theme.contains(&format!("--color-{token}:")), "{token}");
        }
        assert!(!css.contains("@apply"));
    }

    #[test]
    fn test_button_link_external_attrs() {
        let html = view! {
            <ButtonLink href="https://example.com" variant=ButtonVariant::Outline external=true>
                "Example"
            </ButtonLink>
        }
        .to_html();
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noreferrer""#));

        let html = view! { <ButtonLink href="mailto:a@b.co">"Mail"</ButtonLink> }.to_html();
        assert!(!html.contains("target="));
        assert!(html.contains(ButtonVariant::Default.class()));
    }

    #[test]
    fn test_badge_variants() {
        let html = view! { <Badge>"Rust"</Badge> }.to_html();
        assert!(html.contains(BadgeVariant::Secondary.class()));
        let html = view! {
            <Badge variant=BadgeVariant::Outline class="border-white/10">
                "Rust"
            </Badge>
        }
        .to_html();
        assert!(html.contains("border border-white/15 text-foreground border-white/10"));
        assert!(html.contains("Rust"));
    }
}
