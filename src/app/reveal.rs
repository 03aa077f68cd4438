use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    /// Server output and anything the client hasn't touched: fully visible.
    Static,
    /// Hydrated and still below the fold.
    Pending,
    Revealed,
}

impl RevealState {
    fn advance(self, visible: bool) -> RevealState {
        match (self, visible) {
            (RevealState::Revealed, _) | (_, true) => RevealState::Revealed,
            (_, false) => RevealState::Pending,
        }
    }
}

/// Fades its children in the first time they scroll into view.
///
/// Only hydrated pages hide anything, so the content stays readable when the
/// client bundle never loads.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (state, set_state) = signal(RevealState::Static);

    Effect::new(move |_| {
        let seen = visible.get();
        set_state.update(|s| *s = s.advance(seen));
    });

    view! {
        <div
            node_ref=el
            class="reveal"
            class=("reveal-pending", move || state.get() == RevealState::Pending)
        >
            {children()}
        </div>
    }
}
