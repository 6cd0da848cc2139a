use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{Entrance, Transition};
use crate::reveal::VisibilityLatch;

/// True from the first time `target` scrolls into view, forever after.
/// Always false during server rendering.
pub fn use_reveal_once(target: NodeRef<html::Section>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let latch = StoredValue::new(VisibilityLatch::default());
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        let visible = visible.get();
        latch.update_value(|latch| {
            if latch.observe(visible) {
                set_revealed.set(true);
            }
        });
    });

    revealed.into()
}

/// True once the component has mounted in the browser, for entrance
/// animations that play on load rather than on scroll.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

/// Wraps children in a block that transitions from `entrance`'s hidden
/// state to shown once `shown` turns true.
#[component]
pub fn Appear(
    #[prop(into)] shown: Signal<bool>,
    entrance: Entrance,
    transition: Transition,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = transition.style();
    view! {
        <div
            class=move || {
                format!("transform-gpu {} {}", entrance.classes(shown.get()), class)
            }
            style=style
        >
            {children()}
        </div>
    }
}
