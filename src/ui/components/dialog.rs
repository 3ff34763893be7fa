//! Modal dialog component
//!
//! The dialog owns its open state. The trigger and the dialog content keep
//! their clicks to themselves; the overlay does not, so an outside click closes
//! the dialog and then reaches whatever contains it.

use dioxus::prelude::*;

#[component]
pub fn Dialog(
    /// Element that opens the dialog when clicked
    trigger: Element,
    /// Called with `true` when the dialog opens and `false` when it closes
    on_open_change: EventHandler<bool>,
    #[props(default = "max-w-xl".to_string())] content_class: String,
    children: Element,
) -> Element {
    let mut open = use_signal(|| false);

    let mut set_open = move |value: bool| {
        if open() != value {
            open.set(value);
            on_open_change.call(value);
        }
    };

    let expanded = open();

    rsx! {
        span {
            class: "inline-block",
            aria_haspopup: "dialog",
            aria_expanded: "{expanded}",
            onclick: move |evt| {
                evt.stop_propagation();
                set_open(true);
            },
            {trigger}
        }

        if expanded {
            // Overlay: the click bubbles on after closing
            div {
                class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-50 flex items-center justify-center p-4 cursor-default",
                tabindex: "-1",
                onmounted: move |evt| async move {
                    let _ = evt.set_focus(true).await;
                },
                onclick: move |_| set_open(false),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        set_open(false);
                    }
                },

                div {
                    role: "dialog",
                    aria_modal: "true",
                    class: "relative w-full {content_class} bg-[var(--bg-secondary)] rounded-xl border border-[var(--border-subtle)] p-6 shadow-xl animate-scale-in",
                    onclick: move |evt| evt.stop_propagation(),

                    button {
                        class: "absolute right-4 top-4 text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-colors",
                        title: "Close",
                        onclick: move |_| set_open(false),
                        svg {
                            class: "w-4 h-4",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            line { x1: "18", y1: "6", x2: "6", y2: "18" }
                            line { x1: "6", y1: "6", x2: "18", y2: "18" }
                        }
                    }

                    {children}
                }
            }
        }
    }
}
