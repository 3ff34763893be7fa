//! Horizontal image strip
//!
//! Items are laid out at 11/30 of the strip width, aligned to the start. The
//! prev/next controls move one item at a time and stop at the ends.

use dioxus::prelude::*;

/// Share of the strip width taken by one item
const ITEM_BASIS: f64 = 11.0 / 30.0;

/// Scroll position of a carousel, in items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselPosition {
    index: usize,
    len: usize,
    per_view: usize,
}

impl CarouselPosition {
    pub fn new(len: usize, per_view: usize) -> Self {
        Self {
            index: 0,
            len,
            per_view: per_view.max(1),
        }
    }

    /// Same strip scrolled to `index`, clamped to the last reachable item
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index.min(self.max_index());
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn max_index(&self) -> usize {
        self.len.saturating_sub(self.per_view)
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_scroll_next(&self) -> bool {
        self.index < self.max_index()
    }

    pub fn scroll_prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn scroll_next(&mut self) {
        self.index = (self.index + 1).min(self.max_index());
    }

    /// Track offset for the current index, as a share of the strip width.
    /// Applied as a margin: a transform would capture the items' fixed overlays.
    pub fn translate_percent(&self) -> f64 {
        self.index as f64 * ITEM_BASIS * 100.0
    }
}

/// Number of items fully visible at once
fn items_per_view() -> usize {
    (1.0 / ITEM_BASIS).floor() as usize
}

#[component]
pub fn Carousel(item_count: usize, children: Element) -> Element {
    // Only the index is state; bounds follow `item_count` on every render.
    let mut index = use_signal(|| 0usize);
    let current = CarouselPosition::new(item_count, items_per_view()).with_index(index());
    let offset = current.translate_percent();

    rsx! {
        div {
            class: "relative w-full",

            div {
                class: "overflow-hidden",
                div {
                    class: "flex transition-all duration-300 ease-out",
                    style: "margin-left: calc(-0.25rem - {offset:.4}%);",
                    {children}
                }
            }

            CarouselButton {
                class: "left-1",
                disabled: !current.can_scroll_prev(),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    let mut next = CarouselPosition::new(item_count, items_per_view()).with_index(index());
                    next.scroll_prev();
                    index.set(next.index());
                },
                polyline { points: "15 18 9 12 15 6" }
            }
            CarouselButton {
                class: "right-1",
                disabled: !current.can_scroll_next(),
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    let mut next = CarouselPosition::new(item_count, items_per_view()).with_index(index());
                    next.scroll_next();
                    index.set(next.index());
                },
                polyline { points: "9 18 15 12 9 6" }
            }
        }
    }
}

/// Slot for one carousel item
#[component]
pub fn CarouselItem(children: Element) -> Element {
    let basis = ITEM_BASIS * 100.0;

    rsx! {
        div {
            class: "min-w-0 shrink-0 grow-0 pl-1",
            style: "flex-basis: {basis:.4}%;",
            {children}
        }
    }
}

#[component]
fn CarouselButton(
    class: String,
    disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "absolute {class} top-1/2 -translate-y-1/2 w-7 h-7 rounded-full flex items-center justify-center bg-[var(--bg-secondary)]/80 border border-[var(--border-subtle)] text-[var(--text-primary)] disabled:opacity-40 disabled:cursor-not-allowed",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            svg {
                class: "w-4 h-4",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_full_items_per_view() {
        assert_eq!(items_per_view(), 2);
    }

    #[test]
    fn test_short_strip_does_not_scroll() {
        let mut position = CarouselPosition::new(2, 2);
        assert!(!position.can_scroll_prev());
        assert!(!position.can_scroll_next());
        position.scroll_next();
        assert_eq!(position.index(), 0);
    }

    #[test]
    fn test_scroll_clamps_to_ends() {
        let mut position = CarouselPosition::new(5, 2);
        position.scroll_prev();
        assert_eq!(position.index(), 0);

        for _ in 0..10 {
            position.scroll_next();
        }
        assert_eq!(position.index(), 3);
        assert!(!position.can_scroll_next());
        assert!(position.can_scroll_prev());

        position.scroll_prev();
        assert_eq!(position.index(), 2);
    }

    #[test]
    fn test_index_clamps_when_items_shrink() {
        let position = CarouselPosition::new(6, 2).with_index(4);
        assert_eq!(position.index(), 4);

        let shrunk = CarouselPosition::new(3, 2).with_index(position.index());
        assert_eq!(shrunk.index(), 1);
        assert!(!shrunk.can_scroll_next());

        let empty = CarouselPosition::new(0, 2).with_index(4);
        assert_eq!(empty.index(), 0);
        assert_eq!(empty.translate_percent(), 0.0);
    }

    #[test]
    fn test_translate_follows_index() {
        let mut position = CarouselPosition::new(4, 2);
        assert_eq!(position.translate_percent(), 0.0);
        position.scroll_next();
        assert!((position.translate_percent() - 36.6667).abs() < 0.001);
    }
}
