//! Model card component
//!
//! A clickable card for one model: cover, title, clamped description with a
//! details dialog, a strip of sample images and external links. Clicking the
//! card body opens the model's detail page.

pub mod interaction;
pub mod view;

use crate::app::AppState;
use crate::types::model::ModelInfo;
use crate::ui::components::carousel::{Carousel, CarouselItem};
use crate::ui::components::dialog::Dialog;
use crate::ui::components::image::ResponsiveImage;
use crate::ui::components::image_dialog::ImageDialog;
use dioxus::prelude::*;
use interaction::{handle_card_click, on_nested_click, CardInteraction, CardNavigator};
use view::{CardView, ExternalLink, LinkSite};

#[component]
pub fn ModelCard(model: ModelInfo) -> Element {
    let app_state = use_context::<AppState>();
    let locale = app_state.settings.read().locale;
    let view = CardView::from_model(&model, locale);

    let mut interaction = use_signal(CardInteraction::default);
    let card_navigator = use_hook(try_consume_context::<CardNavigator>);

    let model_name = model.model_name.clone();
    let on_card_click = move |_| match &card_navigator {
        Some(nav) => {
            handle_card_click(&mut interaction.write(), &model_name, nav);
        }
        None => {
            handle_card_click(&mut interaction.write(), &model_name, &navigator());
        }
    };
    let on_open_change = move |is_open: bool| {
        interaction.write().on_dialog_open_change(is_open);
    };

    let sample_count = view.samples.len();
    let title = view.title.clone();
    let description = view.description.clone();

    rsx! {
        div {
            class: "flex flex-col rounded-lg glass-md overflow-hidden cursor-pointer hover:border-[var(--border-hover)] transition-all",
            role: "link",
            aria_label: "{title}",
            onclick: on_card_click,

            // Cover
            div {
                class: "aspect-[4/5] relative w-full",
                ResponsiveImage {
                    src: view.cover.src.clone(),
                    alt: view.cover.alt.clone(),
                    class: "object-cover rounded-t-lg",
                    sizes: "(max-width: 640px) 100vw, (max-width: 768px) 50vw, (max-width: 1024px) 33vw, 25vw",
                }
            }

            // Header
            div {
                class: "px-6 pt-6",
                h3 {
                    class: "text-base font-semibold text-[var(--text-primary)]",
                    "{title}"
                }
                div {
                    class: "pt-2",
                    p {
                        class: "line-clamp-3 text-sm text-[var(--text-secondary)]",
                        "{description}"
                    }
                    Dialog {
                        on_open_change: on_open_change,
                        content_class: "sm:max-w-[625px]",
                        trigger: rsx! {
                            button {
                                class: "text-xs text-[var(--accent-primary)] hover:underline",
                                "{view.details_label}"
                            }
                        },
                        h2 {
                            class: "text-lg font-semibold text-[var(--text-primary)] mb-2 pr-8",
                            "{title}"
                        }
                        p {
                            class: "text-sm text-[var(--text-secondary)] whitespace-pre-wrap max-h-[70vh] overflow-y-auto",
                            "{description}"
                        }
                    }
                }
            }

            div {
                class: "mt-auto",
                div {
                    class: "px-6 pt-4",
                    div { class: "h-px w-full bg-[var(--border-subtle)]" }
                }

                // Samples
                if view.shows_carousel() {
                    div {
                        class: "px-6 pt-4",
                        Carousel {
                            item_count: sample_count,
                            for (index, tile) in view.samples.iter().enumerate() {
                                CarouselItem {
                                    key: "{index}",
                                    div {
                                        onclick: on_nested_click,
                                        ImageDialog {
                                            image_url: tile.src.clone(),
                                            alt_text: tile.alt.clone(),
                                            on_open_change: on_open_change,
                                            div {
                                                class: "aspect-[3/4] relative cursor-pointer",
                                                ResponsiveImage {
                                                    src: tile.src.clone(),
                                                    alt: tile.alt.clone(),
                                                    class: "object-cover rounded-md",
                                                    sizes: "15vw",
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // External links
                div {
                    class: "flex justify-end gap-2 px-6 pt-4 pb-6",
                    for link in view.links.iter() {
                        ExternalLinkButton { link: link.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ExternalLinkButton(link: ExternalLink) -> Element {
    let label = link.site.label();

    rsx! {
        a {
            href: "{link.href}",
            target: ExternalLink::TARGET,
            rel: ExternalLink::REL,
            class: "btn-ghost flex items-center gap-2 px-3 py-1.5 rounded-lg text-sm border border-[var(--border-subtle)]",
            onclick: on_nested_click,
            SiteIcon { site: link.site }
            span { "{label}" }
        }
    }
}

#[component]
fn SiteIcon(site: LinkSite) -> Element {
    match site {
        LinkSite::HuggingFace => rsx! {
            svg {
                class: "w-4 h-4",
                view_box: "0 0 24 24",
                fill: "#FFD21E",
                circle { cx: "12", cy: "12", r: "10" }
                circle { cx: "9", cy: "10", r: "1.2", fill: "#3A3B45" }
                circle { cx: "15", cy: "10", r: "1.2", fill: "#3A3B45" }
                path { d: "M8 14.5c1 1.5 2.3 2.2 4 2.2s3-.7 4-2.2", fill: "none", stroke: "#3A3B45", stroke_width: "1.5", stroke_linecap: "round" }
            }
        },
        LinkSite::Civitai => rsx! {
            svg {
                class: "w-4 h-4",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "#1971C2",
                stroke_width: "2",
                stroke_linejoin: "round",
                path { d: "M12 2l8.66 5v10L12 22l-8.66-5V7z" }
                path { d: "M15 9.5a4 4 0 1 0 0 5", stroke_linecap: "round" }
            }
        },
    }
}
