use crate::app::{AppState, CatalogState, Route};
use crate::storage::catalog::find_model;
use crate::ui::card::view::{CardView, ExternalLink};
use dioxus::prelude::*;

/// Detail page for one model
#[component]
pub fn ModelDetail(model_name: String) -> Element {
    let app_state = use_context::<AppState>();
    let locale = app_state.settings.read().locale;
    let catalog = app_state.catalog.read();

    let loading = matches!(*catalog, CatalogState::Loading);
    let view = match &*catalog {
        CatalogState::Loaded(models) => {
            find_model(models, &model_name).map(|model| CardView::from_model(model, locale))
        }
        _ => None,
    };

    rsx! {
        div {
            class: "h-full overflow-y-auto p-6 scrollbar-thin",

            Link {
                to: Route::Gallery {},
                class: "text-sm text-[var(--text-tertiary)] hover:text-[var(--text-primary)]",
                "← Back"
            }

            if let Some(view) = view {
                div {
                    class: "max-w-4xl mx-auto mt-6 space-y-6 animate-fade-in-up",

                    h1 { class: "text-2xl font-semibold text-[var(--text-primary)]", "{view.title}" }
                    p { class: "text-xs font-mono text-[var(--text-tertiary)]", "{model_name}" }

                    div {
                        class: "grid grid-cols-[2fr_3fr] gap-6",
                        img {
                            class: "w-full rounded-xl object-cover",
                            src: "{view.cover.src}",
                            alt: "{view.cover.alt}",
                        }
                        p {
                            class: "text-sm text-[var(--text-secondary)] whitespace-pre-wrap",
                            "{view.description}"
                        }
                    }

                    if !view.links.is_empty() {
                        div {
                            class: "flex gap-2",
                            for link in view.links.iter() {
                                a {
                                    href: "{link.href}",
                                    target: ExternalLink::TARGET,
                                    rel: ExternalLink::REL,
                                    class: "btn-ghost px-3 py-1.5 rounded-lg text-sm border border-[var(--border-subtle)]",
                                    {link.site.label()}
                                }
                            }
                        }
                    }

                    if view.shows_carousel() {
                        div {
                            class: "grid grid-cols-3 gap-3",
                            for tile in view.samples.iter() {
                                img {
                                    class: "w-full aspect-[3/4] rounded-md object-cover",
                                    src: "{tile.src}",
                                    alt: "{tile.alt}",
                                    loading: "lazy",
                                }
                            }
                        }
                    }
                }
            } else if loading {
                div {
                    class: "flex items-center justify-center py-20 text-sm text-[var(--text-tertiary)]",
                    "Loading models..."
                }
            } else {
                div {
                    class: "flex flex-col items-center justify-center py-20 gap-2 text-[var(--text-tertiary)]",
                    span { class: "text-sm font-medium", "Model not found" }
                    span { class: "text-xs font-mono", "{model_name}" }
                }
            }
        }
    }
}
