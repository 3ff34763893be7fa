use crate::app::{AppState, CatalogState};
use crate::ui::card::ModelCard;
use dioxus::prelude::*;

/// Grid of model cards
#[component]
pub fn Gallery() -> Element {
    let app_state = use_context::<AppState>();
    let columns = app_state.settings.read().columns;
    let catalog = app_state.catalog.read();

    rsx! {
        div {
            class: "h-full overflow-y-auto p-6 scrollbar-thin",

            match &*catalog {
                CatalogState::Loading => rsx! {
                    div {
                        class: "flex items-center justify-center py-20 text-sm text-[var(--text-tertiary)]",
                        "Loading models..."
                    }
                },
                CatalogState::Error(error) => rsx! {
                    div {
                        class: "max-w-lg mx-auto mt-20 p-4 rounded-xl border border-red-500/30 bg-red-500/10 text-sm text-red-300",
                        "Failed to load the model catalog: {error}"
                    }
                },
                CatalogState::Loaded(models) if models.is_empty() => rsx! {
                    div {
                        class: "flex flex-col items-center justify-center py-20 gap-2 text-[var(--text-tertiary)]",
                        span { class: "text-sm font-medium", "No models found" }
                        span { class: "text-xs", "Add entries to models.json in the data directory" }
                    }
                },
                CatalogState::Loaded(models) => rsx! {
                    div {
                        class: "grid gap-6",
                        style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                        for model in models.iter() {
                            ModelCard {
                                key: "{model.model_name}",
                                model: model.clone(),
                            }
                        }
                    }
                },
            }
        }
    }
}
