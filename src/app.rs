//! Root Dioxus application component
//!
//! This module contains the router, the shared application state and the App
//! component that serves as the root of the UI tree.

use crate::storage::catalog::load_catalog;
use crate::storage::settings::{load_settings, resolve_catalog_path};
use crate::types::config::GalleryConfig;
use crate::types::model::ModelInfo;
use crate::ui::detail::ModelDetail;
use crate::ui::gallery::Gallery;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/model/:model_name")]
    ModelDetail { model_name: String },
}

/// State of the model catalog
#[derive(Clone, PartialEq, Debug)]
pub enum CatalogState {
    Loading,
    Loaded(Vec<ModelInfo>),
    Error(String),
}

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub settings: Signal<GalleryConfig>,
    pub catalog: Signal<CatalogState>,
}

impl AppState {
    pub fn new(settings: GalleryConfig) -> Self {
        tracing::info!("AppState initialized");
        Self {
            settings: Signal::new(settings),
            catalog: Signal::new(CatalogState::Loading),
        }
    }
}

#[component]
pub fn App() -> Element {
    // Settings are handed over by the launcher; read them from disk otherwise
    let settings = use_hook(|| try_consume_context::<GalleryConfig>().unwrap_or_else(load_settings));
    let app_state = use_context_provider(move || AppState::new(settings));

    // Reload the catalog whenever the settings change
    use_effect(move || {
        let settings = app_state.settings.read().clone();
        let mut catalog = app_state.catalog;
        spawn(async move {
            catalog.set(CatalogState::Loading);
            let result = match resolve_catalog_path(&settings) {
                Ok(path) => load_catalog(&path).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(models) => {
                    tracing::info!("Loaded {} models", models.len());
                    catalog.set(CatalogState::Loaded(models));
                }
                Err(e) => {
                    tracing::error!("Failed to load catalog: {}", e);
                    catalog.set(CatalogState::Error(e.to_string()));
                }
            }
        });
    });

    rsx! {
        div {
            class: "h-screen bg-[var(--bg-primary)] text-[var(--text-primary)]",
            Router::<Route> {}
        }
    }
}
