//! Card click handling
//!
//! A card navigates to its model's detail page when clicked. Controls nested
//! inside the card stop their click from bubbling, and the click that dismisses
//! one of the card's dialogs (an outside click landing on the card) is consumed
//! without navigating.

use crate::app::Route;
use dioxus::prelude::*;
use std::rc::Rc;

/// Push-style navigation target for card clicks
pub trait Navigate {
    fn navigate(&self, route: Route);
}

/// Navigation collaborator provided as context to cards.
///
/// Cards fall back to the router's navigator when none is provided.
#[derive(Clone)]
pub struct CardNavigator(Rc<dyn Navigate>);

impl CardNavigator {
    pub fn new(navigate: impl Navigate + 'static) -> Self {
        Self(Rc::new(navigate))
    }
}

impl Navigate for CardNavigator {
    fn navigate(&self, route: Route) {
        self.0.navigate(route);
    }
}

impl Navigate for Navigator {
    fn navigate(&self, route: Route) {
        if let Some(failure) = self.push(route) {
            tracing::warn!("Navigation failed: {:?}", failure);
        }
    }
}

/// Detail route for a model. The name is used as-is.
pub fn detail_route(model_name: &str) -> Route {
    Route::ModelDetail {
        model_name: model_name.to_string(),
    }
}

/// Per-card click state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardInteraction {
    /// The next card click navigates
    #[default]
    Idle,
    /// A dialog just closed; the next card click is swallowed
    SuppressNext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Navigate(Route),
    Suppressed,
}

impl CardInteraction {
    /// Card-level click. Consumes a pending suppression.
    pub fn on_card_click(&mut self, model_name: &str) -> ClickOutcome {
        match std::mem::take(self) {
            CardInteraction::SuppressNext => {
                tracing::debug!("Card '{}' click suppressed after dialog close", model_name);
                ClickOutcome::Suppressed
            }
            CardInteraction::Idle => ClickOutcome::Navigate(detail_route(model_name)),
        }
    }

    /// Any of the card's dialogs opened or closed
    pub fn on_dialog_open_change(&mut self, is_open: bool) {
        if !is_open {
            *self = CardInteraction::SuppressNext;
        }
    }

    #[cfg(test)]
    pub fn is_suppressing(&self) -> bool {
        matches!(self, CardInteraction::SuppressNext)
    }
}

/// Run a card click and navigate when it isn't suppressed
pub fn handle_card_click(
    state: &mut CardInteraction,
    model_name: &str,
    navigator: &impl Navigate,
) -> bool {
    match state.on_card_click(model_name) {
        ClickOutcome::Navigate(route) => {
            tracing::debug!("Navigating to {}", route);
            navigator.navigate(route);
            true
        }
        ClickOutcome::Suppressed => false,
    }
}

/// Click handler for controls nested in a card: keeps the click away from the card.
pub fn on_nested_click(evt: MouseEvent) {
    evt.stop_propagation();
}
