//! UI components for the model gallery
//!
//! This module contains all user interface components built with Dioxus.

pub mod card;
pub mod components;
pub mod detail;
pub mod gallery;
