//! Shared type definitions
//!
//! This module contains the data types shared by storage and UI.

pub mod config;
pub mod model;
