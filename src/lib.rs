//! Model Gallery Library
//!
//! Core library for the model gallery desktop application.

pub mod app;
pub mod storage;
pub mod types;
pub mod ui;
