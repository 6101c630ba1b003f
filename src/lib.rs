//! Core library for sabhatrack - portal API client, models, cache, and the
//! attendance reporting engine.
//!
//! The engine modules (`report`, `calendar`) are pure transformations over
//! snapshots the `api` module fetches; the `cache` module persists those
//! snapshots so the CLI works offline.

pub mod api;
pub mod cache;
pub mod calendar;
pub mod config;
pub mod models;
pub mod render;
pub mod report;
pub mod utils;
