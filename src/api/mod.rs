//! REST client module for the constituency portal backend.
//!
//! Provides the `ApiClient` for fetching read-side snapshots (seasons,
//! attendance, schedules, busy dates) over JSON/HTTP with bearer-token
//! auth. The token is supplied via config or environment - obtaining one
//! is the portal's login flow and out of scope here.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
