//! # Satcurve API
//!
//! HTTP shell for the Satcurve chart generator: a small embedded form UI,
//! a generate endpoint running the synchronous pipeline, and preview/
//! download endpoints serving the retained chart documents.
//!
//! The retained state between the generate and download actions is exactly
//! the two most recently produced chart documents (plus their report),
//! held in [`state::AppState`] behind a single reader/writer lock.

#![warn(clippy::all)]

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
