//! # Redeemd Server
//!
//! HTTP layer of the Redeemd order service, built on Axum. The interesting
//! work lives in `redeemd-core`; this crate maps validator outcomes onto
//! client-facing statuses:
//!
//! - `Valid`: the order proceeds
//! - `Invalid`: 422 with a client-safe reason
//! - infrastructure failure: 500 carrying the failing path and cause

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
