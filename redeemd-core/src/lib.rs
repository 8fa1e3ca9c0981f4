//! # Redeemd Core
//!
//! Core library for the Redeemd order service. It owns the two pieces the
//! HTTP layer builds on:
//!
//! - **Coupon validation**: a concurrent scatter/gather pipeline that scans
//!   a directory of line-oriented code files and accepts a candidate only
//!   once it has been seen often enough to be trusted. See [`coupon`].
//! - **Product catalog**: the read-only dessert catalog served by the order
//!   API. See [`catalog`].

pub mod catalog;
pub mod coupon;
pub mod error;

pub use catalog::{Product, ProductCatalog};
pub use coupon::{CouponValidator, OCCURRENCE_THRESHOLD, Outcome, RejectReason, ValidatorConfig};
pub use error::{CouponError, Result};
