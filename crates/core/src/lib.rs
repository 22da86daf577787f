//! Majik Bloom Core - Shared types library.
//!
//! This crate provides common types used across all Majik Bloom components:
//! - `storefront` - Cart store, catalog, and UI state for the demo shop
//! - `cli` - Command-line shell that drives the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no
//! presentation concerns. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
