//! Majik Bloom Storefront library.
//!
//! This crate provides the storefront's session engine as a library: the
//! cart store with its persisted storage backends, the product catalog, the
//! derived cart views, the transient notification center, and the small UI
//! state machines of the shop pages (gallery, tabs, nav, contact form).
//!
//! The presentation layer lives elsewhere (the `cli` crate); it binds user
//! events to the operations exposed by [`state::Storefront`] and re-renders
//! derived views after each call.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod notify;
pub mod state;
pub mod ui;
