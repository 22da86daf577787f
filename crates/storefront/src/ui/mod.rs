//! UI state for the shop pages.
//!
//! The storefront pages carry a handful of small, independent pieces of
//! interface state alongside the cart: the product image gallery, the
//! tabbed description panels, the mobile navigation toggle, and the contact
//! form. Each is a plain state machine the presentation layer renders from;
//! none of them touch the cart.

pub mod contact;
pub mod gallery;
pub mod nav;
pub mod tabs;

pub use contact::{ContactForm, ContactFormError, ContactSubmission};
pub use gallery::ProductGallery;
pub use nav::MobileNav;
pub use tabs::TabPanel;
