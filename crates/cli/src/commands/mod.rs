//! Shell command implementations.

pub mod cart;
pub mod contact;
pub mod products;
