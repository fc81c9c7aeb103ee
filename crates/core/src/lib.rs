//! Atelier domain core.
//!
//! - [`catalog`] -- the static style and feeling reference tables.
//! - [`prompt`] -- deterministic poster prompt composition.
//! - [`session`] -- explicit authentication session lifecycle.
//! - [`cart`] -- in-memory poster cart.
//! - [`dashboard`] -- partner dashboard metric helpers.

pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod prompt;
pub mod session;
pub mod types;

pub use catalog::{catalog, Catalog, FeelingDescriptor, IconicTuning, StyleDescriptor};
pub use error::CoreError;
pub use prompt::{compose, compose_prompt, PromptRequest};
