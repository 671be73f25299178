//! Foundation types for the spell HUD.
//!
//! This crate contains the engine-agnostic types shared by all spell HUD
//! crates: colors, namespaced resource locations, styled labels, the
//! renderer trait the host engine implements, and error types.

pub mod backend;
pub mod color;
pub mod error;
pub mod resource;
pub mod text;
