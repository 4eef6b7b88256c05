//! Core rendering abstractions for calendar documents.
//!
//! This crate provides the pieces shared by output backends:
//! - `DocumentRenderer` trait for turning page canvases into a document
//! - Error types for rendering operations
//! - Shared naming helpers for font resources

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::DocumentRenderer;
