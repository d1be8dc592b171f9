//! # Simplepedia Common Library
//!
//! Core of the Simplepedia encyclopedia browser, shared by the service
//! binaries:
//! - Article data model and copy-on-write collection
//! - Section index and per-section article filter
//! - Selection state machine
//! - Collection mutations (add / edit)
//! - Editor form rules and navigation events
//! - Seed loading, configuration, event bus, SSE helpers

pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod filter;
pub mod models;
pub mod mutator;
pub mod navigation;
pub mod sections;
pub mod seed;
pub mod selection;
pub mod sse;
pub mod time;

pub use error::{Error, Result};
pub use models::{Article, ArticleDraft, ArticleId, ArticleUpdate, Collection, Section};
pub use selection::{SelectionController, SelectionState};
