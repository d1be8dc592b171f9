//! HTTP API handlers for simplepedia-ui

pub mod articles;
pub mod error;
pub mod health;
pub mod navigation;
pub mod sections;
pub mod selection;
pub mod sse;

pub use articles::{create_article, get_article, list_articles, update_article};
pub use error::ApiError;
pub use health::health_routes;
pub use navigation::{get_buttons, get_editor, navigate, open_route, press_button};
pub use sections::{list_section_articles, list_sections};
pub use selection::{choose_article, choose_section, clear_selection, get_selection};
pub use sse::event_stream;
