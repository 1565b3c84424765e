//! zettel-core - Core library for the zettel client
//!
//! This crate contains the wire models, the HTTP client for the remote
//! zettel store, and the editor session state machine shared by the
//! client front ends.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod util;

pub use api::ZettelStoreClient;
pub use error::{Error, Result};
pub use models::{SearchFilter, ZettelId, ZettelSummary};
pub use session::{EditMode, EditorSession, RequestToken};
