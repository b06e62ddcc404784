//! NaviSenpai HTTP API - axum server exposing the chat engine.
//!
//! The API is the request-handling layer around `navi-chat`: it pulls the
//! message, language, and context topic id out of a JSON body and returns
//! the engine's reply. It keeps no conversation state of its own.

pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
