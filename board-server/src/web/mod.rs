//! Web layer for the departure board.
//!
//! Provides the HTML board pages and a JSON feed endpoint. Handlers read
//! the clock once per request and hand the instant to the engine; nothing
//! here holds timer state.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
