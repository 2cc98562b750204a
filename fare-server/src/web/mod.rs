//! Web layer for the fare calculator.
//!
//! Provides the HTML form and receipt pages plus JSON endpoints for fare
//! quotes, route analysis, fuel prices and place suggestions.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, ServerRouteResolver};
pub use templates::*;
