//! Web layer for the petrol station map.
//!
//! A single page: a postcode and fuel type form, the rendered map, and a
//! list of the stations drawn on it.

mod csrf;
mod form;
mod routes;
mod state;
pub mod templates;

pub use csrf::{CsrfError, CsrfSigner};
pub use form::{FormErrors, PetrolForm};
pub use routes::{AppError, create_router};
pub use state::AppState;
