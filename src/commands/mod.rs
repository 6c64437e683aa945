//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `form.rs` — build/page/slug/validate.
//! - `response.rs` — submit and config show.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod form;
pub mod response;

pub use form::handle_form_commands;
pub use response::handle_response_commands;
