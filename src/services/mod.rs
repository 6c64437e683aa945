//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `schema.rs` — slugs, panels and the two-page form schema (pure).
//! - `envelope.rs` — submission envelope assembly (pure apart from the clock).
//! - `ids.rs` — response id strategies and startup capability probe.
//! - `sink.rs` — fire-and-forget handoff to the ingestion endpoint.
//! - `validate.rs` — strict item bank checks.
//! - `page.rs` — host HTML page for the rendering engine.
//! - `config.rs` — TOML config loading and flag overrides.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod envelope;
pub mod ids;
pub mod logging;
pub mod output;
pub mod page;
pub mod schema;
pub mod sink;
pub mod validate;
