//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep item, schema, envelope and report structs in one place.
//! - Make JSON output shape changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — item bank records, form schema tree, submission envelope, reports.
//! - `constants.rs` — endpoint/version defaults and fixed survey wording.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! The form schema is consumed by the rendering engine and the envelope by the
//! ingestion sheet. Keep field renames synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
