//! Domain logic for the qoupl content backend.
//!
//! Everything in this crate is pure and in-memory: schema descriptions,
//! document defaulting/validation, form rendering, bound-path editing, and
//! the content-history display rules. Database access lives in `qoupl-db`,
//! HTTP in `qoupl-api`.

pub mod error;
pub mod form;
pub mod history;
pub mod path;
pub mod registry;
pub mod schema;
pub mod types;
