//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod blog_post;
pub mod dashboard;
pub mod faq;
pub mod feature;
pub mod global_content;
pub mod history;
pub mod media;
pub mod page;
pub mod pricing_plan;
pub mod section;
pub mod waitlist;
