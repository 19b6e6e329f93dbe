//! Display rules for the content change history.
//!
//! The audit log stores only identifiers (entity type, entity id, action);
//! everything human-readable is reconstructed at display time by the api
//! layer. This module holds the closed entity/action enums and the title
//! fallback rules that reconstruction dispatches on.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Entity kinds
// ---------------------------------------------------------------------------

/// The six audited entity types.
///
/// Closed enum: every dispatch on it is exhaustive, so a seventh audited
/// type is a compile-time-checked addition rather than a silently ignored
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Page,
    Section,
    BlogPost,
    Faq,
    Feature,
    PricingPlan,
}

impl EntityKind {
    /// Parse from the `entity_type` column value.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "pages" => Ok(Self::Page),
            "sections" => Ok(Self::Section),
            "blog_posts" => Ok(Self::BlogPost),
            "faqs" => Ok(Self::Faq),
            "features" => Ok(Self::Feature),
            "pricing_plans" => Ok(Self::PricingPlan),
            other => Err(CoreError::Validation(format!(
                "Unknown entity type '{other}'"
            ))),
        }
    }

    /// Database column value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Page => "pages",
            Self::Section => "sections",
            Self::BlogPost => "blog_posts",
            Self::Faq => "faqs",
            Self::Feature => "features",
            Self::PricingPlan => "pricing_plans",
        }
    }

    /// Human-readable label for the history view.
    pub fn label(self) -> &'static str {
        match self {
            Self::Page => "Page",
            Self::Section => "Section",
            Self::BlogPost => "Blog post",
            Self::Faq => "FAQ",
            Self::Feature => "Feature",
            Self::PricingPlan => "Pricing plan",
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
    Published,
    Unpublished,
}

impl ChangeAction {
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            "deleted" => Ok(Self::Deleted),
            "published" => Ok(Self::Published),
            "unpublished" => Ok(Self::Unpublished),
            other => Err(CoreError::Validation(format!("Unknown action '{other}'"))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Published => "published",
            Self::Unpublished => "unpublished",
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// A reconstructed, display-ready description of a change event's target.
///
/// Ephemeral: computed per history request, never persisted. Absent when the
/// target entity has since been deleted or the lookup failed.
#[derive(Debug, Clone, Serialize)]
pub struct EntitySnapshot {
    /// Human-readable type tag (e.g. `FAQ`, `Section`).
    pub kind: String,
    pub title: String,
    /// Owning page title/slug, for page-scoped entities.
    pub parent: Option<String>,
}

impl EntitySnapshot {
    pub fn new(kind: EntityKind, title: impl Into<String>) -> Self {
        Self {
            kind: kind.label().to_string(),
            title: title.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Pick a display title for a section's heterogeneous JSON payload.
///
/// Section payloads differ by section type and do not share a title key, so
/// the choice is a priority fallback: `title`, then `name`, then `heading`,
/// then the raw section-type identifier.
pub fn section_display_title(content: &Value, section_type: &str) -> String {
    for key in ["title", "name", "heading"] {
        if let Some(s) = content.get(key).and_then(|v| v.as_str()) {
            if !s.trim().is_empty() {
                return s.to_string();
            }
        }
    }
    section_type.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
