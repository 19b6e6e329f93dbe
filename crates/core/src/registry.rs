//! Static schema registry.
//!
//! Maps a content key (site-wide singleton documents) or a section type
//! (page-scoped content blocks) to its [`SchemaNode`]. Schemas are defined in
//! code: adding one is a compile-time change, and both the form renderer and
//! the save path resolve through the same lookup.

use crate::schema::{SchemaField, SchemaNode};

/// Content keys with a registered schema.
pub const CONTENT_KEYS: &[&str] = &["navbar", "footer", "waitlist_modal"];

/// Section types with a registered schema.
pub const SECTION_TYPES: &[&str] = &[
    "hero",
    "feature-grid",
    "pricing-plans",
    "faq-list",
    "testimonials",
    "cta",
];

/// Look up the schema for a content key or section type.
///
/// Returns `None` for an unregistered key; callers must surface that as an
/// explicit "no schema registered" state, never render an empty form or
/// persist an unvalidated document.
pub fn schema_for(key: &str) -> Option<SchemaNode> {
    match key {
        "navbar" => Some(navbar_schema()),
        "footer" => Some(footer_schema()),
        "waitlist_modal" => Some(waitlist_modal_schema()),
        "hero" => Some(hero_schema()),
        "feature-grid" => Some(feature_grid_schema()),
        "pricing-plans" => Some(pricing_plans_schema()),
        "faq-list" => Some(faq_list_schema()),
        "testimonials" => Some(testimonials_schema()),
        "cta" => Some(cta_schema()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Site-wide content keys
// ---------------------------------------------------------------------------

fn nav_link() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("label", "Label", SchemaNode::text()),
        SchemaField::new("target", "Target", SchemaNode::Link),
    ])
}

fn navbar_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("logo", "Logo", SchemaNode::Image),
        SchemaField::new("links", "Link", SchemaNode::array(nav_link())),
        SchemaField::new(
            "cta_label",
            "CTA Label",
            SchemaNode::text_with("Join the waitlist"),
        ),
        SchemaField::new("cta_target", "CTA Target", SchemaNode::Link),
    ])
}

fn footer_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("tagline", "Tagline", SchemaNode::text()),
        SchemaField::new(
            "columns",
            "Column",
            SchemaNode::array(SchemaNode::object(vec![
                SchemaField::new("heading", "Heading", SchemaNode::text()),
                SchemaField::new("links", "Link", SchemaNode::array(nav_link())),
            ])),
        ),
        SchemaField::new(
            "socials",
            "Social Link",
            SchemaNode::array(SchemaNode::object(vec![
                SchemaField::new(
                    "network",
                    "Network",
                    SchemaNode::select(&["instagram", "tiktok", "x", "linkedin"]),
                ),
                SchemaField::new("url", "URL", SchemaNode::Link),
            ])),
        ),
        SchemaField::new("copyright", "Copyright", SchemaNode::text()),
    ])
}

fn waitlist_modal_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("title", "Title", SchemaNode::text_with("Be first in line")),
        SchemaField::new("subtitle", "Subtitle", SchemaNode::text()),
        SchemaField::new(
            "form",
            "Form",
            SchemaNode::object(vec![
                SchemaField::new("name_placeholder", "Name Placeholder", SchemaNode::text()),
                SchemaField::new("email_placeholder", "Email Placeholder", SchemaNode::text()),
                SchemaField::new(
                    "age",
                    "Age Limits",
                    SchemaNode::object(vec![
                        SchemaField::new("min", "Minimum", SchemaNode::number()),
                        SchemaField::new("max", "Maximum", SchemaNode::number()),
                    ]),
                ),
                SchemaField::new("submit_label", "Submit Label", SchemaNode::text_with("Join")),
            ]),
        ),
        SchemaField::new("success_message", "Success Message", SchemaNode::text()),
    ])
}

// ---------------------------------------------------------------------------
// Section types
// ---------------------------------------------------------------------------

fn hero_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("heading", "Heading", SchemaNode::text()),
        SchemaField::new("subheading", "Subheading", SchemaNode::text()),
        SchemaField::new("background", "Background", SchemaNode::Image),
        SchemaField::new(
            "card",
            "App Card",
            SchemaNode::object(vec![
                SchemaField::new("title", "Title", SchemaNode::text()),
                SchemaField::new(
                    "platforms",
                    "Platform",
                    SchemaNode::array(SchemaNode::object(vec![
                        SchemaField::new("name", "Name", SchemaNode::text()),
                        SchemaField::new("badge", "Badge", SchemaNode::Image),
                        SchemaField::new("url", "Store URL", SchemaNode::Link),
                    ])),
                ),
            ]),
        ),
    ])
}

fn feature_grid_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("heading", "Heading", SchemaNode::text()),
        SchemaField::new(
            "items",
            "Feature",
            SchemaNode::array(SchemaNode::object(vec![
                SchemaField::new("title", "Title", SchemaNode::text()),
                SchemaField::new("description", "Description", SchemaNode::text()),
                SchemaField::new("icon", "Icon", SchemaNode::Image),
            ])),
        ),
        SchemaField::new(
            "columns",
            "Columns",
            SchemaNode::number_bounded(1.0, 4.0),
        ),
    ])
}

fn pricing_plans_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("heading", "Heading", SchemaNode::text()),
        SchemaField::new("subheading", "Subheading", SchemaNode::text()),
        SchemaField::new(
            "billing_note",
            "Billing Note",
            SchemaNode::text(),
        ),
        SchemaField::new("show_comparison", "Show Comparison", SchemaNode::toggle(false)),
    ])
}

fn faq_list_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("heading", "Heading", SchemaNode::text_with("FAQ")),
        SchemaField::new(
            "category",
            "Category",
            SchemaNode::select(&["general", "pricing", "safety", "account"]),
        ),
        SchemaField::new("show_contact_link", "Show Contact Link", SchemaNode::toggle(true)),
    ])
}

fn testimonials_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("heading", "Heading", SchemaNode::text()),
        SchemaField::new(
            "quotes",
            "Quote",
            SchemaNode::array(SchemaNode::object(vec![
                SchemaField::new("text", "Text", SchemaNode::text()),
                SchemaField::new("author", "Author", SchemaNode::text()),
                SchemaField::new("avatar", "Avatar", SchemaNode::Image),
            ])),
        ),
    ])
}

fn cta_schema() -> SchemaNode {
    SchemaNode::object(vec![
        SchemaField::new("heading", "Heading", SchemaNode::text()),
        SchemaField::new("body", "Body", SchemaNode::text()),
        SchemaField::new("button_label", "Button Label", SchemaNode::text()),
        SchemaField::new("button_target", "Button Target", SchemaNode::Link),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
