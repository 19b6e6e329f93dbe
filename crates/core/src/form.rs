//! Schema-driven form rendering and bound array editing.
//!
//! [`render_form`] is a pure depth-first walk over a [`SchemaNode`] tree: it
//! pairs every leaf with the concrete control an admin UI should show and the
//! [`BoundPath`] the edited value writes back to. It knows nothing about any
//! particular UI toolkit -- the output is a plain serializable tree.
//!
//! The array operations rewrite the whole array value at a path in one step
//! (read, mutate, write back), so sibling index bindings can never observe a
//! half-reindexed list.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::CoreError;
use crate::path::BoundPath;
use crate::schema::SchemaNode;

// ---------------------------------------------------------------------------
// Render context
// ---------------------------------------------------------------------------

/// A page the link control can target.
#[derive(Debug, Clone, Serialize)]
pub struct LinkTarget {
    pub slug: String,
    pub title: String,
}

/// Auxiliary data the walker cannot derive from the schema itself.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Storage bucket image fields upload into.
    pub bucket: String,
    /// Pages offered as link targets.
    pub pages: Vec<LinkTarget>,
}

// ---------------------------------------------------------------------------
// Rendered form tree
// ---------------------------------------------------------------------------

/// One rendered field: where it binds, what to call it, and how to edit it.
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    /// Dot/bracket path the edited value writes back to.
    pub path: String,
    pub label: String,
    pub control: FormControl,
}

/// The concrete editing control for a field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormControl {
    Text {
        value: String,
    },
    Number {
        value: Number,
        min: Option<f64>,
        max: Option<f64>,
    },
    Toggle {
        value: bool,
    },
    Select {
        value: String,
        choices: Vec<String>,
    },
    /// Stores a `bucket/path` storage reference, never inline bytes.
    Image {
        value: String,
        bucket: String,
    },
    Link {
        value: String,
        targets: Vec<LinkTarget>,
    },
    /// Nested object: one child field per schema child, in schema order.
    Group {
        children: Vec<FormField>,
    },
    /// Repeatable list; every item is a full sub-form bound to `path[i]`.
    List {
        items: Vec<FormField>,
    },
    /// Placeholder for a schema kind this renderer cannot edit. Shown
    /// visibly instead of blanking the rest of the form.
    Unsupported {
        kind: String,
    },
}

/// Render an editing form for `schema` over `document`, rooted at `base`.
///
/// Missing or wrong-typed values render as the schema's defaults, so the
/// form is always fully populated even for a document that does not exist
/// yet (the value tree is defaulted leaf-by-leaf, not mutated).
pub fn render_form(
    schema: &SchemaNode,
    label: &str,
    base: &BoundPath,
    document: &Value,
    ctx: &RenderContext,
) -> FormField {
    render_node(schema, label, base, base.get(document), ctx)
}

fn render_node(
    schema: &SchemaNode,
    label: &str,
    path: &BoundPath,
    value: Option<&Value>,
    ctx: &RenderContext,
) -> FormField {
    let control = match schema {
        SchemaNode::Text { .. } => FormControl::Text {
            value: as_string(schema, value),
        },
        SchemaNode::Number { min, max, .. } => FormControl::Number {
            value: as_number(schema, value),
            min: *min,
            max: *max,
        },
        SchemaNode::Toggle { .. } => FormControl::Toggle {
            value: match schema.apply_defaults(value) {
                Value::Bool(b) => b,
                _ => false,
            },
        },
        SchemaNode::Select { choices, .. } => FormControl::Select {
            value: as_string(schema, value),
            choices: choices.clone(),
        },
        SchemaNode::Image => FormControl::Image {
            value: as_string(schema, value),
            bucket: ctx.bucket.clone(),
        },
        SchemaNode::Link => FormControl::Link {
            value: as_string(schema, value),
            targets: ctx.pages.clone(),
        },
        SchemaNode::Array { item } => {
            let stored = value.and_then(|v| v.as_array());
            let items = stored
                .map(|arr| {
                    arr.iter()
                        .enumerate()
                        .map(|(i, v)| {
                            render_node(
                                item,
                                &format!("{} {}", label, i + 1),
                                &path.index(i),
                                Some(v),
                                ctx,
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            FormControl::List { items }
        }
        SchemaNode::Object { fields } => {
            let stored = value.and_then(|v| v.as_object());
            let children = fields
                .iter()
                .map(|field| {
                    render_node(
                        &field.node,
                        &field.label,
                        &path.child(&field.name),
                        stored.and_then(|m| m.get(&field.name)),
                        ctx,
                    )
                })
                .collect();
            FormControl::Group { children }
        }
        SchemaNode::Unsupported { kind } => FormControl::Unsupported { kind: kind.clone() },
    };

    FormField {
        path: path.to_string(),
        label: label.to_string(),
        control,
    }
}

fn as_string(schema: &SchemaNode, value: Option<&Value>) -> String {
    match schema.apply_defaults(value) {
        Value::String(s) => s,
        _ => String::new(),
    }
}

fn as_number(schema: &SchemaNode, value: Option<&Value>) -> Number {
    match schema.apply_defaults(value) {
        Value::Number(n) => n,
        _ => Number::from(0),
    }
}

// ---------------------------------------------------------------------------
// Bound array editing
// ---------------------------------------------------------------------------

/// Read the full array at `path` (missing or wrong-shaped reads as empty).
fn read_array(doc: &Value, path: &BoundPath) -> Vec<Value> {
    path.get(doc)
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

/// Append `item` to the array at `path`. Returns the new length.
pub fn array_push(doc: &mut Value, path: &BoundPath, item: Value) -> usize {
    let mut items = read_array(doc, path);
    items.push(item);
    let len = items.len();
    path.set(doc, Value::Array(items));
    len
}

/// Remove the item at `index` from the array at `path`.
///
/// All subsequent items shift down one index.
pub fn array_remove(doc: &mut Value, path: &BoundPath, index: usize) -> Result<(), CoreError> {
    let mut items = read_array(doc, path);
    if index >= items.len() {
        return Err(CoreError::Validation(format!(
            "Index {index} out of bounds for array '{path}' of length {}",
            items.len()
        )));
    }
    items.remove(index);
    path.set(doc, Value::Array(items));
    Ok(())
}

/// Move the item at `from` to position `to` within the array at `path`.
///
/// Items between the two positions shift by one; every item keeps its value
/// under its new index.
pub fn array_move(
    doc: &mut Value,
    path: &BoundPath,
    from: usize,
    to: usize,
) -> Result<(), CoreError> {
    let mut items = read_array(doc, path);
    if from >= items.len() || to >= items.len() {
        return Err(CoreError::Validation(format!(
            "Move {from} -> {to} out of bounds for array '{path}' of length {}",
            items.len()
        )));
    }
    let item = items.remove(from);
    items.insert(to, item);
    path.set(doc, Value::Array(items));
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaField;
    use serde_json::json;

    fn hero_schema() -> SchemaNode {
        SchemaNode::object(vec![
            SchemaField::new("heading", "Heading", SchemaNode::text()),
            SchemaField::new("background", "Background", SchemaNode::Image),
            SchemaField::new(
                "card",
                "Card",
                SchemaNode::object(vec![
                    SchemaField::new("title", "Title", SchemaNode::text()),
                    SchemaField::new(
                        "platforms",
                        "Platform",
                        SchemaNode::array(SchemaNode::object(vec![
                            SchemaField::new("name", "Name", SchemaNode::text()),
                            SchemaField::new("url", "URL", SchemaNode::Link),
                        ])),
                    ),
                ]),
            ),
        ])
    }

    fn ctx() -> RenderContext {
        RenderContext {
            bucket: "site-images".into(),
            pages: vec![LinkTarget {
                slug: "pricing".into(),
                title: "Pricing".into(),
            }],
        }
    }

    fn find<'a>(children: &'a [FormField], path: &str) -> &'a FormField {
        children
            .iter()
            .find(|f| f.path == path)
            .unwrap_or_else(|| panic!("no field at path {path}"))
    }

    // -- Rendering --

    #[test]
    fn renders_defaults_for_empty_document() {
        let form = render_form(
            &hero_schema(),
            "Hero",
            &BoundPath::root(),
            &json!({}),
            &ctx(),
        );
        let FormControl::Group { children } = &form.control else {
            panic!("root must render as a group");
        };
        let heading = find(children, "heading");
        assert!(matches!(&heading.control, FormControl::Text { value } if value.is_empty()));
    }

    #[test]
    fn image_field_carries_bucket_from_context() {
        let form = render_form(
            &hero_schema(),
            "Hero",
            &BoundPath::root(),
            &json!({}),
            &ctx(),
        );
        let FormControl::Group { children } = &form.control else {
            panic!()
        };
        let background = find(children, "background");
        match &background.control {
            FormControl::Image { bucket, .. } => assert_eq!(bucket, "site-images"),
            other => panic!("expected image control, got {other:?}"),
        }
    }

    #[test]
    fn link_field_offers_context_pages() {
        let doc = json!({ "card": { "platforms": [{ "name": "iOS", "url": "" }] } });
        let form = render_form(&hero_schema(), "Hero", &BoundPath::root(), &doc, &ctx());
        let FormControl::Group { children } = &form.control else {
            panic!()
        };
        let FormControl::Group { children: card } = &find(children, "card").control else {
            panic!()
        };
        let FormControl::List { items } = &find(card, "card.platforms").control else {
            panic!()
        };
        let FormControl::Group { children: item } = &items[0].control else {
            panic!()
        };
        match &find(item, "card.platforms[0].url").control {
            FormControl::Link { targets, .. } => {
                assert_eq!(targets.len(), 1);
                assert_eq!(targets[0].slug, "pricing");
            }
            other => panic!("expected link control, got {other:?}"),
        }
    }

    #[test]
    fn array_items_bind_to_indexed_paths() {
        let doc = json!({
            "card": { "platforms": [{ "name": "iOS", "url": "" }, { "name": "Android", "url": "" }] }
        });
        let base = BoundPath::parse("data").unwrap();
        let doc = json!({ "data": doc });
        let form = render_form(&hero_schema(), "Hero", &base, &doc, &ctx());
        let FormControl::Group { children } = &form.control else {
            panic!()
        };
        let FormControl::Group { children: card } = &find(children, "data.card").control else {
            panic!()
        };
        let FormControl::List { items } = &find(card, "data.card.platforms").control else {
            panic!()
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].path, "data.card.platforms[1]");
        let FormControl::Group { children: second } = &items[1].control else {
            panic!()
        };
        let name = find(second, "data.card.platforms[1].name");
        assert!(matches!(&name.control, FormControl::Text { value } if value == "Android"));
    }

    #[test]
    fn unsupported_kind_renders_placeholder() {
        let schema = SchemaNode::object(vec![SchemaField::new(
            "body",
            "Body",
            SchemaNode::Unsupported {
                kind: "richtext".into(),
            },
        )]);
        let form = render_form(&schema, "Post", &BoundPath::root(), &json!({}), &ctx());
        let FormControl::Group { children } = &form.control else {
            panic!()
        };
        match &children[0].control {
            FormControl::Unsupported { kind } => assert_eq!(kind, "richtext"),
            other => panic!("expected unsupported placeholder, got {other:?}"),
        }
    }

    // -- Array editing --

    #[test]
    fn push_appends_and_creates_missing_array() {
        let mut doc = json!({});
        let path = BoundPath::parse("card.platforms").unwrap();
        let len = array_push(&mut doc, &path, json!({ "name": "iOS" }));
        assert_eq!(len, 1);
        assert_eq!(doc["card"]["platforms"][0]["name"], json!("iOS"));
    }

    #[test]
    fn remove_shifts_subsequent_items_down() {
        let mut doc = json!({ "items": ["a", "b", "c"] });
        let path = BoundPath::parse("items").unwrap();
        array_remove(&mut doc, &path, 1).unwrap();
        assert_eq!(doc["items"], json!(["a", "c"]));
    }

    #[test]
    fn remove_out_of_bounds_is_rejected() {
        let mut doc = json!({ "items": ["a"] });
        let path = BoundPath::parse("items").unwrap();
        assert!(array_remove(&mut doc, &path, 5).is_err());
        assert_eq!(doc["items"], json!(["a"]));
    }

    #[test]
    fn move_to_front_keeps_values_with_items() {
        let mut doc = json!({ "platforms": [
            { "name": "iOS" }, { "name": "Android" }, { "name": "Web" }
        ]});
        let path = BoundPath::parse("platforms").unwrap();
        array_move(&mut doc, &path, 2, 0).unwrap();
        assert_eq!(doc["platforms"][0]["name"], json!("Web"));
        assert_eq!(doc["platforms"][1]["name"], json!("iOS"));
        assert_eq!(doc["platforms"][2]["name"], json!("Android"));
    }

    #[test]
    fn move_rebinds_paths_consistently() {
        // Edit a value through its bound path, reorder, and confirm the value
        // is now readable through the path of its new index only.
        let mut doc = json!({ "platforms": [
            { "name": "a" }, { "name": "b" }, { "name": "c" }
        ]});
        BoundPath::parse("platforms[2].name")
            .unwrap()
            .set(&mut doc, json!("edited"));
        let path = BoundPath::parse("platforms").unwrap();
        array_move(&mut doc, &path, 2, 0).unwrap();
        assert_eq!(
            BoundPath::parse("platforms[0].name").unwrap().get(&doc),
            Some(&json!("edited"))
        );
        assert_eq!(
            BoundPath::parse("platforms[2].name").unwrap().get(&doc),
            Some(&json!("b"))
        );
    }
}
