//! Recursive content-schema description and document validation.
//!
//! A [`SchemaNode`] tree drives three things: defaulting (every node resolves
//! to a concrete default, so rendered forms never see a missing value),
//! validation (field-level issue list gating every save), and form rendering
//! (see [`crate::form`]). The tree is built once per content key by
//! [`crate::registry`] and is immutable at runtime.

use serde::Serialize;
use serde_json::{Map, Number, Value};

// ---------------------------------------------------------------------------
// Schema tree
// ---------------------------------------------------------------------------

/// A named child of an object-kind schema node.
#[derive(Debug, Clone)]
pub struct SchemaField {
    /// Machine-readable key in the stored JSON document.
    pub name: String,
    /// Human-readable label for the editing form.
    pub label: String,
    pub node: SchemaNode,
}

impl SchemaField {
    pub fn new(name: &str, label: &str, node: SchemaNode) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            node,
        }
    }
}

/// One node of a content schema.
///
/// The enum is closed: dispatching on it is exhaustive, so adding a new field
/// kind is a compile-time-checked change. `Unsupported` exists for schema
/// entries this renderer does not understand -- it renders as a visible
/// placeholder instead of blanking the form.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// Free text. Defaults to `default` (usually empty).
    Text { default: String },
    /// Numeric input with optional inclusive bounds.
    Number {
        default: Number,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Boolean toggle.
    Toggle { default: bool },
    /// Single choice from a fixed list.
    Select { choices: Vec<String>, default: String },
    /// A storage reference (`bucket/path` string), never inline bytes.
    Image,
    /// A link target (page slug or absolute URL).
    Link,
    /// Repeatable list of one item schema.
    Array { item: Box<SchemaNode> },
    /// Nested object with an ordered set of named children.
    Object { fields: Vec<SchemaField> },
    /// A kind this renderer does not know how to edit.
    Unsupported { kind: String },
}

impl SchemaNode {
    pub fn text() -> Self {
        Self::Text {
            default: String::new(),
        }
    }

    pub fn text_with(default: &str) -> Self {
        Self::Text {
            default: default.to_string(),
        }
    }

    pub fn number() -> Self {
        Self::Number {
            default: Number::from(0),
            min: None,
            max: None,
        }
    }

    pub fn number_bounded(min: f64, max: f64) -> Self {
        Self::Number {
            default: Number::from(0),
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn toggle(default: bool) -> Self {
        Self::Toggle { default }
    }

    pub fn select(choices: &[&str]) -> Self {
        let choices: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
        let default = choices.first().cloned().unwrap_or_default();
        Self::Select { choices, default }
    }

    pub fn array(item: SchemaNode) -> Self {
        Self::Array {
            item: Box::new(item),
        }
    }

    pub fn object(fields: Vec<SchemaField>) -> Self {
        Self::Object { fields }
    }

    /// Short kind tag, used in issue messages and placeholder rendering.
    pub fn kind(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Number { .. } => "number",
            Self::Toggle { .. } => "toggle",
            Self::Select { .. } => "select",
            Self::Image => "image",
            Self::Link => "link",
            Self::Array { .. } => "array",
            Self::Object { .. } => "object",
            Self::Unsupported { kind } => kind,
        }
    }

    // -----------------------------------------------------------------------
    // Defaulting
    // -----------------------------------------------------------------------

    /// The concrete default value for this node.
    ///
    /// Every node resolves to something renderable: empty string, zero,
    /// false, first choice, empty array, or an object of child defaults.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Text { default } => Value::String(default.clone()),
            Self::Number { default, .. } => Value::Number(default.clone()),
            Self::Toggle { default } => Value::Bool(*default),
            Self::Select { default, .. } => Value::String(default.clone()),
            Self::Image | Self::Link => Value::String(String::new()),
            Self::Array { .. } => Value::Array(vec![]),
            Self::Object { fields } => {
                let mut map = Map::new();
                for field in fields {
                    map.insert(field.name.clone(), field.node.default_value());
                }
                Value::Object(map)
            }
            Self::Unsupported { .. } => Value::Null,
        }
    }

    /// Merge a stored document over this schema's defaults.
    ///
    /// Missing or wrong-typed values fall back to the default; unknown object
    /// keys are dropped. The output always has exactly the schema's shape and
    /// re-validates, and the operation is idempotent.
    pub fn apply_defaults(&self, value: Option<&Value>) -> Value {
        match self {
            Self::Text { default } => match value {
                Some(Value::String(s)) => Value::String(s.clone()),
                _ => Value::String(default.clone()),
            },
            Self::Number { default, .. } => match value {
                Some(Value::Number(n)) => Value::Number(n.clone()),
                _ => Value::Number(default.clone()),
            },
            Self::Toggle { default } => match value {
                Some(Value::Bool(b)) => Value::Bool(*b),
                _ => Value::Bool(*default),
            },
            Self::Select { choices, default } => match value {
                Some(Value::String(s)) if choices.iter().any(|c| c == s) => {
                    Value::String(s.clone())
                }
                _ => Value::String(default.clone()),
            },
            Self::Image | Self::Link => match value {
                Some(Value::String(s)) => Value::String(s.clone()),
                _ => Value::String(String::new()),
            },
            Self::Array { item } => match value {
                Some(Value::Array(items)) => Value::Array(
                    items.iter().map(|v| item.apply_defaults(Some(v))).collect(),
                ),
                _ => Value::Array(vec![]),
            },
            Self::Object { fields } => {
                let stored = value.and_then(|v| v.as_object());
                let mut map = Map::new();
                for field in fields {
                    let child = stored.and_then(|m| m.get(&field.name));
                    map.insert(field.name.clone(), field.node.apply_defaults(child));
                }
                Value::Object(map)
            }
            Self::Unsupported { .. } => value.cloned().unwrap_or(Value::Null),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Validate a candidate document against this schema.
    ///
    /// Returns an empty list when the document conforms. Each issue carries
    /// the dot/bracket path of the offending field so the admin UI can attach
    /// messages inline.
    pub fn validate(&self, value: &Value) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        self.validate_at("", value, &mut issues);
        issues
    }

    fn validate_at(&self, path: &str, value: &Value, issues: &mut Vec<FieldIssue>) {
        match self {
            Self::Text { .. } => {
                if !value.is_string() {
                    issues.push(FieldIssue::new(path, "must be a string"));
                }
            }
            Self::Number { min, max, .. } => match value.as_f64() {
                Some(n) => {
                    if let Some(lo) = min {
                        if n < *lo {
                            issues.push(FieldIssue::new(path, &format!("must be >= {lo}")));
                        }
                    }
                    if let Some(hi) = max {
                        if n > *hi {
                            issues.push(FieldIssue::new(path, &format!("must be <= {hi}")));
                        }
                    }
                }
                None => issues.push(FieldIssue::new(path, "must be a number")),
            },
            Self::Toggle { .. } => {
                if !value.is_boolean() {
                    issues.push(FieldIssue::new(path, "must be a boolean"));
                }
            }
            Self::Select { choices, .. } => match value.as_str() {
                Some(s) if choices.iter().any(|c| c == s) => {}
                Some(s) => issues.push(FieldIssue::new(
                    path,
                    &format!("'{}' is not one of: {}", s, choices.join(", ")),
                )),
                None => issues.push(FieldIssue::new(path, "must be a string")),
            },
            Self::Image | Self::Link => {
                if !value.is_string() {
                    issues.push(FieldIssue::new(path, "must be a string"));
                }
            }
            Self::Array { item } => match value.as_array() {
                Some(items) => {
                    for (i, v) in items.iter().enumerate() {
                        item.validate_at(&format!("{path}[{i}]"), v, issues);
                    }
                }
                None => issues.push(FieldIssue::new(path, "must be an array")),
            },
            Self::Object { fields } => match value.as_object() {
                Some(map) => {
                    for field in fields {
                        let child_path = join_path(path, &field.name);
                        match map.get(&field.name) {
                            Some(v) => field.node.validate_at(&child_path, v, issues),
                            None => issues
                                .push(FieldIssue::new(&child_path, "missing required field")),
                        }
                    }
                    for key in map.keys() {
                        if !fields.iter().any(|f| &f.name == key) {
                            issues.push(FieldIssue::new(
                                &join_path(path, key),
                                "unknown field",
                            ));
                        }
                    }
                }
                None => issues.push(FieldIssue::new(path, "must be an object")),
            },
            // Unknown kinds never block a save of the rest of the document.
            Self::Unsupported { .. } => {}
        }
    }
}

fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}.{name}")
    }
}

// ---------------------------------------------------------------------------
// Field issues
// ---------------------------------------------------------------------------

/// One validation problem, addressed by document path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    fn new(path: &str, message: &str) -> Self {
        Self {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
