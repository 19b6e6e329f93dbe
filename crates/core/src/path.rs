//! Dot/bracket paths binding form fields to locations in a JSON document.
//!
//! A path like `card.platforms[2].name` reads and writes one nested value.
//! Reads never panic: any missing intermediate yields `None`. Writes create
//! missing objects and pad arrays, so a form can bind to a document that does
//! not exist yet.

use std::fmt;

use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Path representation
// ---------------------------------------------------------------------------

/// One step of a [`BoundPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key (`.name`).
    Key(String),
    /// Array index (`[2]`).
    Index(usize),
}

/// A parsed dot/bracket path into a nested document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoundPath {
    segments: Vec<PathSegment>,
}

impl BoundPath {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a textual path. The empty string is the root.
    ///
    /// Accepted grammar: identifiers separated by `.`, with `[n]` index
    /// suffixes, e.g. `card.platforms[2].name`.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let mut segments = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            if let Some(inner) = rest.strip_prefix('[') {
                let end = inner.find(']').ok_or_else(|| {
                    CoreError::Validation(format!("Unterminated index in path '{text}'"))
                })?;
                let index: usize = inner[..end].parse().map_err(|_| {
                    CoreError::Validation(format!("Invalid array index in path '{text}'"))
                })?;
                segments.push(PathSegment::Index(index));
                rest = &inner[end + 1..];
            } else {
                let rest_inner = rest.strip_prefix('.').unwrap_or(rest);
                let end = rest_inner
                    .find(['.', '['])
                    .unwrap_or(rest_inner.len());
                if end == 0 {
                    return Err(CoreError::Validation(format!(
                        "Empty segment in path '{text}'"
                    )));
                }
                segments.push(PathSegment::Key(rest_inner[..end].to_string()));
                rest = &rest_inner[end..];
            }
        }

        Ok(Self { segments })
    }

    /// Extend this path with an object key.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(name.to_string()));
        Self { segments }
    }

    /// Extend this path with an array index.
    pub fn index(&self, i: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(i));
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    // -----------------------------------------------------------------------
    // Document access
    // -----------------------------------------------------------------------

    /// Resolve this path against a document.
    ///
    /// Returns `None` if any intermediate is missing or of the wrong shape.
    pub fn get<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        let mut current = doc;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Key(k) => current.as_object()?.get(k)?,
                PathSegment::Index(i) => current.as_array()?.get(*i)?,
            };
        }
        Some(current)
    }

    /// Write `value` at this path, creating missing intermediates.
    ///
    /// A key step through a non-object replaces it with an object; an index
    /// step through a non-array replaces it with an array padded with nulls.
    /// Setting the root path replaces the whole document.
    pub fn set(&self, doc: &mut Value, value: Value) {
        let mut current = doc;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(k) => {
                    if !current.is_object() {
                        *current = Value::Object(serde_json::Map::new());
                    }
                    current = current
                        .as_object_mut()
                        .expect("just coerced to object")
                        .entry(k.clone())
                        .or_insert(Value::Null);
                }
                PathSegment::Index(i) => {
                    if !current.is_array() {
                        *current = Value::Array(vec![]);
                    }
                    let arr = current.as_array_mut().expect("just coerced to array");
                    while arr.len() <= *i {
                        arr.push(Value::Null);
                    }
                    current = &mut arr[*i];
                }
            }
        }
        *current = value;
    }
}

impl fmt::Display for BoundPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(k) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{k}")?;
                }
                PathSegment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
