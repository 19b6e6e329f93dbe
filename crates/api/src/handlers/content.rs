//! Handlers for site-wide content documents.
//!
//! Every read resolves the stored document against its schema (filling in
//! defaults for missing fields), and every write passes through the schema
//! validation gate. An unregistered content key is an explicit error, never
//! an empty form.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use qoupl_core::error::CoreError;
use qoupl_core::form::{self, LinkTarget, RenderContext};
use qoupl_core::path::BoundPath;
use qoupl_core::registry;
use qoupl_core::schema::SchemaNode;
use qoupl_core::types::Timestamp;
use qoupl_db::repositories::{GlobalContentRepo, PageRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /content/{key}`.
#[derive(Debug, Deserialize)]
pub struct SaveContentBody {
    pub content: Value,
}

/// A resolved content document.
#[derive(Debug, Serialize)]
pub struct ContentDocument {
    pub key: String,
    pub content: Value,
    /// Absent when the key has never been saved and defaults were used.
    pub updated_at: Option<Timestamp>,
}

/// Request body for `POST /content/{key}/array`.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ArrayOpBody {
    /// Append an item; omitted items materialize as schema defaults.
    Push { path: String, item: Option<Value> },
    Remove { path: String, index: usize },
    Move { path: String, from: usize, to: usize },
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up a registered schema or fail with an explicit error.
pub(crate) fn require_schema(key: &str) -> AppResult<SchemaNode> {
    registry::schema_for(key)
        .ok_or_else(|| AppError::Core(CoreError::UnknownSchema(key.to_string())))
}

/// Validate a document against its schema, collecting all issues.
pub(crate) fn validation_gate(schema: &SchemaNode, content: &Value) -> AppResult<()> {
    let issues = schema.validate(content);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(issues))
    }
}

/// Build the render context for form generation: storage bucket for image
/// pickers and the current page list for link pickers.
pub(crate) async fn build_render_context(state: &AppState) -> AppResult<RenderContext> {
    let pages = PageRepo::list(&state.pool).await?;
    Ok(RenderContext {
        bucket: state.config.storage_bucket.clone(),
        pages: pages
            .into_iter()
            .map(|p| LinkTarget {
                slug: p.slug,
                title: p.title,
            })
            .collect(),
    })
}

// ---------------------------------------------------------------------------
// Content documents
// ---------------------------------------------------------------------------

/// GET /content
///
/// List all stored content documents.
pub async fn list_content(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let documents = GlobalContentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: documents }))
}

/// GET /content/{key}
///
/// Resolve the document for a content key. Fields absent from the stored
/// document come back as schema defaults; a never-saved key yields the
/// fully defaulted document.
pub async fn get_content(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let schema = require_schema(&key)?;
    let stored = GlobalContentRepo::find_by_key(&state.pool, &key).await?;

    let (content, updated_at) = match &stored {
        Some(row) => (schema.apply_defaults(Some(&row.content)), Some(row.updated_at)),
        None => (schema.apply_defaults(None), None),
    };

    Ok(Json(DataResponse {
        data: ContentDocument {
            key,
            content,
            updated_at,
        },
    }))
}

/// PUT /content/{key}
///
/// Validate and save a content document. The document is normalized
/// (defaults applied) before storage; concurrent saves resolve last write
/// wins.
pub async fn save_content(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<SaveContentBody>,
) -> AppResult<impl IntoResponse> {
    let schema = require_schema(&key)?;
    validation_gate(&schema, &body.content)?;

    let normalized = schema.apply_defaults(Some(&body.content));
    let saved = GlobalContentRepo::upsert(&state.pool, &key, &normalized).await?;

    Ok(Json(DataResponse { data: saved }))
}

// ---------------------------------------------------------------------------
// Form rendering
// ---------------------------------------------------------------------------

/// GET /content/{key}/form
///
/// Render the editor form for a content key: the schema walked against the
/// current document, producing a field tree the admin frontend displays
/// directly.
pub async fn render_content_form(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let schema = require_schema(&key)?;
    let stored = GlobalContentRepo::find_by_key(&state.pool, &key).await?;
    let document = schema.apply_defaults(stored.as_ref().map(|row| &row.content));

    let ctx = build_render_context(&state).await?;
    let field = form::render_form(&schema, &key, &BoundPath::root(), &document, &ctx);

    Ok(Json(DataResponse { data: field }))
}

// ---------------------------------------------------------------------------
// Array operations
// ---------------------------------------------------------------------------

/// Apply an array operation to a document and return the normalized result.
///
/// Mutation happens on the whole array in one read-modify-write pass, so
/// sibling paths stay consistent with the new indices.
pub(crate) fn apply_array_op(
    schema: &SchemaNode,
    document: &Value,
    op: &ArrayOpBody,
) -> AppResult<Value> {
    let mut doc = document.clone();
    match op {
        ArrayOpBody::Push { path, item } => {
            let path = BoundPath::parse(path).map_err(AppError::Core)?;
            form::array_push(&mut doc, &path, item.clone().unwrap_or(Value::Null));
        }
        ArrayOpBody::Remove { path, index } => {
            let path = BoundPath::parse(path).map_err(AppError::Core)?;
            form::array_remove(&mut doc, &path, *index).map_err(AppError::Core)?;
        }
        ArrayOpBody::Move { path, from, to } => {
            let path = BoundPath::parse(path).map_err(AppError::Core)?;
            form::array_move(&mut doc, &path, *from, *to).map_err(AppError::Core)?;
        }
    }
    // Normalization turns a null pushed item into a fully defaulted one and
    // keeps the document valid for the revalidation gate.
    let normalized = schema.apply_defaults(Some(&doc));
    validation_gate(schema, &normalized)?;
    Ok(normalized)
}

/// POST /content/{key}/array
///
/// Apply a push/remove/move operation to an array inside a content
/// document, persisting the updated document.
pub async fn content_array_op(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(op): Json<ArrayOpBody>,
) -> AppResult<impl IntoResponse> {
    let schema = require_schema(&key)?;
    let stored = GlobalContentRepo::find_by_key(&state.pool, &key).await?;
    let document = schema.apply_defaults(stored.as_ref().map(|row| &row.content));

    let updated = apply_array_op(&schema, &document, &op)?;
    let saved = GlobalContentRepo::upsert(&state.pool, &key, &updated).await?;

    Ok(Json(DataResponse { data: saved }))
}
