//! Handlers for page sections.
//!
//! Section content is a schema-validated JSON document: creates and content
//! writes pass through the same validation gate as site-wide content, and
//! the editor form is generated from the section type's schema.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use qoupl_core::error::CoreError;
use qoupl_core::form;
use qoupl_core::history::{ChangeAction, EntityKind};
use qoupl_core::path::BoundPath;
use qoupl_core::types::DbId;
use qoupl_db::models::section::{CreateSection, ReorderSections, Section, UpdateSection};
use qoupl_db::repositories::SectionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::content::{
    apply_array_op, build_render_context, require_schema, validation_gate, ArrayOpBody,
};
use crate::handlers::record_history;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /sections/{id}/content`.
#[derive(Debug, Deserialize)]
pub struct SaveSectionContent {
    pub content: Value,
}

async fn find_section(state: &AppState, id: DbId) -> AppResult<Section> {
    SectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "section",
            id,
        }))
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /pages/{id}/sections
pub async fn list_page_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let sections = SectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// GET /sections/{id}
pub async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let section = find_section(&state, id).await?;
    Ok(Json(DataResponse { data: section }))
}

/// POST /sections
///
/// The section type must have a registered schema. Omitted content starts
/// as the schema's defaults; provided content must validate.
pub async fn create_section(
    State(state): State<AppState>,
    Json(dto): Json<CreateSection>,
) -> AppResult<impl IntoResponse> {
    let schema = require_schema(&dto.section_type)?;

    let content = match &dto.content {
        Some(content) => {
            validation_gate(&schema, content)?;
            schema.apply_defaults(Some(content))
        }
        None => schema.apply_defaults(None),
    };

    let section = SectionRepo::create(&state.pool, &dto, &content).await?;
    record_history(
        &state.pool,
        EntityKind::Section,
        section.id,
        ChangeAction::Created,
    )
    .await;
    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PATCH /sections/{id}
///
/// Content included in the patch passes the validation gate first.
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut dto): Json<UpdateSection>,
) -> AppResult<impl IntoResponse> {
    let section = find_section(&state, id).await?;

    if let Some(content) = &dto.content {
        let schema = require_schema(&section.section_type)?;
        validation_gate(&schema, content)?;
        dto.content = Some(schema.apply_defaults(Some(content)));
    }

    let updated = SectionRepo::update(&state.pool, id, &dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "section",
            id,
        }))?;
    record_history(&state.pool, EntityKind::Section, id, ChangeAction::Updated).await;
    Ok(Json(DataResponse { data: updated }))
}

/// PUT /sections/{id}/content
///
/// Replace a section's content document after validation.
pub async fn save_section_content(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<SaveSectionContent>,
) -> AppResult<impl IntoResponse> {
    let section = find_section(&state, id).await?;
    let schema = require_schema(&section.section_type)?;

    validation_gate(&schema, &body.content)?;
    let normalized = schema.apply_defaults(Some(&body.content));

    let updated = SectionRepo::set_content(&state.pool, id, &normalized)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "section",
            id,
        }))?;
    record_history(&state.pool, EntityKind::Section, id, ChangeAction::Updated).await;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /sections/{id}
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SectionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "section",
            id,
        }));
    }
    record_history(&state.pool, EntityKind::Section, id, ChangeAction::Deleted).await;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /pages/{id}/sections/reorder
///
/// Logged as a single update on the owning page, not one event per moved
/// section.
pub async fn reorder_sections(
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(dto): Json<ReorderSections>,
) -> AppResult<impl IntoResponse> {
    SectionRepo::reorder(&state.pool, page_id, &dto.section_ids).await?;
    record_history(&state.pool, EntityKind::Page, page_id, ChangeAction::Updated).await;
    let sections = SectionRepo::list_for_page(&state.pool, page_id).await?;
    Ok(Json(DataResponse { data: sections }))
}

// ---------------------------------------------------------------------------
// Forms and array operations
// ---------------------------------------------------------------------------

/// GET /sections/{id}/form
///
/// Render the editor form for a section's content document.
pub async fn render_section_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let section = find_section(&state, id).await?;
    let schema = require_schema(&section.section_type)?;
    let document = schema.apply_defaults(Some(&section.content));

    let ctx = build_render_context(&state).await?;
    let field = form::render_form(
        &schema,
        &section.section_type,
        &BoundPath::root(),
        &document,
        &ctx,
    );

    Ok(Json(DataResponse { data: field }))
}

/// POST /sections/{id}/array
///
/// Apply a push/remove/move operation to an array inside a section's
/// content document.
pub async fn section_array_op(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(op): Json<ArrayOpBody>,
) -> AppResult<impl IntoResponse> {
    let section = find_section(&state, id).await?;
    let schema = require_schema(&section.section_type)?;
    let document = schema.apply_defaults(Some(&section.content));

    let updated = apply_array_op(&schema, &document, &op)?;
    let saved = SectionRepo::set_content(&state.pool, id, &updated)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "section",
            id,
        }))?;
    record_history(&state.pool, EntityKind::Section, id, ChangeAction::Updated).await;
    Ok(Json(DataResponse { data: saved }))
}
