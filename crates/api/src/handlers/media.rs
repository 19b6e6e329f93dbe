//! Handlers for media uploads.
//!
//! Uploads arrive as multipart form data. The bytes are pushed to object
//! storage first; only after a successful store is the metadata row
//! inserted, so the table never references an object that does not exist.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use qoupl_core::error::CoreError;
use qoupl_core::types::DbId;
use qoupl_db::models::media::CreateMediaAsset;
use qoupl_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /media
pub async fn list_media(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = MediaRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// GET /media/{id}
pub async fn get_media(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "media asset",
            id,
        }))?;
    Ok(Json(DataResponse { data: asset }))
}

/// POST /media
///
/// Accept a multipart upload. The first `file` field is stored; other
/// fields are ignored.
pub async fn upload_media(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(sanitize_file_name)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("Upload is missing a file name".into()))?;
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        // Prefix with a UUID so repeated uploads of the same file never collide.
        let object_path = format!("{}/{}", Uuid::new_v4(), file_name);

        state
            .storage
            .put(&object_path, &content_type, bytes.to_vec())
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let asset = MediaRepo::create(
            &state.pool,
            &CreateMediaAsset {
                file_name,
                public_url: state.storage.public_url(&object_path),
                object_path,
                content_type,
                size_bytes: bytes.len() as i64,
            },
        )
        .await?;

        return Ok((StatusCode::CREATED, Json(DataResponse { data: asset })));
    }

    Err(AppError::BadRequest(
        "Multipart body has no 'file' field".into(),
    ))
}

/// DELETE /media/{id}
///
/// Removes the metadata row. The stored object is left in place.
pub async fn delete_media(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MediaRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "media asset",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Keep only path-safe characters from a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sanitize_file_name;

    #[test]
    fn sanitize_strips_path_separators() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("hero image.png"), "hero_image.png");
        assert_eq!(sanitize_file_name("logo.svg"), "logo.svg");
    }
}
