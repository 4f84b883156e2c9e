//! Fragment download handler

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use fragment_index::ServeError;

use crate::{
    ctx::Ctx,
    handlers::error::{ErrorResponse, IntoErrorResponse},
};

/// Handler for the `GET /api/fragments/{filename}` endpoint
///
/// Returns the raw bytes of one fragment file. The filename is taken verbatim
/// from the request path and must be a bare file name; anything attempting to
/// escape the fragment directory is rejected before any filesystem lookup.
///
/// ## Response
/// - **200 OK**: the file's exact bytes as `application/octet-stream`
/// - **400 Bad Request**: the name contains a path separator or directory reference
/// - **404 Not Found**: no fragment file exists under that name
#[tracing::instrument(skip_all, err)]
pub async fn handler(
    State(ctx): State<Ctx>,
    Path(filename): Path<String>,
) -> Result<Response, ErrorResponse> {
    let bytes = ctx.fragment_store.read(&filename).map_err(|err| {
        tracing::debug!(error = %err, filename = %filename, "failed to serve fragment");
        err
    })?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        Body::from(bytes),
    )
        .into_response())
}

impl IntoErrorResponse for ServeError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServeError::InvalidName { .. } => StatusCode::BAD_REQUEST,
            ServeError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServeError::Read { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
