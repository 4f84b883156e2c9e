//! System status handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};

use crate::ctx::Ctx;

/// Handler for the `GET /api/status` endpoint
///
/// Coarse conversion progress signal: file counts on both sides plus whether
/// any fragment exists at all. Callers needing per-file status must use the
/// per-file listing instead.
#[tracing::instrument(skip_all)]
pub async fn handler(State(ctx): State<Ctx>) -> Json<StatusResponse> {
    let ifc_files = ctx.ifc_index.count();
    let fragment_files = ctx.fragment_index.count();

    Json(StatusResponse {
        status: "running",
        ifc_files,
        fragment_files,
        conversion_complete: fragment_files > 0,
        timestamp: Utc::now(),
    })
}

#[derive(Debug, serde::Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub ifc_files: usize,
    pub fragment_files: usize,
    /// True iff at least one fragment file exists, regardless of source count.
    pub conversion_complete: bool,
    pub timestamp: DateTime<Utc>,
}
