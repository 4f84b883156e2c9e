//! IFC listing and conversion status handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};

use crate::{
    ctx::{Ctx, IFC_EXT},
    handlers::common::size_mb,
};

/// Handler for the `GET /api/ifc` endpoint
///
/// Lists the source IFC files and reports, for each, whether a converted
/// fragment counterpart currently exists. The relationship is purely
/// name-based: the expected fragment name is derived from the source name and
/// checked against the fragment directory on every request.
#[tracing::instrument(skip_all)]
pub async fn handler(State(ctx): State<Ctx>) -> Json<IfcFilesResponse> {
    let listing = ctx.ifc_index.scan();

    let ifc_files = listing
        .entries
        .iter()
        .map(|entry| {
            let status = ctx.fragment_index.fragment_status(&entry.file_name, IFC_EXT);
            IfcFileInfo {
                filename: entry.file_name.clone(),
                size_mb: size_mb(entry.size_bytes),
                modified: entry.modified,
                has_fragments: status.exists(),
                fragment_size_mb: status.size_bytes.map(size_mb),
                fragment_file: status.exists().then_some(status.fragment_file),
            }
        })
        .collect();

    Json(IfcFilesResponse {
        count: listing.count(),
        total_size_mb: size_mb(listing.total_size_bytes),
        ifc_files,
    })
}

/// API response listing source files and their conversion status
#[derive(Debug, serde::Serialize)]
pub struct IfcFilesResponse {
    pub ifc_files: Vec<IfcFileInfo>,
    pub count: usize,
    /// Sum of the raw byte sizes, rounded to MB only for display.
    pub total_size_mb: f64,
}

/// One source file plus its fragment correlation
#[derive(Debug, serde::Serialize)]
pub struct IfcFileInfo {
    pub filename: String,
    pub size_mb: f64,
    pub modified: DateTime<Utc>,
    /// Whether a fragment counterpart exists at this moment.
    pub has_fragments: bool,
    /// Mapped fragment file name, present iff the counterpart exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_file: Option<String>,
    /// Fragment size, present iff the counterpart exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_size_mb: Option<f64>,
}
