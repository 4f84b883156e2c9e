//! Fragment listing handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use fragment_index::FileEntry;

use crate::{ctx::Ctx, handlers::common::size_mb};

/// Handler for the `GET /api/fragments` endpoint
///
/// Lists the converted fragment files currently on disk. The directory is
/// re-scanned on every request; nothing is cached between calls.
#[tracing::instrument(skip_all)]
pub async fn handler(State(ctx): State<Ctx>) -> Json<FragmentsResponse> {
    let listing = ctx.fragment_index.scan();

    let fragments = listing.entries.iter().map(FragmentInfo::from).collect();

    Json(FragmentsResponse {
        count: listing.count(),
        total_size_mb: size_mb(listing.total_size_bytes),
        fragments,
    })
}

/// API response listing the available fragment files
#[derive(Debug, serde::Serialize)]
pub struct FragmentsResponse {
    pub fragments: Vec<FragmentInfo>,
    pub count: usize,
    /// Sum of the raw byte sizes, rounded to MB only for display.
    pub total_size_mb: f64,
}

/// One fragment file in the listing
#[derive(Debug, serde::Serialize)]
pub struct FragmentInfo {
    pub filename: String,
    pub size_mb: f64,
    /// Creation timestamp, omitted when the filesystem cannot report one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    pub modified: DateTime<Utc>,
    /// Download path for this fragment.
    pub url: String,
}

impl From<&FileEntry> for FragmentInfo {
    fn from(entry: &FileEntry) -> Self {
        Self {
            filename: entry.file_name.clone(),
            size_mb: size_mb(entry.size_bytes),
            created: entry.created,
            modified: entry.modified,
            url: format!("/api/fragments/{}", entry.file_name),
        }
    }
}
