//! Directory indexing and fragment serving for converted model files.
//!
//! The filesystem is the source of truth: every listing is recomputed from a
//! fresh directory scan, and the source-to-fragment relationship is re-derived
//! on each call from the file names alone. Nothing is cached and no link is
//! stored anywhere.

pub mod index;
pub mod mapping;
pub mod store;

pub use index::{DirectoryIndex, DirectoryListing, FileEntry, FragmentStatus};
pub use mapping::fragment_name;
pub use store::{FragmentStore, ServeError};
