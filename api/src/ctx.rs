//! Service context

use common::config::Config;
use fragment_index::{DirectoryIndex, FragmentStore};

/// File extension of source model files, without the dot.
pub const IFC_EXT: &str = "ifc";
/// File extension of converted fragment files, without the dot.
pub const FRAGMENT_EXT: &str = "frag";

/// The API context
///
/// Holds the indexes and the byte store, constructed once from the config.
/// None of them cache anything; requests sharing a context stay independent.
#[derive(Clone)]
pub struct Ctx {
    pub ifc_index: DirectoryIndex,
    pub fragment_index: DirectoryIndex,
    pub fragment_store: FragmentStore,
}

impl Ctx {
    pub fn new(config: &Config) -> Self {
        Self {
            ifc_index: DirectoryIndex::new(&config.ifc_dir, IFC_EXT),
            fragment_index: DirectoryIndex::new(&config.fragments_dir, FRAGMENT_EXT),
            fragment_store: FragmentStore::new(&config.fragments_dir),
        }
    }
}
