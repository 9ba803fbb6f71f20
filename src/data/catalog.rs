//! Catalog Module
//! Loads both tables and links them in one call.

use std::path::Path;

use super::approach_loader::load_approaches;
use super::error::LoadError;
use super::linker::{link, NeoTable};
use super::neo_loader::load_neos;
use crate::config::ExtractConfig;

/// Entry point for callers that want a linked table straight from disk.
pub struct Catalog;

impl Catalog {
    /// Load the NEO and close-approach tables named by `config`, then link them.
    ///
    /// With `parallel` set, the two loaders run on the rayon pool and are
    /// joined before linking. If both fail, the NEO error is returned.
    pub fn load(config: &ExtractConfig) -> Result<NeoTable, LoadError> {
        if !config.parallel {
            let neos = load_neos(&config.neo_path)?;
            let approaches = load_approaches(&config.cad_path)?;
            return Ok(link(neos, approaches));
        }

        let (neos, approaches) = rayon::join(
            || load_neos(&config.neo_path),
            || load_approaches(&config.cad_path),
        );
        Ok(link(neos?, approaches?))
    }
}

/// Load and link with default settings.
pub fn load_catalog(
    neo_path: impl AsRef<Path>,
    cad_path: impl AsRef<Path>,
) -> Result<NeoTable, LoadError> {
    let config = ExtractConfig::default().with_paths(neo_path.as_ref(), cad_path.as_ref());
    Catalog::load(&config)
}
