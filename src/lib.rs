//! NEO Extract - near-Earth object and close-approach loading
//!
//! Reads the small-body CSV table and the close-approach JSON table, then links
//! each approach to its NEO by designation.

pub mod config;
pub mod data;
pub mod models;

pub use config::{ConfigError, ExtractConfig};
pub use data::{
    link, load_approaches, load_catalog, load_neos, Catalog, LoadError, LoadErrorKind, NeoIndex,
    NeoTable,
};
pub use models::{CloseApproach, NearEarthObject, NeoId};
