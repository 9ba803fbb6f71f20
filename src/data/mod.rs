//! Data module - CSV/JSON loading and linking

mod approach_loader;
mod catalog;
mod error;
mod frame;
mod linker;
mod neo_loader;

pub use approach_loader::{group_by_designation, load_approaches, load_approaches_from_reader};
pub use catalog::{load_catalog, Catalog};
pub use error::{LoadError, LoadErrorKind};
pub use frame::{approaches_to_dataframe, filter_hazardous, neos_to_dataframe, FrameError};
pub use linker::{link, NeoTable};
pub use neo_loader::{load_neos, load_neos_from_reader, NeoIndex, HAZARDOUS_MARKER};
