//! Models module - NEO and close-approach records

mod approach;
mod neo;

pub use approach::CloseApproach;
pub use neo::{NearEarthObject, NeoId};
