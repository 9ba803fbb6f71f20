//! Close-approach record.

use super::NeoId;

/// One recorded pass of a NEO near Earth.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    pub designation: String,
    /// Epoch as written in the source, e.g. `"1900-Jan-01 00:11"`.
    pub time: String,
    /// Astronomical units.
    pub distance: f64,
    /// Relative velocity, km/s.
    pub velocity: f64,
    /// Owner in the linked table, `None` until linked.
    pub neo: Option<NeoId>,
}

impl CloseApproach {
    pub fn new(designation: impl Into<String>, time: impl Into<String>, distance: f64, velocity: f64) -> Self {
        Self {
            designation: designation.into(),
            time: time.into(),
            distance,
            velocity,
            neo: None,
        }
    }

    pub fn is_linked(&self) -> bool {
        self.neo.is_some()
    }
}
