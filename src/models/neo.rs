//! Near-Earth object record.

use std::fmt;

use super::CloseApproach;

/// Position of a NEO inside a linked table.
///
/// Close approaches point back at their owner through this id rather than
/// holding the NEO itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A near-Earth object as read from the small-body table.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    pub designation: String,
    pub name: Option<String>,
    /// Kilometers; `NaN` when the source left it blank.
    pub diameter: f64,
    pub fullname: String,
    pub hazardous: bool,
    /// Filled once by the linker.
    pub approaches: Vec<CloseApproach>,
}

impl NearEarthObject {
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            name: None,
            diameter: f64::NAN,
            fullname: String::new(),
            hazardous: false,
            approaches: Vec::new(),
        }
    }

    /// `"433 (Eros)"`, or the bare designation when there is no common name.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    pub fn has_known_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.display_name())?;
        if self.has_known_diameter() {
            write!(f, " has a diameter of {:.3} km", self.diameter)?;
        } else {
            write!(f, " has an unknown diameter")?;
        }
        if self.hazardous {
            write!(f, " and is potentially hazardous")
        } else {
            write!(f, " and is not potentially hazardous")
        }
    }
}
