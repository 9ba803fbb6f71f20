//! Linker Module
//! Attaches close approaches to their NEOs and builds the queryable table.

use std::collections::HashMap;

use super::neo_loader::NeoIndex;
use crate::models::{CloseApproach, NearEarthObject, NeoId};

/// NEOs with their close approaches attached.
///
/// Each linked approach carries the [`NeoId`] of its owner, resolvable through
/// [`NeoTable::owner_of`].
#[derive(Debug, Default, Clone)]
pub struct NeoTable {
    neos: Vec<NearEarthObject>,
    by_designation: HashMap<String, usize>,
    orphaned: usize,
}

impl NeoTable {
    pub fn len(&self) -> usize {
        self.neos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neos.is_empty()
    }

    pub fn get(&self, designation: &str) -> Option<&NearEarthObject> {
        self.id_of(designation).and_then(|id| self.get_by_id(id))
    }

    pub fn id_of(&self, designation: &str) -> Option<NeoId> {
        self.by_designation.get(designation).copied().map(NeoId)
    }

    pub fn get_by_id(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    /// The NEO an approach was linked to.
    pub fn owner_of(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo.and_then(|id| self.get_by_id(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NearEarthObject> {
        self.neos.iter()
    }

    /// Every linked approach, NEO by NEO.
    pub fn approaches(&self) -> impl Iterator<Item = &CloseApproach> {
        self.neos.iter().flat_map(|neo| neo.approaches.iter())
    }

    pub fn approach_count(&self) -> usize {
        self.neos.iter().map(|neo| neo.approaches.len()).sum()
    }

    /// Approaches dropped because their designation had no NEO.
    pub fn orphaned(&self) -> usize {
        self.orphaned
    }

    pub fn into_neos(self) -> Vec<NearEarthObject> {
        self.neos
    }
}

/// Attach each approach to the NEO sharing its designation.
///
/// Approaches whose designation is unknown are dropped with a warning.
pub fn link(neos: NeoIndex, approaches: Vec<CloseApproach>) -> NeoTable {
    let (mut neos, by_designation) = neos.into_parts();
    let mut orphaned = 0;

    for mut approach in approaches {
        match by_designation.get(&approach.designation) {
            Some(&idx) => {
                approach.neo = Some(NeoId(idx));
                neos[idx].approaches.push(approach);
            }
            None => {
                tracing::warn!(
                    "Dropping close approach at {} for unknown designation {}",
                    approach.time,
                    approach.designation
                );
                orphaned += 1;
            }
        }
    }

    let table = NeoTable {
        neos,
        by_designation,
        orphaned,
    };
    tracing::info!(
        "Linked {} close approaches to {} NEOs ({} orphaned)",
        table.approach_count(),
        table.len(),
        orphaned
    );
    table
}
