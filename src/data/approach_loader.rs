//! Close-Approach JSON Loader Module
//! Reads the positional `{"data": [[...], ...]}` close-approach table.

use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::error::LoadError;
use crate::models::CloseApproach;

pub const DESIGNATION_POS: usize = 0;
pub const TIME_POS: usize = 3;
pub const DISTANCE_POS: usize = 4;
pub const VELOCITY_POS: usize = 7;

/// Shortest row that still carries every field we read.
const MIN_ROW_LEN: usize = VELOCITY_POS + 1;

/// Load close approaches from a JSON file, in file order.
pub fn load_approaches(path: impl AsRef<Path>) -> Result<Vec<CloseApproach>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    let approaches = read_approaches(path, BufReader::new(file))?;

    tracing::debug!(
        "Loaded {} close approaches from {}",
        approaches.len(),
        path.display()
    );
    Ok(approaches)
}

/// Load close approaches from JSON text already held by the caller.
pub fn load_approaches_from_reader<R: Read>(reader: R) -> Result<Vec<CloseApproach>, LoadError> {
    read_approaches(Path::new("<reader>"), reader)
}

/// Group approaches by designation.
///
/// Groups appear in first-seen order and keep the input order within each group.
pub fn group_by_designation(approaches: &[CloseApproach]) -> Vec<(String, Vec<CloseApproach>)> {
    let mut groups: Vec<(String, Vec<CloseApproach>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for approach in approaches {
        let slot = *slots.entry(approach.designation.as_str()).or_insert_with(|| {
            groups.push((approach.designation.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(approach.clone());
    }

    groups
}

fn read_approaches<R: Read>(path: &Path, source: R) -> Result<Vec<CloseApproach>, LoadError> {
    let document: Value = serde_json::from_reader(source).map_err(|e| {
        if e.is_io() {
            LoadError::from_io(path, e.into())
        } else {
            LoadError::format(path, format!("invalid JSON: {e}"))
        }
    })?;

    let rows = document
        .get("data")
        .ok_or_else(|| LoadError::format(path, "missing `data` field"))?
        .as_array()
        .ok_or_else(|| LoadError::format(path, "`data` is not an array"))?;

    rows.iter()
        .enumerate()
        .map(|(idx, row)| parse_row(path, idx, row))
        .collect()
}

fn parse_row(path: &Path, idx: usize, row: &Value) -> Result<CloseApproach, LoadError> {
    let fields = row
        .as_array()
        .ok_or_else(|| LoadError::format(path, format!("row {idx} is not an array")))?;
    if fields.len() < MIN_ROW_LEN {
        return Err(LoadError::format(
            path,
            format!(
                "row {idx} has {} fields, expected at least {MIN_ROW_LEN}",
                fields.len()
            ),
        ));
    }

    let location = || format!("row {idx}");

    let designation = match &fields[DESIGNATION_POS] {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => return Err(LoadError::parse(path, "designation", location(), other.to_string())),
    };

    let time = fields[TIME_POS]
        .as_str()
        .ok_or_else(|| LoadError::parse(path, "time", location(), fields[TIME_POS].to_string()))?
        .to_string();

    let distance = number_field(&fields[DISTANCE_POS])
        .ok_or_else(|| LoadError::parse(path, "distance", location(), fields[DISTANCE_POS].to_string()))?;
    let velocity = number_field(&fields[VELOCITY_POS])
        .ok_or_else(|| LoadError::parse(path, "velocity", location(), fields[VELOCITY_POS].to_string()))?;

    Ok(CloseApproach::new(designation, time, distance, velocity))
}

/// Accepts a JSON number or a string holding one; the close-approach API emits the latter.
fn number_field(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
