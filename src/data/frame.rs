//! Frame Export Module
//! Turns a linked `NeoTable` into Polars DataFrames for downstream querying.

use polars::prelude::*;
use thiserror::Error;

use super::linker::NeoTable;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One row per NEO.
///
/// Columns: [designation, name, diameter, fullname, hazardous, approach_count]
pub fn neos_to_dataframe(table: &NeoTable) -> Result<DataFrame, FrameError> {
    let mut designations: Vec<String> = Vec::with_capacity(table.len());
    let mut names: Vec<Option<String>> = Vec::with_capacity(table.len());
    let mut diameters: Vec<f64> = Vec::with_capacity(table.len());
    let mut fullnames: Vec<String> = Vec::with_capacity(table.len());
    let mut hazardous: Vec<bool> = Vec::with_capacity(table.len());
    let mut approach_counts: Vec<u32> = Vec::with_capacity(table.len());

    for neo in table.iter() {
        designations.push(neo.designation.clone());
        names.push(neo.name.clone());
        diameters.push(neo.diameter);
        fullnames.push(neo.fullname.clone());
        hazardous.push(neo.hazardous);
        approach_counts.push(neo.approaches.len() as u32);
    }

    let df = DataFrame::new(vec![
        Column::new("designation".into(), designations),
        Column::new("name".into(), names),
        Column::new("diameter".into(), diameters),
        Column::new("fullname".into(), fullnames),
        Column::new("hazardous".into(), hazardous),
        Column::new("approach_count".into(), approach_counts),
    ])?;

    Ok(df)
}

/// One row per linked close approach.
///
/// Columns: [designation, time, distance, velocity]
pub fn approaches_to_dataframe(table: &NeoTable) -> Result<DataFrame, FrameError> {
    let mut designations: Vec<String> = Vec::new();
    let mut times: Vec<String> = Vec::new();
    let mut distances: Vec<f64> = Vec::new();
    let mut velocities: Vec<f64> = Vec::new();

    for approach in table.approaches() {
        designations.push(approach.designation.clone());
        times.push(approach.time.clone());
        distances.push(approach.distance);
        velocities.push(approach.velocity);
    }

    let df = DataFrame::new(vec![
        Column::new("designation".into(), designations),
        Column::new("time".into(), times),
        Column::new("distance".into(), distances),
        Column::new("velocity".into(), velocities),
    ])?;

    Ok(df)
}

/// Keep only potentially hazardous rows of a NEO frame.
pub fn filter_hazardous(df: &DataFrame) -> Result<DataFrame, FrameError> {
    let filtered = df
        .clone()
        .lazy()
        .filter(col("hazardous").eq(lit(true)))
        .collect()?;
    Ok(filtered)
}
