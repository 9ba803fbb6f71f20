//! NEO CSV Loader Module
//! Reads the small-body designation table into `NearEarthObject` records.

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::LoadError;
use crate::models::NearEarthObject;

/// Column holding the join key shared with the close-approach data.
pub const DESIGNATION_COLUMN: &str = "pdes";
pub const NAME_COLUMN: &str = "name";
pub const DIAMETER_COLUMN: &str = "diameter";
pub const FULLNAME_COLUMN: &str = "full_name";
pub const HAZARDOUS_COLUMN: &str = "pha";

/// Raw `pha` value marking a potentially hazardous asteroid.
pub const HAZARDOUS_MARKER: &str = "Y";

/// NEOs in file order, indexed by designation.
#[derive(Debug, Default, Clone)]
pub struct NeoIndex {
    neos: Vec<NearEarthObject>,
    by_designation: HashMap<String, usize>,
}

impl NeoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; returns `false` (and keeps the first) on a duplicate designation.
    pub fn insert(&mut self, neo: NearEarthObject) -> bool {
        if self.by_designation.contains_key(&neo.designation) {
            return false;
        }
        self.by_designation
            .insert(neo.designation.clone(), self.neos.len());
        self.neos.push(neo);
        true
    }

    pub fn len(&self) -> usize {
        self.neos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neos.is_empty()
    }

    pub fn get(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|&i| &self.neos[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &NearEarthObject> {
        self.neos.iter()
    }

    pub(crate) fn into_parts(self) -> (Vec<NearEarthObject>, HashMap<String, usize>) {
        (self.neos, self.by_designation)
    }
}

/// Header positions of the columns we read.
struct Columns {
    designation: usize,
    name: usize,
    diameter: usize,
    fullname: usize,
    hazardous: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, &'static str> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or(column)
        };

        Ok(Self {
            designation: find(DESIGNATION_COLUMN)?,
            name: find(NAME_COLUMN)?,
            diameter: find(DIAMETER_COLUMN)?,
            fullname: find(FULLNAME_COLUMN)?,
            hazardous: find(HAZARDOUS_COLUMN)?,
        })
    }
}

/// Load NEOs from a CSV file with a header row.
pub fn load_neos(path: impl AsRef<Path>) -> Result<NeoIndex, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    let index = read_neos(path, file)?;

    tracing::debug!("Loaded {} NEOs from {}", index.len(), path.display());
    Ok(index)
}

/// Load NEOs from CSV text already held by the caller.
pub fn load_neos_from_reader<R: Read>(reader: R) -> Result<NeoIndex, LoadError> {
    read_neos(Path::new("<reader>"), reader)
}

fn read_neos<R: Read>(path: &Path, source: R) -> Result<NeoIndex, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let columns = Columns::locate(&headers).map_err(|missing| {
        LoadError::format(path, format!("missing required column `{missing}` in header"))
    })?;

    let mut index = NeoIndex::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let neo = parse_row(path, line, &columns, &record)?;

        let designation = neo.designation.clone();
        if !index.insert(neo) {
            return Err(LoadError::format(
                path,
                format!("duplicate designation `{designation}` on line {line}"),
            ));
        }
    }

    Ok(index)
}

fn parse_row(
    path: &Path,
    line: u64,
    columns: &Columns,
    record: &StringRecord,
) -> Result<NearEarthObject, LoadError> {
    // Row length already matches the header, so every column index is present.
    let field = |idx: usize| record.get(idx).unwrap_or_default();

    let designation = field(columns.designation);
    if designation.is_empty() {
        return Err(LoadError::format(
            path,
            format!("empty designation on line {line}"),
        ));
    }

    let name = match field(columns.name) {
        "" => None,
        name => Some(name.to_string()),
    };

    let raw_diameter = field(columns.diameter);
    let diameter = if raw_diameter.is_empty() {
        f64::NAN
    } else {
        raw_diameter
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite() && *d >= 0.0)
            .ok_or_else(|| {
                LoadError::parse(path, DIAMETER_COLUMN, format!("line {line}"), raw_diameter)
            })?
    };

    Ok(NearEarthObject {
        designation: designation.to_string(),
        name,
        diameter,
        fullname: field(columns.fullname).to_string(),
        hazardous: field(columns.hazardous) == HAZARDOUS_MARKER,
        approaches: Vec::new(),
    })
}

fn csv_error(path: &Path, err: csv::Error) -> LoadError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::from_io(path, source),
        _ => LoadError::format(path, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LoadErrorKind;

    const HEADER: &str = "id,name,pdes,full_name,diameter,pha\n";

    fn load(body: &str) -> Result<NeoIndex, LoadError> {
        load_neos_from_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn eros_row_is_keyed_by_pdes() {
        let index = load("2000433,Eros,433,433 Eros,16.84,N\n").unwrap();
        assert_eq!(index.len(), 1);

        let eros = index.get("433").expect("keyed by pdes");
        assert_eq!(eros.name.as_deref(), Some("Eros"));
        assert_eq!(eros.diameter, 16.84);
        assert_eq!(eros.fullname, "433 Eros");
        assert!(!eros.hazardous);
        assert!(index.get("2000433").is_none());
    }

    #[test]
    fn blank_fields_take_defaults() {
        let index = load("3000001,,2020 AB,2020 AB,,\n").unwrap();
        let neo = index.get("2020 AB").unwrap();
        assert!(neo.name.is_none());
        assert!(neo.diameter.is_nan());
        assert!(!neo.hazardous);
    }

    #[test]
    fn hazardous_only_for_exact_marker() {
        let index = load(
            "1,,a,a,,Y\n\
             2,,b,b,,y\n\
             3,,c,c,,N\n\
             4,,d,d,,Yes\n\
             5,,e,e,, Y\n",
        )
        .unwrap();
        let flags: Vec<bool> = index.iter().map(|n| n.hazardous).collect();
        assert_eq!(flags, vec![true, false, false, false, false]);
    }

    #[test]
    fn header_only_yields_empty_index() {
        let index = load("").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn malformed_diameter_is_parse_error() {
        let err = load("1,,a,a,big,N\n").unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Parse);
    }

    #[test]
    fn blank_but_not_empty_diameter_is_parse_error() {
        let err = load("1,,a,a,   ,N\n").unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Parse);
    }

    #[test]
    fn negative_or_non_finite_diameter_is_parse_error() {
        for raw in ["-5", "inf", "NaN", "-0.1"] {
            let err = load(&format!("1,,a,a,{raw},N\n")).unwrap_err();
            assert_eq!(err.kind(), LoadErrorKind::Parse, "{raw}");
        }

        let index = load("1,,a,a, 0.25 ,N\n2,,b,b,0,N\n").unwrap();
        assert_eq!(index.get("a").unwrap().diameter, 0.25);
        assert_eq!(index.get("b").unwrap().diameter, 0.0);
    }

    #[test]
    fn ragged_row_is_format_error() {
        let err = load("1,,a,a,1.0\n").unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Format);
    }

    #[test]
    fn missing_column_is_format_error() {
        let err = load_neos_from_reader("id,name,full_name,diameter,pha\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Format);
        assert!(err.to_string().contains("pdes"));
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = load_neos_from_reader("".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Format);
    }

    #[test]
    fn duplicate_and_empty_designations_are_rejected() {
        let dup = load("1,,a,a,,N\n2,,a,a2,,N\n").unwrap_err();
        assert_eq!(dup.kind(), LoadErrorKind::Format);

        let empty = load("1,,,a,,N\n").unwrap_err();
        assert_eq!(empty.kind(), LoadErrorKind::Format);
    }

    #[test]
    fn columns_match_by_name_not_position() {
        let csv = "pha,diameter,full_name,pdes,name\nY,0.5,1999 XY,1999 XY,\n";
        let index = load_neos_from_reader(csv.as_bytes()).unwrap();
        let neo = index.get("1999 XY").unwrap();
        assert!(neo.hazardous);
        assert_eq!(neo.diameter, 0.5);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = load_neos("/definitely/not/here/neos.csv").unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::FileNotFound);
    }
}
