use crate::constants::{METERS_PER_AU, REQUIRED_COLUMNS};
use crate::error::LoadError;
use crate::models::{MoonSeries, OrbitRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A row as it appears in the source file, semi-major axis still in AU.
#[derive(Debug, Deserialize)]
struct SourceRow {
    datetime_str: String,
    e: f64,
    a: f64,
}

impl From<SourceRow> for OrbitRecord {
    fn from(row: SourceRow) -> Self {
        OrbitRecord {
            timestamp: row.datetime_str,
            eccentricity: row.e,
            semi_major_axis_m: au_to_meters(row.a),
        }
    }
}

pub fn au_to_meters(au: f64) -> f64 {
    au * METERS_PER_AU
}

/// Loads one moon's time series from a CSV file.
pub fn load_moon_series(moon_name: &str, path: impl AsRef<Path>) -> Result<MoonSeries, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!("Loading {} from {}", moon_name, path.display());
    read_moon_series(moon_name, file)
}

/// Parses CSV data with `datetime_str`, `e` and `a` columns.
///
/// Rows keep their file order. Extra columns are ignored and, when a required
/// column name repeats, the first occurrence wins. Eccentricity is not range
/// checked. The `a` column is converted from AU to meters here and nowhere else.
pub fn read_moon_series<R: Read>(moon_name: &str, reader: R) -> Result<MoonSeries, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    info!(
        "Columns in {}: {:?}",
        moon_name,
        headers.iter().collect::<Vec<_>>()
    );
    let indices = required_column_indices(&headers)?;
    let source_headers = StringRecord::from(REQUIRED_COLUMNS.to_vec());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let selected: StringRecord = indices
            .iter()
            .map(|&idx| record.get(idx).unwrap_or_default())
            .collect();
        let row: SourceRow = selected
            .deserialize(Some(&source_headers))
            .map_err(|err| malformed_value(err, line))?;
        rows.push(OrbitRecord::from(row));
    }

    debug!("Loaded {} rows for {}", rows.len(), moon_name);
    Ok(MoonSeries::new(moon_name, rows))
}

/// Position of the first header matching each required column, in
/// `REQUIRED_COLUMNS` order.
fn required_column_indices(headers: &StringRecord) -> Result<[usize; 3], LoadError> {
    let mut indices = [0; 3];
    for (slot, required) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == required)
            .ok_or_else(|| LoadError::MissingColumn {
                column: required.to_string(),
                available: headers.iter().map(str::to_string).collect(),
            })?;
    }
    Ok(indices)
}

fn malformed_value(err: csv::Error, line: u64) -> LoadError {
    match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => LoadError::MalformedValue {
            line,
            column: de
                .field()
                .and_then(|idx| REQUIRED_COLUMNS.get(idx as usize))
                .copied()
                .unwrap_or("<unknown>")
                .to_string(),
            message: de.kind().to_string(),
        },
        _ => LoadError::Csv(err),
    }
}
