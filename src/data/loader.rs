use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use super::filter::{apply_filter, Selection};
use super::model::{Column, Trip, TripTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems found while reading a trip log.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("trip log is missing the required '{0}' column")]
    MissingColumn(Column),
    #[error("line {line}: '{value}' in '{column}' is not a timestamp")]
    Timestamp {
        line: usize,
        column: Column,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the selected city's trip log from `data_dir` and apply the month and
/// day filters.
pub fn load_data(data_dir: &Path, selection: &Selection) -> Result<TripTable> {
    let path = selection.city.data_path(data_dir);
    let table = load_file(&path)
        .with_context(|| format!("loading {} trip data", selection.city))?;
    log::info!(
        "Loaded {} trips with columns {:?} from {}",
        table.len(),
        table.columns(),
        path.display()
    );
    Ok(apply_filter(&table, &selection.filter()))
}

/// Load a whole trip log from a CSV file.
pub fn load_file(path: &Path) -> Result<TripTable> {
    let file =
        File::open(path).with_context(|| format!("opening CSV {}", path.display()))?;
    read_trips(file)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// One CSV record before timestamps are parsed.
///
/// Optional columns default to `None` when the header lacks them; numeric
/// cells that fail to parse are treated as missing.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "", default, deserialize_with = "csv::invalid_option")]
    row_id: Option<i64>,
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "csv::invalid_option")]
    birth_year: Option<f64>,
}

/// CSV layout: header row naming the columns (see [`Column::header`]); the
/// leading unnamed column, when present, is the exporter's row id.
/// `Gender` and `Birth Year` are optional.
pub fn read_trips<R: Read>(source: R) -> Result<TripTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let columns: Vec<Column> = headers.iter().filter_map(Column::from_header).collect();
    if let Some(missing) = Column::ALL
        .into_iter()
        .find(|col| col.is_required() && !columns.contains(col))
    {
        return Err(LoadError::MissingColumn(missing).into());
    }

    let mut trips = Vec::new();
    for (idx, result) in reader.deserialize::<RawTrip>().enumerate() {
        // Data starts on line 2, after the header.
        let line = idx + 2;
        let raw = result.with_context(|| format!("CSV line {line}"))?;
        trips.push(into_trip(raw, line)?);
    }

    Ok(TripTable::new(trips, columns))
}

fn into_trip(raw: RawTrip, line: usize) -> Result<Trip, LoadError> {
    Ok(Trip {
        row_id: raw.row_id,
        start_time: parse_timestamp(&raw.start_time, line, Column::StartTime)?,
        end_time: parse_timestamp(&raw.end_time, line, Column::EndTime)?,
        duration: raw.duration,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: non_empty(raw.user_type),
        gender: non_empty(raw.gender),
        birth_year: raw.birth_year,
    })
}

fn parse_timestamp(value: &str, line: usize, column: Column) -> Result<NaiveDateTime, LoadError> {
    // `%.f` also accepts a missing fractional part.
    const FMTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];
    FMTS.iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| LoadError::Timestamp {
            line,
            column,
            value: value.to_owned(),
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
