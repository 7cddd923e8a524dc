use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Timestamp layout used by the trip logs.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// CellValue – a single rendered cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, used when a row is shown column by column.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Timestamp(NaiveDateTime),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
            CellValue::Null => write!(f, "NaN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Column – the closed set of trip-log columns
// ---------------------------------------------------------------------------

/// A column that may appear in a city's trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// The unnamed leading index column written by the exporter.
    RowId,
    StartTime,
    EndTime,
    TripDuration,
    StartStation,
    EndStation,
    UserType,
    Gender,
    BirthYear,
}

impl Column {
    /// Every column, in file order.
    pub const ALL: [Column; 9] = [
        Column::RowId,
        Column::StartTime,
        Column::EndTime,
        Column::TripDuration,
        Column::StartStation,
        Column::EndStation,
        Column::UserType,
        Column::Gender,
        Column::BirthYear,
    ];

    /// Header text as it appears in the CSV files.
    pub fn header(self) -> &'static str {
        match self {
            Column::RowId => "",
            Column::StartTime => "Start Time",
            Column::EndTime => "End Time",
            Column::TripDuration => "Trip Duration",
            Column::StartStation => "Start Station",
            Column::EndStation => "End Station",
            Column::UserType => "User Type",
            Column::Gender => "Gender",
            Column::BirthYear => "Birth Year",
        }
    }

    pub fn from_header(header: &str) -> Option<Column> {
        let header = header.trim();
        Column::ALL.into_iter().find(|col| col.header() == header)
    }

    /// Columns every trip log must carry.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Column::StartTime
                | Column::EndTime
                | Column::TripDuration
                | Column::StartStation
                | Column::EndStation
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// ---------------------------------------------------------------------------
// Trip – one row of a trip log
// ---------------------------------------------------------------------------

/// A single bike-share ride.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub row_id: Option<i64>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Ride length in seconds.
    pub duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl Trip {
    /// Calendar month (1-12) the ride started in.
    pub fn start_month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn start_weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Hour of day (0-23) the ride started in.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// The (start, end) station pair, borrowed.
    pub fn station_pair(&self) -> (&str, &str) {
        (&self.start_station, &self.end_station)
    }

    /// Value of `column` for this row.
    pub fn cell(&self, column: Column) -> CellValue {
        fn text(value: &Option<String>) -> CellValue {
            value.clone().map_or(CellValue::Null, CellValue::Text)
        }
        match column {
            Column::RowId => self.row_id.map_or(CellValue::Null, CellValue::Integer),
            Column::StartTime => CellValue::Timestamp(self.start_time),
            Column::EndTime => CellValue::Timestamp(self.end_time),
            Column::TripDuration => CellValue::Float(self.duration),
            Column::StartStation => CellValue::Text(self.start_station.clone()),
            Column::EndStation => CellValue::Text(self.end_station.clone()),
            Column::UserType => text(&self.user_type),
            Column::Gender => text(&self.gender),
            Column::BirthYear => self.birth_year.map_or(CellValue::Null, CellValue::Float),
        }
    }
}

// ---------------------------------------------------------------------------
// TripTable – a loaded (and possibly filtered) trip log
// ---------------------------------------------------------------------------

/// Rows of one city's trip log plus the columns its file actually carries.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    /// All trips, in file order.
    pub trips: Vec<Trip>,
    /// Columns present in the source header, in file order.
    columns: Vec<Column>,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, columns: Vec<Column>) -> Self {
        TripTable { trips, columns }
    }

    /// Schema of the table.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Whether the source file carried `column`.
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// A new table holding the rows at `indices`, same schema.
    pub fn select(&self, indices: &[usize]) -> TripTable {
        let trips = indices
            .iter()
            .filter_map(|&i| self.trips.get(i).cloned())
            .collect();
        TripTable {
            trips,
            columns: self.columns.clone(),
        }
    }

    /// Number of trips.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 15, 0))
            .expect("valid timestamp")
    }

    fn trip() -> Trip {
        Trip {
            row_id: Some(7),
            start_time: at(2017, 3, 6, 17),
            end_time: at(2017, 3, 6, 18),
            duration: 3600.0,
            start_station: "Canal St".to_owned(),
            end_station: "Clark St".to_owned(),
            user_type: Some("Subscriber".to_owned()),
            gender: None,
            birth_year: Some(1984.0),
        }
    }

    #[rstest]
    #[case("", Some(Column::RowId))]
    #[case("Start Time", Some(Column::StartTime))]
    #[case(" Birth Year ", Some(Column::BirthYear))]
    #[case("Unnamed: 0", None)]
    fn from_header_maps_known_columns(#[case] header: &str, #[case] expected: Option<Column>) {
        assert_eq!(Column::from_header(header), expected);
    }

    #[test]
    fn derived_time_parts_follow_start_time() {
        let trip = trip();
        assert_eq!(trip.start_month(), 3);
        assert_eq!(trip.start_weekday(), Weekday::Mon);
        assert_eq!(trip.start_hour(), 17);
        assert_eq!(trip.station_pair(), ("Canal St", "Clark St"));
    }

    #[test]
    fn cells_render_like_the_source_file() {
        let trip = trip();
        assert_eq!(trip.cell(Column::RowId).to_string(), "7");
        assert_eq!(
            trip.cell(Column::StartTime).to_string(),
            "2017-03-06 17:15:00"
        );
        assert_eq!(trip.cell(Column::TripDuration).to_string(), "3600.0");
        assert_eq!(trip.cell(Column::Gender), CellValue::Null);
        assert_eq!(trip.cell(Column::BirthYear).to_string(), "1984.0");
    }

    #[test]
    fn select_keeps_schema_and_order() {
        let mut second = trip();
        second.row_id = Some(8);
        let table = TripTable::new(
            vec![trip(), second.clone()],
            vec![Column::RowId, Column::StartTime],
        );
        let picked = table.select(&[1, 5]);
        assert_eq!(picked.trips, vec![second]);
        assert_eq!(picked.columns(), table.columns());
        assert!(picked.has_column(Column::StartTime));
        assert!(!picked.has_column(Column::Gender));
    }
}
