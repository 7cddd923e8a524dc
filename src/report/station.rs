//! Most popular stations and trip.

use std::io::{BufRead, Write};
use std::time::Instant;

use super::{footer, heading, mode, NO_TRIPS};
use crate::console::{Console, ConsoleError};
use crate::data::model::TripTable;

/// Popular stations, borrowed from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats<'a> {
    pub start_station: &'a str,
    pub end_station: &'a str,
    /// Most common (start, end) pair.
    pub trip: (&'a str, &'a str),
}

/// `None` when the table is empty.
pub fn compute(table: &TripTable) -> Option<StationStats<'_>> {
    let trips = &table.trips;
    Some(StationStats {
        start_station: mode(trips.iter().map(|t| t.start_station.as_str()))?,
        end_station: mode(trips.iter().map(|t| t.end_station.as_str()))?,
        trip: mode(trips.iter().map(|t| t.station_pair()))?,
    })
}

/// Print the station statistics.
pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<(), ConsoleError> {
    heading(console, "Calculating The Most Popular Stations and Trip...")?;
    let started = Instant::now();

    match compute(table) {
        Some(stats) => {
            console.say(format_args!(
                "The most common station to start a trip is the {} station.",
                stats.start_station
            ))?;
            console.say(format_args!(
                "The most common station to end a trip is the {} station.",
                stats.end_station
            ))?;
            let (from, to) = stats.trip;
            console.say(format_args!(
                "The most common trip started at {from} and ended at {to}."
            ))?;
        }
        None => console.say(NO_TRIPS)?,
    }

    footer(console, "This took", started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::console::test_support::{scripted, transcript};
    use crate::report::test_support::{at, table, trip};

    /// Ten trips where "Lake Shore Dr" → "Michigan Ave" is the only pair that
    /// repeats three times, although neither station leads its own column.
    fn ten_trips() -> TripTable {
        let pairs = [
            ("Lake Shore Dr", "Michigan Ave"),
            ("Canal St", "Wells St"),
            ("Lake Shore Dr", "Michigan Ave"),
            ("Canal St", "State St"),
            ("Canal St", "Clark St"),
            ("Lake Shore Dr", "Michigan Ave"),
            ("Canal St", "Wacker Dr"),
            ("Halsted St", "Wacker Dr"),
            ("Halsted St", "Wacker Dr"),
            ("Ashland Ave", "Wacker Dr"),
        ];
        let trips = pairs
            .iter()
            .enumerate()
            .map(|(i, (from, to))| {
                let day = u32::try_from(i).expect("small index") + 1;
                trip(at(4, day, 10), from, to)
            })
            .collect();
        table(trips)
    }

    #[test]
    fn reports_the_duplicated_station_pair() {
        let table = ten_trips();
        let stats = compute(&table).expect("non-empty");
        assert_eq!(stats.start_station, "Canal St");
        assert_eq!(stats.end_station, "Wacker Dr");
        assert_eq!(stats.trip, ("Lake Shore Dr", "Michigan Ave"));

        let mut console = scripted(&[]);
        report(&mut console, &table).expect("report");
        let out = transcript(console);
        assert!(out.contains("The most common station to start a trip is the Canal St station."));
        assert!(out.contains("The most common station to end a trip is the Wacker Dr station."));
        assert!(out.contains("The most common trip started at Lake Shore Dr and ended at Michigan Ave."));
    }

    #[test]
    fn station_names_with_dashes_stay_intact() {
        let table = table(vec![
            trip(at(1, 3, 9), "A-----B", "C"),
            trip(at(1, 4, 9), "A-----B", "C"),
            trip(at(1, 5, 9), "A", "B-----C"),
        ]);
        let stats = compute(&table).expect("non-empty");
        assert_eq!(stats.trip, ("A-----B", "C"));
    }

    #[test]
    fn empty_table_has_no_stations() {
        let table = table(Vec::new());
        assert_eq!(compute(&table), None);

        let mut console = scripted(&[]);
        report(&mut console, &table).expect("report");
        assert!(transcript(console).contains(NO_TRIPS));
    }
}
