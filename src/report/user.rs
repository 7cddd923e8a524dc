//! User demographics: user types, genders and birth years.
//!
//! Gender and birth year only exist in some cities' trip logs. Their absence
//! is detected from the table schema and reported as an informational line.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use super::{footer, heading, mode};
use crate::console::{Console, ConsoleError};
use crate::data::model::{Column, Trip, TripTable};

const PAUSE_PROMPT: &str = "Press enter to continue:\n";

/// Per-value row counts of a text column, plus how many rows had no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown<'a> {
    pub counts: BTreeMap<&'a str, usize>,
    pub missing: usize,
}

impl<'a> Breakdown<'a> {
    fn tally<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts = BTreeMap::new();
        let mut missing = 0;
        for value in values {
            match value {
                Some(v) => *counts.entry(v).or_default() += 1,
                None => missing += 1,
            }
        }
        Breakdown { counts, missing }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i64,
    pub latest: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats<'a> {
    pub total_trips: usize,
    pub user_types: Breakdown<'a>,
    /// `None` when the city has no gender column.
    pub genders: Option<Breakdown<'a>>,
    /// `None` when the city has no birth year column, or it is empty.
    pub birth_years: Option<BirthYears>,
}

fn gender_breakdown(table: &TripTable) -> Option<Breakdown<'_>> {
    if !table.has_column(Column::Gender) {
        return None;
    }
    Some(Breakdown::tally(
        table.trips.iter().map(|t| t.gender.as_deref()),
    ))
}

fn birth_years(table: &TripTable) -> Option<BirthYears> {
    if !table.has_column(Column::BirthYear) {
        return None;
    }
    // Birth years are stored as floats; whole years are what gets reported.
    let years: Vec<i64> = table
        .trips
        .iter()
        .filter_map(|t: &Trip| t.birth_year)
        .map(|y| y.trunc() as i64)
        .collect();
    Some(BirthYears {
        earliest: years.iter().copied().min()?,
        latest: years.iter().copied().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

pub fn compute(table: &TripTable) -> UserStats<'_> {
    UserStats {
        total_trips: table.len(),
        user_types: Breakdown::tally(table.trips.iter().map(|t| t.user_type.as_deref())),
        genders: gender_breakdown(table),
        birth_years: birth_years(table),
    }
}

/// Print the user statistics, pausing for the operator between sections.
/// The reported time covers the computation only, not the pauses.
pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<(), ConsoleError> {
    heading(console, "Calculating User Stats...")?;
    let started = Instant::now();
    let stats = compute(table);
    let elapsed: Duration = started.elapsed();

    for (user_type, count) in &stats.user_types.counts {
        console.say(format_args!("There were {count} trip(s) by a {user_type}."))?;
    }
    if stats.user_types.missing == 0 {
        console.say("All trips had user type information.")?;
    } else {
        console.say(format_args!(
            "{} trips were missing user type information.",
            stats.user_types.missing
        ))?;
    }
    console.divider()?;
    console.pause(PAUSE_PROMPT)?;

    match &stats.genders {
        Some(genders) => {
            for (gender, count) in &genders.counts {
                console.say(format_args!("There were {count} trips taken by a {gender}."))?;
            }
            if genders.missing == 0 {
                console.say("All trips had information about the gender of the user.")?;
            } else {
                console.say(format_args!(
                    "{} trips were missing gender information.",
                    genders.missing
                ))?;
            }
        }
        None => console.say("There is no information for genders for this city.")?,
    }
    console.divider()?;
    console.pause(PAUSE_PROMPT)?;

    match stats.birth_years {
        Some(years) => {
            console.say(format_args!(
                "The oldest user we have information on was born in {}, while the youngest was born in {}.",
                years.earliest, years.latest
            ))?;
            console.say(format_args!(
                "The most common year of birth among users was {}.",
                years.most_common
            ))?;
        }
        None => console.say("There is no information for years of birth for this city.")?,
    }

    log::debug!("user stats over {} trips", stats.total_trips);
    footer(console, "The calculations took", elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::console::test_support::{scripted, transcript};
    use crate::report::test_support::{at, basic_columns, table, trip};

    fn demographics_table() -> TripTable {
        let rows = [
            (Some("Subscriber"), Some("Male"), Some(1985.0)),
            (Some("Subscriber"), Some("Female"), Some(1992.0)),
            (Some("Customer"), None, None),
            (None, Some("Male"), Some(1985.0)),
            (Some("Subscriber"), Some("Male"), Some(1961.0)),
        ];
        let trips = rows
            .iter()
            .map(|&(user_type, gender, year)| {
                let mut t = trip(at(6, 1, 12), "A", "B");
                t.user_type = user_type.map(str::to_owned);
                t.gender = gender.map(str::to_owned);
                t.birth_year = year;
                t
            })
            .collect();
        let mut columns = basic_columns();
        columns.extend([Column::Gender, Column::BirthYear]);
        TripTable::new(trips, columns)
    }

    #[test]
    fn counts_each_demographic() {
        let table = demographics_table();
        let stats = compute(&table);
        assert_eq!(stats.total_trips, 5);
        assert_eq!(
            stats.user_types.counts,
            BTreeMap::from([("Customer", 1), ("Subscriber", 3)])
        );
        assert_eq!(stats.user_types.missing, 1);

        let genders = stats.genders.expect("gender column present");
        assert_eq!(genders.counts, BTreeMap::from([("Female", 1), ("Male", 3)]));
        assert_eq!(genders.missing, 1);

        assert_eq!(
            stats.birth_years,
            Some(BirthYears {
                earliest: 1961,
                latest: 1992,
                most_common: 1985,
            })
        );
    }

    #[test]
    fn report_pauses_between_sections() {
        let table = demographics_table();
        let mut console = scripted(&["", ""]);
        report(&mut console, &table).expect("report");
        let out = transcript(console);
        assert_eq!(out.matches(PAUSE_PROMPT).count(), 2);
        assert!(out.contains("There were 3 trip(s) by a Subscriber."));
        assert!(out.contains("1 trips were missing user type information."));
        assert!(out.contains("There were 1 trips taken by a Female."));
        assert!(out.contains("1 trips were missing gender information."));
        assert!(out.contains(
            "The oldest user we have information on was born in 1961, while the youngest was born in 1992."
        ));
        assert!(out.contains("The most common year of birth among users was 1985."));
        assert!(out.contains("The calculations took"));
    }

    #[test]
    fn city_without_gender_is_reported_not_fatal() {
        let table = table(vec![trip(at(2, 2, 7), "A", "B"), trip(at(2, 3, 7), "B", "C")]);
        let stats = compute(&table);
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);

        let mut console = scripted(&["", ""]);
        report(&mut console, &table).expect("report");
        let out = transcript(console);
        assert!(out.contains("All trips had user type information."));
        assert!(out.contains("There is no information for genders for this city."));
        assert!(out.contains("There is no information for years of birth for this city."));
        assert_eq!(table.columns(), &basic_columns()[..]);
    }

    #[test]
    fn empty_birth_year_column_counts_as_no_information() {
        let mut columns = basic_columns();
        columns.push(Column::BirthYear);
        let table = TripTable::new(vec![trip(at(1, 5, 7), "A", "B")], columns);
        assert_eq!(compute(&table).birth_years, None);
    }

    #[test]
    fn report_needs_the_operator_to_continue() {
        let table = demographics_table();
        let mut console = scripted(&[""]);
        let err = report(&mut console, &table).expect_err("second pause has no input");
        assert!(matches!(err, ConsoleError::InputClosed));
    }
}
