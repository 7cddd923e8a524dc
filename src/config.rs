//! Fixed lookup tables: cities, their trip-log files, and the month / weekday
//! vocabularies accepted at the prompt.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Weekday;

/// Directory the city files are resolved against (the working directory).
pub const DATA_DIR: &str = ".";

/// Rows shown per page by the raw data pager.
pub const PAGE_SIZE: usize = 5;

/// Width of the dashed divider printed between sections.
pub const DIVIDER_WIDTH: usize = 40;

/// Answer that stops the program at a confirm gate, or the pager.
pub const QUIT_KEYWORD: &str = "quit";

/// The only answer that starts a new session iteration.
pub const RESTART_KEYWORD: &str = "yes";

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

/// One of the three cities with a bundled trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

struct CityEntry {
    city: City,
    /// Lowercase name typed at the prompt.
    key: &'static str,
    display: &'static str,
    file_name: &'static str,
}

static CITIES: [CityEntry; 3] = [
    CityEntry {
        city: City::Chicago,
        key: "chicago",
        display: "Chicago",
        file_name: "chicago.csv",
    },
    CityEntry {
        city: City::NewYorkCity,
        key: "new york city",
        display: "New York City",
        file_name: "new_york_city.csv",
    },
    CityEntry {
        city: City::Washington,
        key: "washington",
        display: "Washington",
        file_name: "washington.csv",
    },
];

impl City {
    /// Every city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    fn entry(self) -> &'static CityEntry {
        // CITIES lists every variant exactly once.
        match self {
            City::Chicago => &CITIES[0],
            City::NewYorkCity => &CITIES[1],
            City::Washington => &CITIES[2],
        }
    }

    /// Match an operator answer (case-insensitive, surrounding spaces ignored).
    pub fn from_input(raw: &str) -> Option<City> {
        let wanted = raw.trim().to_lowercase();
        CITIES
            .iter()
            .find(|entry| entry.key == wanted)
            .map(|entry| entry.city)
    }

    pub fn display_name(self) -> &'static str {
        self.entry().display
    }

    pub fn file_name(self) -> &'static str {
        self.entry().file_name
    }

    /// Location of this city's trip log under `data_dir`.
    pub fn data_path(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Months and weekdays
// ---------------------------------------------------------------------------

/// Month names accepted at the prompt, mapped to their calendar number.
/// The trip logs only cover January to June.
pub static FILTER_MONTHS: [(&str, u32); 6] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
];

static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names accepted at the prompt, Monday first.
pub static FILTER_WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Full English name of a calendar month (1-based).
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(idx).copied()
}

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("chicago", City::Chicago)]
    #[case("  New York City ", City::NewYorkCity)]
    #[case("WASHINGTON", City::Washington)]
    fn from_input_is_case_insensitive(#[case] raw: &str, #[case] expected: City) {
        assert_eq!(City::from_input(raw), Some(expected));
    }

    #[rstest]
    #[case("boston")]
    #[case("new york")]
    #[case("")]
    fn from_input_rejects_unknown_cities(#[case] raw: &str) {
        assert_eq!(City::from_input(raw), None);
    }

    #[test]
    fn every_city_has_a_distinct_file() {
        let mut files: Vec<&str> = City::ALL.iter().map(|c| c.file_name()).collect();
        files.dedup();
        assert_eq!(files, ["chicago.csv", "new_york_city.csv", "washington.csv"]);
    }

    #[test]
    fn month_names_cover_the_calendar() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(3), Some("March"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn filter_weekdays_start_on_monday() {
        for (idx, (_, day)) in FILTER_WEEKDAYS.iter().enumerate() {
            assert_eq!(day.num_days_from_monday() as usize, idx);
        }
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
