//! Interactive filter selection: city, month and day of week.

use std::io::{BufRead, Write};

use crate::config::{City, FILTER_MONTHS, FILTER_WEEKDAYS};
use crate::console::{Console, ConsoleError};
use crate::data::filter::{DayFilter, MonthFilter, Selection};

const ALL: &str = "all";

/// Parse a city answer.
pub fn parse_city(raw: &str) -> Option<City> {
    City::from_input(raw)
}

/// Parse a month answer: `all`, a month name January-June, or `1`-`6`.
pub fn parse_month(raw: &str) -> Option<MonthFilter> {
    let answer = raw.trim().to_lowercase();
    if answer == ALL {
        return Some(MonthFilter::All);
    }
    FILTER_MONTHS
        .iter()
        .find(|(name, number)| *name == answer || number.to_string() == answer)
        .map(|&(_, number)| MonthFilter::Only(number))
}

/// Parse a day answer: `all`, a weekday name, or `0`-`6` with Monday = 0.
pub fn parse_day(raw: &str) -> Option<DayFilter> {
    let answer = raw.trim().to_lowercase();
    if answer == ALL {
        return Some(DayFilter::All);
    }
    FILTER_WEEKDAYS
        .iter()
        .find(|(name, day)| *name == answer || day.num_days_from_monday().to_string() == answer)
        .map(|&(_, day)| DayFilter::Only(day))
}

/// Ask until `parse` accepts an answer, printing `guidance` after each miss.
fn ask_until<R, W, T>(
    console: &mut Console<R, W>,
    question: &str,
    guidance: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConsoleError>
where
    R: BufRead,
    W: Write,
{
    loop {
        let answer = console.ask(question)?;
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }
        log::debug!("rejected answer {answer:?}");
        console.say(guidance)?;
    }
}

fn city_choices() -> String {
    let names: Vec<&str> = City::ALL.iter().map(|c| c.display_name()).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {last}", rest.join(", ")),
        _ => names.concat(),
    }
}

/// Ask the operator for a city, month and day; loops until each is valid.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Selection, ConsoleError> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let city_guidance = format!(
        "I am sorry, I do not recognize that city. \nYour choices are {}.",
        city_choices()
    );
    let city = ask_until(
        console,
        "What city would you like to search for? ",
        &city_guidance,
        parse_city,
    )?;

    let month = ask_until(
        console,
        "What month would you like to look at?  You may choose \"all\". ",
        "I am sorry, I do not recognize that month. \nYou can choose a month between \
         January and June by its name or its number, or you may choose \"all\".",
        parse_month,
    )?;

    let day = ask_until(
        console,
        "What day would you like to look at?  You may choose \"all\". ",
        "I am sorry, I do not recognize that day. \nYou can choose any day of the week \
         or its number (Monday is 0), or you may choose \"all\".",
        parse_day,
    )?;

    console.divider()?;
    let selection = Selection { city, month, day };
    log::debug!("selected city={city} month={month} day={day}");
    Ok(selection)
}
