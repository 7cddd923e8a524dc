//! Statistics reporters. Each one borrows the filtered table, computes one
//! category of statistic and prints it; none of them alters the table.

pub mod duration;
pub mod raw;
pub mod station;
pub mod time;
pub mod user;

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::console::{Console, ConsoleError};

/// Printed in place of a statistic when the filter matched no trips.
pub const NO_TRIPS: &str = "There are no trips matching this filter.";

/// Most frequent value. Ties go to the smallest tied value; `None` when
/// `values` is empty.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        // Strictly greater, so the first (smallest) of a tie is kept.
        if best.as_ref().map_or(true, |(_, best_count)| count > *best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Print a reporter's heading, with the blank lines around it.
fn heading<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    title: &str,
) -> Result<(), ConsoleError> {
    console.say(format_args!("\n{title}\n"))
}

/// Print how long a computation took, then the divider.
fn footer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    elapsed: Duration,
) -> Result<(), ConsoleError> {
    console.say(format_args!("\n{label} {} seconds.", elapsed.as_secs_f64()))?;
    console.divider()
}
