//! Interactive explorer for US bike-share trip logs.
//!
//! The operator picks a city plus optional month and weekday filters; the
//! matching trips are loaded from the city's CSV file and summarised by a
//! series of reporters (travel times, stations, durations, demographics),
//! followed by an optional paginated view of the raw rows.

pub mod config;
pub mod console;
pub mod data;
pub mod prompt;
pub mod report;
pub mod session;
