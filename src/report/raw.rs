//! Paginated view of the filtered rows.

use std::io::{BufRead, Write};

use crate::config::PAGE_SIZE;
use crate::console::{is_quit, Console, ConsoleError};
use crate::data::model::TripTable;

const NEXT_PAGE_PROMPT: &str = "Press enter to see the next 5 rows or type \"quit\" to stop: ";

/// Render rows `start..end` of `table` as an aligned text block: a header
/// line with the column names, then one line per row prefixed by its
/// position in the filtered table.
pub fn render_page(table: &TripTable, start: usize, end: usize) -> String {
    let columns = table.columns();
    let rows = table.trips.get(start..end).unwrap_or_default();

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    let mut header = vec![String::new()];
    header.extend(columns.iter().map(|c| c.header().to_owned()));
    grid.push(header);
    for (offset, trip) in rows.iter().enumerate() {
        let mut line = vec![(start + offset).to_string()];
        line.extend(columns.iter().map(|&c| trip.cell(c).to_string()));
        grid.push(line);
    }

    let mut widths = vec![0; columns.len() + 1];
    for line in &grid {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    grid.iter()
        .map(|line| {
            line.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Show `table` five rows at a time until the rows run out or the operator
/// types the quit keyword. Returns the number of pages shown.
pub fn page_through<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<usize, ConsoleError> {
    let total = table.len();
    let mut start = 0;
    let mut pages = 0;
    while start < total {
        let end = (start + PAGE_SIZE).min(total);
        console.say(render_page(table, start, end))?;
        pages += 1;
        start = end;

        let answer = console.ask(NEXT_PAGE_PROMPT)?;
        if is_quit(&answer) {
            break;
        }
    }
    log::debug!("raw pager showed {pages} page(s) of {total} rows");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::console::test_support::{scripted, transcript};
    use crate::report::test_support::{at, table, trip};

    fn seven_rows() -> TripTable {
        let trips = (1..=7)
            .map(|day| {
                let mut t = trip(at(3, day, 9), &format!("From {day}"), "To");
                t.row_id = Some(i64::from(day) * 100);
                t
            })
            .collect();
        table(trips)
    }

    #[test]
    fn seven_rows_make_two_pages() {
        let table = seven_rows();
        let mut console = scripted(&["", ""]);
        let pages = page_through(&mut console, &table).expect("pager");
        assert_eq!(pages, 2);

        let out = transcript(console);
        for day in 1..=7 {
            assert!(out.contains(&format!("From {day}")), "row {day} shown");
        }
        let row_five = out.find("From 5").expect("row 5");
        let row_six = out.find("From 6").expect("row 6");
        let first_prompt = out.find(NEXT_PAGE_PROMPT).expect("prompt");
        assert!(row_five < first_prompt && first_prompt < row_six);
        assert_eq!(out.matches(NEXT_PAGE_PROMPT).count(), 2);
    }

    #[test]
    fn quit_stops_after_the_first_page() {
        let table = seven_rows();
        let mut console = scripted(&["quit"]);
        let pages = page_through(&mut console, &table).expect("pager");
        assert_eq!(pages, 1);
        let out = transcript(console);
        assert!(out.contains("From 5"));
        assert!(!out.contains("From 6"));
    }

    #[test]
    fn empty_table_shows_nothing() {
        let table = table(Vec::new());
        let mut console = scripted(&[]);
        assert_eq!(page_through(&mut console, &table).expect("pager"), 0);
        assert_eq!(transcript(console), "");
    }

    #[test]
    fn page_lists_every_column() {
        let table = seven_rows();
        let page = render_page(&table, 5, 7);
        let lines: Vec<&str> = page.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Start Time"));
        assert!(lines[0].contains("User Type"));
        assert!(lines[1].trim_start().starts_with("5  "));
        assert!(lines[1].contains("600"));
        assert!(lines[1].contains("2017-03-06 09:30:00"));
        assert!(lines[2].contains("Subscriber"));
    }
}
