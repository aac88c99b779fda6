//! Generic table sorting core.
//!
//! Pure, DOM-free: given the displayed text of every cell, decides the new
//! row order. Pages own the reactive row vector and apply the returned
//! permutation themselves, so this whole module is testable off-screen.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::Ordering;
use std::fmt;

/// A cell's displayed text, interpreted into one of three typed forms.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Date(NaiveDateTime),
    Number(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Date(dt) => write!(f, "{}", dt.format("%d %b %Y %H:%M")),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Current sort of one table: the clicked column and its direction.
///
/// `None` at the table level means "unsorted". A table holds at most one of
/// these, so activating a second column implicitly resets the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub column: usize,
    pub ascending: bool,
}

impl TableSort {
    /// State transition for a click on `column`.
    ///
    /// Mirrors the historical toggle exactly: the click flips a single
    /// "is this column ascending" flag, so both an unsorted and a
    /// descending column become ascending, and only an ascending one
    /// becomes descending. Deliberately not a 3-state cycle.
    pub fn toggle(current: Option<TableSort>, column: usize) -> TableSort {
        let was_ascending = matches!(
            current,
            Some(s) if s.column == column && s.ascending
        );
        TableSort {
            column,
            ascending: !was_ascending,
        }
    }
}

/// Strict `DD MMM YYYY` with optional ` HH:MM` tail. Two-digit day only,
/// matching the original cell format; anything looser is not a date cell.
fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return None;
    }
    match raw.len() {
        11 => NaiveDate::parse_from_str(raw, "%d %b %Y")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN)),
        17 => NaiveDateTime::parse_from_str(raw, "%d %b %Y %H:%M").ok(),
        _ => None,
    }
}

/// Currency-aware numeric parse: `€` is stripped and `,` is a DECIMAL
/// separator, so `"1,234€"` is the number 1.234 (not one thousand).
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.replace('€', "").replace(',', ".");
    match cleaned.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Interpret a cell's displayed text. Never fails: anything that is neither
/// a date nor a finite number stays text and sorts lexicographically.
pub fn parse_cell_value(raw: &str) -> CellValue {
    if let Some(dt) = parse_date(raw) {
        return CellValue::Date(dt);
    }
    if let Some(n) = parse_number(raw) {
        return CellValue::Number(n);
    }
    CellValue::Text(raw.to_string())
}

// Case-insensitive first, raw bytes as tie-break. Stands in for the
// browser's localeCompare; identical ordering for this app's ASCII data.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Total order over two cell values.
///
/// Same-typed dates and numbers compare natively; every other pairing
/// falls back to comparing the textual forms, so mixed columns order
/// deterministically instead of erroring.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        _ => compare_text(&a.to_string(), &b.to_string()),
    }
}

/// Pure sort decision: stable permutation of row indices ordered by the
/// parsed value of `sort.column`. A row missing that cell contributes an
/// empty string, which goes through the text branch.
pub fn sort_permutation(rows: &[Vec<String>], sort: &TableSort) -> Vec<usize> {
    let keys: Vec<CellValue> = rows
        .iter()
        .map(|row| parse_cell_value(row.get(sort.column).map(String::as_str).unwrap_or("")))
        .collect();

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| {
        let ord = compare_cells(&keys[a], &keys[b]);
        if sort.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    order
}

/// Reorder a row vector by a permutation from [`sort_permutation`].
pub fn apply_permutation<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(cells: &[&str]) -> Vec<Vec<String>> {
        cells.iter().map(|c| vec![c.to_string()]).collect()
    }

    #[test]
    fn parses_display_dates() {
        let v = parse_cell_value("10 Jan 2023");
        match v {
            CellValue::Date(dt) => {
                assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2023, 1, 10).unwrap())
            }
            other => panic!("expected date, got {other:?}"),
        }
        assert!(matches!(
            parse_cell_value("02 Mar 2023 14:30"),
            CellValue::Date(_)
        ));
        // single-digit day is not the cell format
        assert!(matches!(parse_cell_value("2 Mar 2023"), CellValue::Text(_)));
    }

    #[test]
    fn comma_is_a_decimal_separator() {
        assert_eq!(parse_cell_value("1,234€"), CellValue::Number(1.234));
        assert_eq!(parse_cell_value("12.5€"), CellValue::Number(12.5));
        assert_eq!(parse_cell_value("-3,75"), CellValue::Number(-3.75));
    }

    #[test]
    fn malformed_cells_degrade_to_text() {
        assert_eq!(
            parse_cell_value("N/A"),
            CellValue::Text("N/A".to_string())
        );
        assert_eq!(parse_cell_value(""), CellValue::Text(String::new()));
        // "inf" parses as f64 but is not finite
        assert!(matches!(parse_cell_value("inf"), CellValue::Text(_)));
    }

    #[test]
    fn dates_sort_chronologically() {
        let table = rows(&["02 Mar 2023", "10 Jan 2023", "15 Feb 2023"]);
        let sort = TableSort {
            column: 0,
            ascending: true,
        };
        assert_eq!(sort_permutation(&table, &sort), vec![1, 2, 0]);
    }

    #[test]
    fn mixed_column_falls_back_to_text_compare() {
        let table = rows(&["N/A", "12.5€", "3.0€"]);
        let sort = TableSort {
            column: 0,
            ascending: true,
        };
        // the two numbers still compare numerically; "N/A" compares as text
        // against each number's textual form and lands last
        assert_eq!(sort_permutation(&table, &sort), vec![2, 1, 0]);
    }

    #[test]
    fn toggle_flips_only_the_ascending_flag() {
        let first = TableSort::toggle(None, 2);
        assert_eq!(first, TableSort { column: 2, ascending: true });

        let second = TableSort::toggle(Some(first), 2);
        assert_eq!(second, TableSort { column: 2, ascending: false });

        // descending -> ascending again, never back to unsorted
        let third = TableSort::toggle(Some(second), 2);
        assert_eq!(third, TableSort { column: 2, ascending: true });
    }

    #[test]
    fn clicking_another_column_resets_the_first() {
        let on_dates = TableSort::toggle(None, 0);
        let on_prices = TableSort::toggle(Some(on_dates), 1);
        // fresh ascending sort on the new column, old record replaced
        assert_eq!(on_prices, TableSort { column: 1, ascending: true });

        let table = vec![
            vec!["10 Jan 2023".to_string(), "5€".to_string()],
            vec!["02 Mar 2023".to_string(), "3€".to_string()],
        ];
        assert_eq!(sort_permutation(&table, &on_prices), vec![1, 0]);
    }

    #[test]
    fn toggling_direction_reverses_strictly_ordered_keys() {
        let table = rows(&["5€", "3€", "9€", "1€"]);
        let asc = TableSort { column: 0, ascending: true };
        let desc = TableSort { column: 0, ascending: false };

        let up = sort_permutation(&table, &asc);
        let mut down = sort_permutation(&table, &desc);
        down.reverse();
        assert_eq!(up, down);
    }

    #[test]
    fn equal_keys_keep_original_relative_order() {
        let table = vec![
            vec!["5€".to_string(), "a".to_string()],
            vec!["5€".to_string(), "b".to_string()],
            vec!["3€".to_string(), "c".to_string()],
            vec!["5€".to_string(), "d".to_string()],
        ];
        let sort = TableSort { column: 0, ascending: true };
        assert_eq!(sort_permutation(&table, &sort), vec![2, 0, 1, 3]);

        let desc = TableSort { column: 0, ascending: false };
        // ties stay in source order even when descending
        assert_eq!(sort_permutation(&table, &desc), vec![0, 1, 3, 2]);
    }

    #[test]
    fn missing_cells_sort_as_empty_text() {
        let table = vec![
            vec!["b".to_string(), "x".to_string()],
            vec!["a".to_string()],
            vec!["c".to_string(), "y".to_string()],
        ];
        let sort = TableSort { column: 1, ascending: true };
        // row 1 has no second cell -> "" sorts first
        assert_eq!(sort_permutation(&table, &sort), vec![1, 0, 2]);
    }

    #[test]
    fn date_header_click_sequence_end_to_end() {
        let table = vec![
            vec!["10 Jan 2023".to_string(), "5€".to_string()],
            vec!["02 Mar 2023".to_string(), "3€".to_string()],
        ];

        let first_click = TableSort::toggle(None, 0);
        let order = sort_permutation(&table, &first_click);
        assert_eq!(apply_permutation(&table, &order)[0][0], "10 Jan 2023");

        let second_click = TableSort::toggle(Some(first_click), 0);
        let order = sort_permutation(&table, &second_click);
        assert_eq!(apply_permutation(&table, &order)[0][0], "02 Mar 2023");
    }
}
