//! Utilities for date format conversion
//!
//! Three formats meet at the sales table: the backend sends display dates
//! as "DD MMM YYYY", the edit form takes "DD/MM/YYYY", and the update
//! endpoint wants ISO "YYYY-MM-DD". Unparseable input is passed through
//! unchanged so a bad value stays visible instead of disappearing.

use chrono::NaiveDate;

/// Table display format to the edit field format.
/// Example: "10 Jan 2023" -> "10/01/2023"
pub fn display_to_input_date(display: &str) -> String {
    match NaiveDate::parse_from_str(display, "%d %b %Y") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => display.to_string(),
    }
}

/// Edit field format to the ISO format the PUT body wants.
/// Example: "10/01/2023" -> "2023-01-10"
pub fn input_to_iso_date(input: &str) -> String {
    let parts: Vec<&str> = input.split('/').collect();
    if let [day, month, year] = parts[..] {
        return format!("{}-{}-{}", year, month, day);
    }
    input.to_string()
}

/// Validate an edit-field date before converting it.
pub fn is_valid_input_date(input: &str) -> bool {
    NaiveDate::parse_from_str(input, "%d/%m/%Y").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_to_input_date() {
        assert_eq!(display_to_input_date("10 Jan 2023"), "10/01/2023");
        assert_eq!(display_to_input_date("02 Mar 2023"), "02/03/2023");
    }

    #[test]
    fn test_input_to_iso_date() {
        assert_eq!(input_to_iso_date("10/01/2023"), "2023-01-10");
        assert_eq!(input_to_iso_date("02/03/2023"), "2023-03-02");
    }

    #[test]
    fn test_is_valid_input_date() {
        assert!(is_valid_input_date("10/01/2023"));
        assert!(!is_valid_input_date("31/02/2023"));
        assert!(!is_valid_input_date("2023-01-10"));
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(display_to_input_date("invalid"), "invalid");
        assert_eq!(input_to_iso_date("invalid"), "invalid");
    }
}
