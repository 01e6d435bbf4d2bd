//! Value comparison and matching rules shared by filters and sorts.

use std::cmp::Ordering;

use chrono::NaiveDate;
use venture_model::FieldValue;

/// Locale-style string ordering.
///
/// Primary order ignores case; strings that differ only in case put the
/// lowercase form first (`"apple" < "Apple" < "banana"`).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    // Same letters: lowercase code points sort after uppercase ones, so
    // reversing the raw comparison puts lowercase first.
    primary.then_with(|| b.cmp(a))
}

/// Compare two optional field values. Missing values are the lowest.
pub fn compare_values(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => compare_present(left, right),
    }
}

fn compare_present(left: FieldValue<'_>, right: FieldValue<'_>) -> Ordering {
    match (left, right) {
        (FieldValue::Text(a), FieldValue::Text(b)) => locale_cmp(a, b),
        (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(&b),
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(&b),
        (FieldValue::List(a), FieldValue::List(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let ordering = locale_cmp(x, y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            a.len().cmp(&b.len())
        }
        (a, b) => a.kind().cmp(&b.kind()),
    }
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub(crate) fn contains_lowercase(value: FieldValue<'_>, needle: &str) -> bool {
    match value {
        FieldValue::Text(text) => text.to_lowercase().contains(needle),
        FieldValue::List(items) => items
            .iter()
            .any(|item| item.to_lowercase().contains(needle)),
        FieldValue::Number(_) | FieldValue::Date(_) => false,
    }
}

/// Equality test between a field value and a filter selection.
///
/// Lists match when they contain the selection. Numbers and dates parse the
/// selection first; a selection that does not parse matches nothing.
pub(crate) fn equals_selection(value: FieldValue<'_>, selection: &str) -> bool {
    match value {
        FieldValue::Text(text) => text == selection,
        FieldValue::List(items) => items.iter().any(|item| item == selection),
        FieldValue::Number(number) => selection
            .trim()
            .parse::<f64>()
            .is_ok_and(|parsed| parsed == number),
        FieldValue::Date(date) => NaiveDate::parse_from_str(selection.trim(), "%Y-%m-%d")
            .is_ok_and(|parsed| parsed == date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(locale_cmp("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn missing_values_sort_lowest() {
        assert_eq!(
            compare_values(None, Some(FieldValue::Number(-1e9))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(FieldValue::Text("")), None),
            Ordering::Greater
        );
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }

    #[test]
    fn numbers_and_dates_compare_naturally() {
        assert_eq!(
            compare_values(Some(FieldValue::Number(2.0)), Some(FieldValue::Number(10.0))),
            Ordering::Less
        );
        let early = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(
            compare_values(Some(FieldValue::Date(late)), Some(FieldValue::Date(early))),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(
                Some(FieldValue::Number(f64::NAN)),
                Some(FieldValue::Number(1.0))
            ),
            Ordering::Greater
        );
    }

    #[test]
    fn selections_parse_numbers_and_dates() {
        assert!(equals_selection(FieldValue::Number(12.5), "12.5"));
        assert!(!equals_selection(FieldValue::Number(12.5), "twelve"));
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(equals_selection(FieldValue::Date(date), "2024-01-15"));
        let tags = vec!["ai".to_string(), "climate".to_string()];
        assert!(equals_selection(FieldValue::List(&tags), "climate"));
        assert!(!equals_selection(FieldValue::List(&tags), "clim"));
    }

    #[test]
    fn search_matches_text_and_list_items() {
        let tags = vec!["Payments".to_string()];
        assert!(contains_lowercase(FieldValue::List(&tags), "pay"));
        assert!(contains_lowercase(FieldValue::Text("Sika Pay"), "ka p"));
        assert!(!contains_lowercase(FieldValue::Number(42.0), "42"));
    }
}
