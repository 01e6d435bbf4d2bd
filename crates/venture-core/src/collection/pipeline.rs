//! Pure filter and sort projections.
//!
//! Both functions borrow records from their input and never build new
//! ones, so the output is always a sub-sequence of the source.

use venture_model::FieldValue;

use super::compare::{compare_values, contains_lowercase, equals_selection};
use super::fields::FieldMap;
use super::spec::{FilterSortSpec, SortDirection};

/// Keep the records matching the search query and every active filter.
///
/// The search is OR across the searchable fields; filters are AND across
/// fields. Source order is preserved. A record without a value for a
/// referenced field does not match that field.
pub fn apply_filters<'a, T: 'a>(
    source: impl IntoIterator<Item = &'a T>,
    spec: &FilterSortSpec,
    fields: &FieldMap<T>,
) -> Vec<&'a T> {
    let needle = spec.search_query.to_lowercase();
    source
        .into_iter()
        .filter(|record| matches_search(*record, &needle, fields))
        .filter(|record| matches_filters(*record, spec, fields))
        .collect()
}

/// Stable sort by `key`.
///
/// An unknown key leaves the order untouched.
pub fn apply_sort<'a, T: 'a>(
    list: impl IntoIterator<Item = &'a T>,
    key: &str,
    direction: SortDirection,
    fields: &FieldMap<T>,
) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = list.into_iter().collect();
    let Some(field) = fields.get(key) else {
        return sorted;
    };
    sorted.sort_by(|a, b| direction.apply(compare_values(field.value(a), field.value(b))));
    sorted
}

/// Filters followed by the spec's sort, if any.
pub fn apply_spec<'a, T: 'a>(
    source: impl IntoIterator<Item = &'a T>,
    spec: &FilterSortSpec,
    fields: &FieldMap<T>,
) -> Vec<&'a T> {
    let filtered = apply_filters(source, spec, fields);
    match spec.sort_key.as_deref() {
        Some(key) => apply_sort(filtered, key, spec.sort_direction, fields),
        None => filtered,
    }
}

fn matches_search<T>(record: &T, needle: &str, fields: &FieldMap<T>) -> bool {
    if needle.is_empty() {
        return true;
    }
    fields
        .search_fields()
        .iter()
        .filter_map(|name| fields.value(record, name))
        .any(|value: FieldValue<'_>| contains_lowercase(value, needle))
}

fn matches_filters<T>(record: &T, spec: &FilterSortSpec, fields: &FieldMap<T>) -> bool {
    spec.active_filters().all(|(name, selection)| {
        fields
            .value(record, name)
            .is_some_and(|value| equals_selection(value, selection))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::spec::ALL_SENTINEL;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: &'static str,
        name: &'static str,
        group: Option<&'static str>,
        score: f64,
    }

    fn row(id: &'static str, name: &'static str, group: Option<&'static str>, score: f64) -> Row {
        Row {
            id,
            name,
            group,
            score,
        }
    }

    fn fields() -> FieldMap<Row> {
        FieldMap::<Row>::new()
            .field("name", "Name", |r| Some(FieldValue::Text(r.name)))
            .field("group", "Group", |r| r.group.map(FieldValue::Text))
            .field("score", "Score", |r| Some(FieldValue::Number(r.score)))
            .searchable(&["name", "group"])
    }

    fn rows() -> Vec<Row> {
        vec![
            row("1", "Beta", Some("x"), 3.0),
            row("2", "alpha", None, 1.0),
            row("3", "Gamma", Some("y"), 2.0),
            row("4", "delta", Some("x"), 2.0),
        ]
    }

    fn ids(list: &[&Row]) -> Vec<&'static str> {
        list.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let data = rows();
        let result = apply_filters(&data, &FilterSortSpec::new(), &fields());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let data = rows();
        let spec = FilterSortSpec::new().with_search("X");
        assert_eq!(ids(&apply_filters(&data, &spec, &fields())), vec!["1", "4"]);
        let spec = FilterSortSpec::new().with_search("ALP");
        assert_eq!(ids(&apply_filters(&data, &spec, &fields())), vec!["2"]);
    }

    #[test]
    fn missing_field_never_matches_a_filter() {
        let data = rows();
        let spec = FilterSortSpec::new().with_filter("group", "x");
        assert_eq!(ids(&apply_filters(&data, &spec, &fields())), vec!["1", "4"]);
        let spec = FilterSortSpec::new().with_filter("group", ALL_SENTINEL);
        assert_eq!(ids(&apply_filters(&data, &spec, &fields())).len(), 4);
    }

    #[test]
    fn filters_combine_with_and() {
        let data = rows();
        let spec = FilterSortSpec::new()
            .with_filter("group", "x")
            .with_filter("score", "2");
        assert_eq!(ids(&apply_filters(&data, &spec, &fields())), vec!["4"]);
    }

    #[test]
    fn unknown_filter_field_matches_nothing() {
        let data = rows();
        let spec = FilterSortSpec::new().with_filter("colour", "red");
        assert!(apply_filters(&data, &spec, &fields()).is_empty());
    }

    #[test]
    fn sort_uses_locale_order_for_text() {
        let data = rows();
        let sorted = apply_sort(&data, "name", SortDirection::Asc, &fields());
        assert_eq!(ids(&sorted), vec!["2", "1", "4", "3"]);
    }

    #[test]
    fn sort_is_stable_and_desc_negates() {
        let data = rows();
        let asc = apply_sort(&data, "score", SortDirection::Asc, &fields());
        assert_eq!(ids(&asc), vec!["2", "3", "4", "1"]);
        let desc = apply_sort(&data, "score", SortDirection::Desc, &fields());
        assert_eq!(ids(&desc), vec!["1", "3", "4", "2"]);
    }

    #[test]
    fn missing_values_sort_first_ascending() {
        let data = rows();
        let sorted = apply_sort(&data, "group", SortDirection::Asc, &fields());
        assert_eq!(ids(&sorted), vec!["2", "1", "4", "3"]);
    }

    #[test]
    fn unknown_sort_key_keeps_order() {
        let data = rows();
        let sorted = apply_sort(&data, "nope", SortDirection::Desc, &fields());
        assert_eq!(ids(&sorted), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn spec_filters_then_sorts() {
        let data = rows();
        let spec = FilterSortSpec::new()
            .with_filter("group", "x")
            .sorted_by("name", SortDirection::Desc);
        assert_eq!(ids(&apply_spec(&data, &spec, &fields())), vec!["4", "1"]);
    }
}
