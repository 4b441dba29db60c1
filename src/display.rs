//! Human-facing labels for the table and tooltip collaborators.
//!
//! Column names in the dataset are lowercase snake_case. The tooltip and
//! table headers show them title-cased with spaces, with the postal-box
//! abbreviation kept in caps. Counts are shown thousands-grouped, as in
//! "12,840 places".

use crate::PlaceRecord;

/// Title-case a snake_case column name: every letter following a non-letter
/// is uppercased, every other letter lowercased.
fn title_case(column: &str) -> String {
    let mut out = String::with_capacity(column.len());
    let mut prev_is_alpha = false;
    for c in column.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

/// Header text for one column name.
///
/// # Example
/// ```
/// use place_filter::column_alias;
///
/// assert_eq!(column_alias("fsq_category_labels"), "Fsq Category Labels");
/// assert_eq!(column_alias("po_box"), "PO Box");
/// ```
pub fn column_alias(column: &str) -> String {
    title_case(column).replace("Po_", "PO_").replace('_', " ")
}

/// `(column, header)` pairs for a column list, in column order.
pub fn column_aliases(columns: &[String]) -> Vec<(String, String)> {
    columns
        .iter()
        .map(|column| (column.clone(), column_alias(column)))
        .collect()
}

/// The ordered column list of a row set, read off the first row.
///
/// Every row carries the same columns in the same order, so the first row is
/// representative. An empty row set has no columns.
pub fn column_names(places: &[PlaceRecord]) -> Vec<String> {
    places
        .first()
        .map(|place| place.fields.keys().cloned().collect())
        .unwrap_or_default()
}

/// Thousands-grouped count caption, e.g. `"12,840 places"`.
pub fn place_count_label(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{grouped} places")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_alias_title_cases_snake_case() {
        assert_eq!(column_alias("name"), "Name");
        assert_eq!(column_alias("fsq_category_labels"), "Fsq Category Labels");
        assert_eq!(column_alias("date_created"), "Date Created");
    }

    #[test]
    fn test_column_alias_keeps_postal_box_in_caps() {
        assert_eq!(column_alias("po_box"), "PO Box");
        // Only a title-cased "Po" at a word start is the abbreviation; a
        // word merely ending in "po" is left alone.
        assert_eq!(column_alias("tempo_box"), "Tempo Box");
    }

    #[test]
    fn test_column_alias_restarts_after_digits() {
        assert_eq!(column_alias("address2"), "Address2");
        assert_eq!(column_alias("level2_category"), "Level2 Category");
    }

    #[test]
    fn test_column_aliases_pairs_in_column_order() {
        let columns = vec!["name".to_string(), "po_box".to_string()];
        let pairs = column_aliases(&columns);
        assert_eq!(
            pairs,
            [
                ("name".to_string(), "Name".to_string()),
                ("po_box".to_string(), "PO Box".to_string()),
            ]
        );
    }

    #[test]
    fn test_column_names_come_from_the_first_row() {
        let places = vec![PlaceRecord::new(51.5, -0.1)
            .with_categories(&["Cafe"])
            .with_attribute("name", serde_json::json!("Monmouth"))];
        assert_eq!(
            column_names(&places),
            ["latitude", "longitude", "fsq_category_labels", "name"]
        );
    }

    #[test]
    fn test_column_names_of_empty_row_set() {
        assert!(column_names(&[]).is_empty());
    }

    #[test]
    fn test_place_count_label_groups_thousands() {
        assert_eq!(place_count_label(0), "0 places");
        assert_eq!(place_count_label(42), "42 places");
        assert_eq!(place_count_label(999), "999 places");
        assert_eq!(place_count_label(1_234), "1,234 places");
        assert_eq!(place_count_label(12_840), "12,840 places");
        assert_eq!(place_count_label(1_000_000), "1,000,000 places");
    }
}
