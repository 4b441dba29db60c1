//! Substring search over the category label set.
//!
//! Narrows the selector's label list as the user types. Matching is
//! case-insensitive on both sides and positional anywhere in the label;
//! the result keeps the index order of the input, so the pinned
//! uncategorized entry stays first whenever it matches.

/// Labels containing the query as a case-insensitive substring.
///
/// An empty query matches every label. The query is matched literally,
/// not as a pattern.
///
/// # Example
/// ```
/// use place_filter::search_labels;
///
/// let labels = vec![
///     "None".to_string(),
///     "Bar".to_string(),
///     "Cafe".to_string(),
///     "Museum".to_string(),
/// ];
/// assert_eq!(search_labels(&labels, "a"), ["Bar", "Cafe"]);
/// assert_eq!(search_labels(&labels, ""), labels);
/// ```
pub fn search_labels(labels: &[String], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    labels
        .iter()
        .filter(|label| label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
