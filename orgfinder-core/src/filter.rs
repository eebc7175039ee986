use std::collections::HashSet;

use crate::entities::*;

/// Case-insensitive substring match of a search text against a name.
///
/// Uses Unicode lowercasing, not the ASCII-only folding of SQL `LIKE`, so
/// non-Latin names match as well.
pub fn name_matches(name: &str, text: &str) -> bool {
    name.to_lowercase().contains(&text.to_lowercase())
}

/// Organizations whose name contains the search text.
pub fn organizations_by_search_text(text: &str) -> impl Fn(&Organization) -> bool {
    let needle = text.to_owned();
    move |org| name_matches(&org.name, &needle)
}

/// Organizations tagged with at least one of the given activities.
///
/// An empty set matches nothing; "no activity constraint" is expressed by
/// not applying this filter at all.
pub fn organizations_by_activity_ids(
    ids: &HashSet<ActivityId>,
) -> impl Fn(&Organization) -> bool + '_ {
    move |org| org.activities.iter().any(|id| ids.contains(id))
}
