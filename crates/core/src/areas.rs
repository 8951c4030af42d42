//! Grouping of Fyyur venues into `(city, state)` areas.

use serde::Serialize;

/// One city/state bucket of the venue listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area<T> {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<T>,
}

/// Group rows into areas, keeping the order in which each area first appears.
///
/// Input order is preserved inside each area, so callers that sort by
/// `(state, city, ...)` get areas in that same order.
pub fn group_by_area<T>(
    rows: impl IntoIterator<Item = (Option<String>, Option<String>, T)>,
) -> Vec<Area<T>> {
    let mut areas: Vec<Area<T>> = Vec::new();
    for (city, state, item) in rows {
        match areas.iter_mut().find(|a| a.city == city && a.state == state) {
            Some(area) => area.venues.push(item),
            None => areas.push(Area {
                city,
                state,
                venues: vec![item],
            }),
        }
    }
    areas
}
