use std::sync::Arc;

use crate::domain::entities::bike::Bike;
use crate::domain::entities::query::{PageResult, QueryState, SortDirection};

pub struct QueryService {
    records: Arc<Vec<Bike>>,
}

impl QueryService {
    pub fn new(records: Arc<Vec<Bike>>) -> Self {
        Self { records }
    }

    pub fn query_page(&self, state: &QueryState) -> PageResult {
        query_page(&self.records, state)
    }
}

/// Filter, then sort, then slice. Page indices are computed against the
/// filtered-and-sorted sequence, never the raw record set.
pub fn query_page(records: &[Bike], state: &QueryState) -> PageResult {
    let mut matched = filter_records(records, &state.search);
    sort_records(&mut matched, &state.sort_key, state.direction);

    let total_matches = matched.len();
    let start = state
        .page_index
        .saturating_mul(state.page_size)
        .min(total_matches);
    let end = start.saturating_add(state.page_size).min(total_matches);

    PageResult {
        visible_rows: matched[start..end]
            .iter()
            .map(|bike| (*bike).clone())
            .collect(),
        total_matches,
    }
}

fn filter_records<'a>(records: &'a [Bike], search: &str) -> Vec<&'a Bike> {
    if search.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|bike| bike.matches(search)).collect()
}

// sort_by is stable, and a record without the key compares as `None`, so it
// sorts before every record that has one when ascending.
fn sort_records(records: &mut [&Bike], sort_key: &str, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = a.text(sort_key).cmp(&b.text(sort_key));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
