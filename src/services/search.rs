// src/services/search.rs
// DOCUMENTATION: Client-side style free-text filtering
// PURPOSE: Keep the records whose text fields contain the query, case-insensitively

use crate::models::{Accommodation, Guide, Site, Subscription, User};
use std::borrow::Cow;

/// Records that can be matched against a free-text query
pub trait Searchable {
    /// The 1-3 text fields the query is matched against
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Case-folded substring match against any search field.
/// An empty query matches everything.
pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filter keeping relative order. `None` returns the input unchanged.
pub fn filter_records<T: Searchable>(items: Vec<T>, query: Option<&str>) -> Vec<T> {
    match query {
        Some(q) if !q.is_empty() => items
            .into_iter()
            .filter(|item| matches_query(item, q))
            .collect(),
        _ => items,
    }
}

impl Searchable for Site {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.location.as_str()),
            Cow::Borrowed(self.description.as_str()),
        ]
    }
}

impl Searchable for Guide {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.specialty.as_str()),
        ]
    }
}

impl Searchable for Accommodation {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.location.as_str()),
            Cow::Borrowed(self.kind.as_str()),
        ]
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.full_name()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.role.as_str()),
        ]
    }
}

impl Searchable for Subscription {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.user_name.as_str()),
            Cow::Borrowed(self.user_email.as_str()),
            Cow::Borrowed(self.plan_id.as_str()),
        ]
    }
}
