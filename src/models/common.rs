// src/models/common.rs
// DOCUMENTATION: Types shared by every collection
// PURPOSE: Coordinates, list query parameters and paginated list responses

use serde::{Deserialize, Serialize};

/// Geographic coordinates (WGS84 degrees)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// List query parameters
/// DOCUMENTATION: DTO for parsing the query string of every list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Free-text search (case-insensitive substring)
    pub q: Option<String>,

    /// Page number (1-based)
    pub page: Option<i64>,

    /// Results per page (max 100)
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref()
    }
}

/// Paginated list response
/// DOCUMENTATION: Pagination happens after filtering and never reorders
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    /// Records on this page
    pub data: Vec<T>,

    /// Total number of matches (regardless of pagination)
    pub total_count: i64,

    /// Current page number
    pub page: i64,

    /// Results per page
    pub limit: i64,

    /// Whether more results exist on next page
    pub has_more: bool,
}

impl<T> ListResponse<T> {
    /// Without `page` and `limit` the whole filtered list is returned.
    /// Otherwise `limit` defaults to 20 (max 100) and `page` to 1.
    pub fn paginate(items: Vec<T>, query: &ListQuery) -> Self {
        let total_count = items.len() as i64;

        if query.page.is_none() && query.limit.is_none() {
            return ListResponse {
                data: items,
                total_count,
                page: 1,
                limit: total_count,
                has_more: false,
            };
        }

        let limit = query.limit.unwrap_or(20).clamp(1, 100);
        let page = query.page.unwrap_or(1).max(1);

        // page comes straight from the query string
        let start = page.saturating_sub(1).saturating_mul(limit);
        let start = usize::try_from(start).unwrap_or(usize::MAX);
        let data: Vec<T> = items.into_iter().skip(start).take(limit as usize).collect();

        ListResponse {
            data,
            total_count,
            page,
            limit,
            has_more: total_count > page.saturating_mul(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaginated_returns_everything() {
        let response = ListResponse::paginate((1..=25).collect::<Vec<i32>>(), &ListQuery::default());
        assert_eq!(response.data, (1..=25).collect::<Vec<i32>>());
        assert_eq!(response.total_count, 25);
        assert_eq!(response.page, 1);
        assert!(!response.has_more);
    }

    #[test]
    fn test_page_only_uses_default_limit() {
        let query = ListQuery {
            q: None,
            page: Some(1),
            limit: None,
        };
        let response = ListResponse::paginate((1..=25).collect::<Vec<i32>>(), &query);
        assert_eq!(response.data.len(), 20);
        assert_eq!(response.limit, 20);
        assert!(response.has_more);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let query = ListQuery {
            q: None,
            page: Some(i64::MAX),
            limit: Some(20),
        };
        let response = ListResponse::paginate(vec![1, 2, 3], &query);
        assert!(response.data.is_empty());
        assert_eq!(response.total_count, 3);
        assert!(!response.has_more);
    }

    #[test]
    fn test_paginate_second_page_keeps_order() {
        let query = ListQuery {
            q: None,
            page: Some(2),
            limit: Some(10),
        };
        let response = ListResponse::paginate((1..=25).collect::<Vec<i32>>(), &query);
        assert_eq!(response.data, (11..=20).collect::<Vec<i32>>());
        assert!(response.has_more);
    }

    #[test]
    fn test_paginate_clamps_limit_and_page() {
        let query = ListQuery {
            q: None,
            page: Some(0),
            limit: Some(1000),
        };
        let response = ListResponse::paginate(vec![1, 2, 3], &query);
        assert_eq!(response.limit, 100);
        assert_eq!(response.page, 1);
        assert!(!response.has_more);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let query = ListQuery {
            q: None,
            page: Some(5),
            limit: Some(10),
        };
        let response = ListResponse::paginate(vec![1, 2, 3], &query);
        assert!(response.data.is_empty());
        assert_eq!(response.total_count, 3);
    }
}
