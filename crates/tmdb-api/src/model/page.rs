//! Paged result lists.

use serde::{Deserialize, Serialize};

use crate::hydrate::model_fields;

/// One page of a paged endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Current page number (1-based).
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
    /// Items on this page.
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: 0,
            total_pages: 0,
            total_results: 0,
            results: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Returns `true` if a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Paging metadata of a paged response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    /// Current page number (1-based).
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

model_fields!(PageInfo {
    "page" => page,
    "total_pages" => total_pages,
    "total_results" => total_results,
});
