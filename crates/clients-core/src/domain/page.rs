//! Offset pagination types.

use serde::{Deserialize, Serialize};

/// Fixed number of clients per page.
pub const CLIENT_PAGE_SIZE: u32 = 4;

/// A zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub number: u32,
    /// Maximum number of items on the page.
    pub size: u32,
}

impl PageRequest {
    /// Request page `number` with `size` items per page.
    pub const fn of(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// Number of items to skip before this page starts.
    pub const fn offset(&self) -> u64 {
        self.number as u64 * self.size as u64
    }
}

/// One page of a collection plus the totals needed to navigate it.
///
/// Serializes with the field names front-ends expect from a paged
/// listing (`content`, `totalPages`, `first`, `last`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Build a page from its content, the request that produced it, and the
    /// size of the whole collection.
    ///
    /// A request past the end yields an empty page rather than an error.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            1
        } else {
            total_elements.div_ceil(u64::from(request.size))
        };

        Self {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            first: request.number == 0,
            last: u64::from(request.number) + 1 >= total_pages,
            content,
            number: request.number,
            size: request.size,
            total_elements,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_number_times_size() {
        assert_eq!(PageRequest::of(0, CLIENT_PAGE_SIZE).offset(), 0);
        assert_eq!(PageRequest::of(3, CLIENT_PAGE_SIZE).offset(), 12);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3, 4], PageRequest::of(0, 4), 9);
        assert_eq!(page.total_pages, 3);
        assert!(page.first);
        assert!(!page.last);
        assert_eq!(page.number_of_elements, 4);
    }

    #[test]
    fn last_page_holds_remainder() {
        let page = Page::new(vec![9], PageRequest::of(2, 4), 9);
        assert!(page.last);
        assert!(!page.first);
        assert_eq!(page.number_of_elements, 1);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page: Page<i32> = Page::new(vec![], PageRequest::of(10, 4), 5);
        assert!(page.empty);
        assert!(page.last);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let page: Page<i32> = Page::new(vec![], PageRequest::of(0, 4), 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn serializes_with_camel_case_totals() {
        let page = Page::new(vec!["a"], PageRequest::of(0, 4), 1);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["numberOfElements"], 1);
        assert_eq!(json["content"][0], "a");
    }
}
