//! Paginated result wrapper
//!
//! The serialized shape (`content`, `totalElements`, `totalPages`, ...)
//! follows the catalog's original page contract, which the frontend paginator
//! consumes.

use serde::Serialize;

use crate::db::search::params::PageRequest;

/// One page of results plus the totals for the whole match set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(rename = "totalElements")]
    pub total_elements: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    pub size: u32,
    pub number: u32,
    #[serde(rename = "numberOfElements")]
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Assemble a page from one fetched slice and the total match count.
    ///
    /// `total_pages` is ceiling division; a zero-match set has zero pages.
    pub fn new(content: Vec<T>, total_elements: i64, request: &PageRequest) -> Self {
        let size = request.size;
        let total_pages = (total_elements + i64::from(size) - 1) / i64::from(size);
        let number = request.page;
        let number_of_elements = content.len();
        let empty = content.is_empty();
        Self {
            content,
            total_elements,
            total_pages,
            size,
            number,
            number_of_elements,
            first: number == 0,
            last: i64::from(number) + 1 >= total_pages,
            empty,
        }
    }

    /// Swap the content for a derived representation, keeping the totals.
    pub fn with_content<U>(self, content: Vec<U>) -> Page<U> {
        let number_of_elements = content.len();
        Page {
            content,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            size: self.size,
            number: self.number,
            number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: u32, size: u32) -> PageRequest {
        PageRequest { page, size }
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        let page = Page::new(vec![(); 21], 25, &request(0, 21));
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_elements, 25);
        assert!(page.first);
        assert!(!page.last);
    }

    #[test]
    fn last_partial_page_reports_last() {
        let page = Page::new(vec![(); 4], 25, &request(1, 21));
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.number_of_elements, 4);
        assert!(!page.first);
        assert!(page.last);
    }

    #[test]
    fn zero_matches_has_zero_pages() {
        let page = Page::<()>::new(Vec::new(), 0, &request(0, 21));
        assert_eq!(page.total_pages, 0);
        assert!(page.empty);
        assert!(page.last);
    }

    #[test]
    fn with_content_keeps_totals() {
        let page = Page::new(vec![1, 2, 3], 9, &request(0, 3)).with_content(vec!["a", "b", "c"]);
        assert_eq!(page.total_elements, 9);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.content, vec!["a", "b", "c"]);
    }
}
