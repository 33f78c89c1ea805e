//! One facade per resource group, one method per documented endpoint.
//!
//! Facade methods validate parameters, build the request, run the one
//! round trip through the transport and decode the outcome. List
//! endpoints additionally come in an `iter_*` flavor wrapping the pages
//! into a lazy item sequence.

pub mod feature_toggles;
pub mod new_device_requests;
pub mod operations;
pub mod tenant_applications;

/// The pagination query parameters shared by all collection endpoints.
///
/// The page counters requested with `with_total_elements` and
/// `with_total_pages` are cached server-side for up to 10 seconds;
/// request them for display, not for control flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// The page to fetch, starting at 1.
    pub current_page: Option<u32>,

    /// Entries per page, at most 2000.
    pub page_size: Option<u32>,

    pub with_total_elements: Option<bool>,

    pub with_total_pages: Option<bool>,
}

impl PageQuery {
    /// Appends the set parameters; `page_override` replaces
    /// `current_page` when the pagination iterator walks the follow-up
    /// pages.
    pub(crate) fn append_to(
        &self,
        query: &mut Vec<(&'static str, String)>,
        page_override: Option<u32>,
    ) {
        if let Some(page) = page_override.or(self.current_page) {
            query.push(("currentPage", page.to_string()));
        }
        if let Some(size) = self.page_size {
            query.push(("pageSize", size.to_string()));
        }
        if let Some(with_total_elements) = self.with_total_elements {
            query.push(("withTotalElements", with_total_elements.to_string()));
        }
        if let Some(with_total_pages) = self.with_total_pages {
            query.push(("withTotalPages", with_total_pages.to_string()));
        }
    }
}
