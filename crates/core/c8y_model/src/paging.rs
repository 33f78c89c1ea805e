use crate::maybe::Maybe;
use serde::Deserialize;
use serde::Serialize;

/// Paging statistics attached to collection resources.
///
/// `totalElements` and `totalPages` are only returned when requested with
/// `withTotalElements`/`withTotalPages` and are cached server-side for up
/// to 10 seconds; they are informational and must never drive pagination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStatistics {
    /// The current page of the paginated results, starting at 1.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub current_page: Maybe<u32>,

    /// How many entries of the collection a page holds, at most 2000.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub page_size: Maybe<u32>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub total_elements: Maybe<u64>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub total_pages: Maybe<u32>,
}

/// One page of a paginated collection resource.
///
/// Every collection envelope wraps an ordered list of items plus
/// pagination metadata; this trait gives the pagination iterator a
/// uniform view over them.
pub trait CollectionPage {
    type Item;

    /// The items of this page, in server order. An absent item array is
    /// an empty page.
    fn into_items(self) -> Vec<Self::Item>;

    /// A URI reference to the next page, when the server advertises one.
    fn next_link(&self) -> Option<&str>;

    fn statistics(&self) -> Option<&PageStatistics>;
}
