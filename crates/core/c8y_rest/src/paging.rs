use crate::error::C8yRestError;
use c8y_model::CollectionPage;
use futures::future::BoxFuture;
use std::collections::VecDeque;

/// Fetches one page by its 1-based number; `None` stands for a response
/// with no content.
pub(crate) type PageFetcher<'a, P> =
    Box<dyn FnMut(u32) -> BoxFuture<'a, Result<Option<P>, C8yRestError>> + Send + 'a>;

/// A lazy sequence of the items of a paginated collection.
///
/// Items are yielded in server order, page after page; the next page is
/// only requested once the current one is drained and the server
/// advertised a `next` link. An empty page ends the sequence. The total
/// counters of the page statistics are cached server-side and possibly
/// stale, so they never drive termination.
///
/// The iterator holds a sequential cursor: share it between concurrent
/// consumers behind a lock, or give each consumer a fresh one. It cannot
/// be restarted; build a new one to start over from the first page.
pub struct PagedItems<'a, P: CollectionPage> {
    buffered: VecDeque<P::Item>,
    next_page: Option<u32>,
    fetch: PageFetcher<'a, P>,
}

impl<'a, P: CollectionPage> PagedItems<'a, P> {
    pub(crate) fn new(
        first_page: Option<P>,
        first_page_number: u32,
        fetch: PageFetcher<'a, P>,
    ) -> Self {
        let mut paged = PagedItems {
            buffered: VecDeque::new(),
            next_page: None,
            fetch,
        };
        if let Some(page) = first_page {
            paged.ingest(page, first_page_number);
        }
        paged
    }

    fn ingest(&mut self, page: P, page_number: u32) {
        let has_next = page.next_link().is_some();
        let items = page.into_items();
        self.next_page = (has_next && !items.is_empty()).then_some(page_number + 1);
        self.buffered.extend(items);
    }

    /// The next item, fetching the next page when needed.
    pub async fn try_next(&mut self) -> Result<Option<P::Item>, C8yRestError> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Ok(Some(item));
            }
            let Some(page_number) = self.next_page.take() else {
                return Ok(None);
            };
            match (self.fetch)(page_number).await? {
                None => return Ok(None),
                Some(page) => self.ingest(page, page_number),
            }
        }
    }

    /// Drains the remaining items into a vector.
    pub async fn try_collect(mut self) -> Result<Vec<P::Item>, C8yRestError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use c8y_model::device_control::Operation;
    use c8y_model::device_control::OperationCollection;
    use c8y_model::Maybe;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    fn page(ids: &[&str], next: Option<&str>) -> OperationCollection {
        OperationCollection {
            next: next.map(|link| Maybe::Value(link.to_string())).unwrap_or_default(),
            operations: Maybe::Value(
                ids.iter()
                    .map(|id| Operation {
                        id: Maybe::Value(id.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    fn fetcher(
        mut pages: Vec<Option<OperationCollection>>,
        calls: Arc<AtomicUsize>,
    ) -> PageFetcher<'static, OperationCollection> {
        Box::new(move |_page_number| {
            calls.fetch_add(1, Ordering::SeqCst);
            let page = if pages.is_empty() {
                None
            } else {
                pages.remove(0)
            };
            Box::pin(async move { Ok(page) })
        })
    }

    #[tokio::test]
    async fn yields_all_items_in_order_then_stops_fetching() {
        let calls = Arc::new(AtomicUsize::new(0));
        let first = page(&["1", "2"], Some("?currentPage=2"));
        let second = page(&["3"], None);

        let paged = PagedItems::new(
            Some(first),
            1,
            fetcher(vec![Some(second)], Arc::clone(&calls)),
        );
        let ids: Vec<_> = paged
            .try_collect()
            .await
            .unwrap()
            .into_iter()
            .map(|operation| operation.id.into_value().unwrap())
            .collect();

        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn terminates_without_a_next_link() {
        let calls = Arc::new(AtomicUsize::new(0));
        let paged = PagedItems::new(
            Some(page(&["1"], None)),
            1,
            fetcher(vec![], Arc::clone(&calls)),
        );

        assert_eq!(paged.try_collect().await.unwrap().len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn an_empty_page_ends_the_sequence_despite_a_next_link() {
        let calls = Arc::new(AtomicUsize::new(0));
        let empty_with_next = page(&[], Some("?currentPage=3"));

        let paged = PagedItems::new(
            Some(page(&["1"], Some("?currentPage=2"))),
            1,
            fetcher(vec![Some(empty_with_next)], Arc::clone(&calls)),
        );

        assert_eq!(paged.try_collect().await.unwrap().len(), 1);
        // The empty page was fetched, nothing after it.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn a_no_content_page_ends_the_sequence() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut paged = PagedItems::new(
            Some(page(&["1"], Some("?currentPage=2"))),
            1,
            fetcher(vec![None], Arc::clone(&calls)),
        );

        assert!(paged.try_next().await.unwrap().is_some());
        assert!(paged.try_next().await.unwrap().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_first_page_is_an_empty_sequence() {
        let calls = Arc::new(AtomicUsize::new(0));
        let paged: PagedItems<OperationCollection> =
            PagedItems::new(None, 1, fetcher(vec![], Arc::clone(&calls)));
        assert!(paged.try_collect().await.unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn page_numbers_advance_from_the_initial_page() {
        let requested = Arc::new(std::sync::Mutex::new(Vec::new()));
        let log = Arc::clone(&requested);
        let fetch: PageFetcher<'static, OperationCollection> = Box::new(move |page_number| {
            log.lock().unwrap().push(page_number);
            let page = page(&["x"], Some("next"));
            Box::pin(async move { Ok(Some(page)) })
        });

        let mut paged = PagedItems::new(Some(page(&["a"], Some("next"))), 3, fetch);
        for _ in 0..3 {
            paged.try_next().await.unwrap();
        }

        assert_eq!(*requested.lock().unwrap(), [4, 5]);
    }
}
