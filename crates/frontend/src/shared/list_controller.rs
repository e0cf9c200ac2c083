//! Screen-level list state: pager + filters + debounced search.
//!
//! A screen owns one controller (usually behind an `Rc`) and forwards UI
//! events to it. Methods take `&self`; interior state lives in `RefCell`s
//! and no borrow is held across an `.await`.

use std::cell::RefCell;

use async_trait::async_trait;
use contracts::shared::api::Page;

use crate::shared::config::ListConfig;
use crate::shared::debounce::SearchDebouncer;
use crate::shared::error::ClientError;
use crate::shared::list_utils::{apply_filters, ListFilter};
use crate::shared::pager::{Applied, PageTicket, Pager, PagerState};

/// Remote paged endpoint behind a list screen
#[async_trait(?Send)]
pub trait PageSource {
    type Item: Clone;
    type Filters: ListFilter<Self::Item> + Clone;

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        filters: &Self::Filters,
    ) -> Result<Page<Self::Item>, ClientError>;
}

pub struct ListController<S: PageSource> {
    source: S,
    page_size: u32,
    pager: RefCell<Pager<S::Item>>,
    filters: RefCell<S::Filters>,
    search: RefCell<SearchDebouncer<String>>,
}

impl<S: PageSource> ListController<S> {
    pub fn new(source: S, config: &ListConfig) -> Self {
        Self {
            source,
            page_size: config.page_size.max(1),
            pager: RefCell::new(Pager::new()),
            filters: RefCell::new(S::Filters::default()),
            search: RefCell::new(SearchDebouncer::new(u64::from(config.search_debounce_ms))),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> PagerState {
        self.pager.borrow().state()
    }

    pub fn has_more(&self) -> bool {
        self.pager.borrow().has_more()
    }

    pub fn last_error(&self) -> Option<ClientError> {
        self.pager.borrow().last_error().cloned()
    }

    pub fn loaded_count(&self) -> usize {
        self.pager.borrow().items().len()
    }

    pub fn filters(&self) -> S::Filters {
        self.filters.borrow().clone()
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.borrow().active_count()
    }

    /// Runs `view` over the accumulated pages with the current filters
    /// applied, in load order. The references point into the pager, so
    /// `view` must not call back into the controller.
    pub fn with_visible_items<R>(&self, view: impl FnOnce(&[&S::Item]) -> R) -> R {
        let pager = self.pager.borrow();
        let filters = self.filters.borrow();
        view(&apply_filters(pager.items(), &*filters))
    }

    /// Owned copy of [`Self::with_visible_items`]
    pub fn visible_items(&self) -> Vec<S::Item> {
        self.with_visible_items(|items| items.iter().map(|item| (*item).clone()).collect())
    }

    // ------------------------------------------------------------------------
    // UI events
    // ------------------------------------------------------------------------

    pub async fn on_mount(&self) -> Result<Applied, ClientError> {
        let ticket = self.pager.borrow_mut().start_first_page();
        self.run(ticket).await
    }

    /// Pull-to-refresh; `None` when a page-1 load is already running
    pub async fn on_refresh(&self) -> Result<Option<Applied>, ClientError> {
        let ticket = self.pager.borrow_mut().start_refresh();
        match ticket {
            Some(ticket) => self.run(ticket).await.map(Some),
            None => Ok(None),
        }
    }

    /// Infinite scroll; `None` when there is nothing to load right now
    pub async fn on_scroll_end(&self) -> Result<Option<Applied>, ClientError> {
        let ticket = self.pager.borrow_mut().start_load_more();
        match ticket {
            Some(ticket) => self.run(ticket).await.map(Some),
            None => Ok(None),
        }
    }

    /// Replace the filter selections and reload from page 1. A pending
    /// search edit is dropped in favour of the query in `filters`.
    pub async fn on_filters_changed(&self, filters: S::Filters) -> Result<Applied, ClientError> {
        self.search.borrow_mut().cancel();
        *self.filters.borrow_mut() = filters;
        self.on_mount().await
    }

    /// Change one dimension in place and reload from page 1
    pub async fn update_filters<F>(&self, change: F) -> Result<Applied, ClientError>
    where
        F: FnOnce(&mut S::Filters),
    {
        let mut filters = self.filters();
        change(&mut filters);
        self.on_filters_changed(filters).await
    }

    pub async fn clear_filters(&self) -> Result<Applied, ClientError> {
        self.on_filters_changed(<S::Filters as ListFilter<S::Item>>::cleared())
            .await
    }

    /// Record a keystroke; nothing is fetched yet. Returns the generation
    /// to hand to [`Self::settle_search`] when the debounce timer fires.
    pub fn on_search_input(&self, text: impl Into<String>, now_ms: u64) -> u64 {
        self.search.borrow_mut().push(text.into(), now_ms)
    }

    pub fn search_window_ms(&self) -> u64 {
        self.search.borrow().window_ms()
    }

    /// Timer callback for the edit with `generation`. Only the latest edit
    /// reloads; earlier ones resolve to `None`.
    pub async fn settle_search(&self, generation: u64) -> Result<Option<Applied>, ClientError> {
        let query = self.search.borrow_mut().take_if_latest(generation);
        self.apply_search(query).await
    }

    /// Clock-driven alternative to [`Self::settle_search`]
    pub async fn poll_search(&self, now_ms: u64) -> Result<Option<Applied>, ClientError> {
        let query = self.search.borrow_mut().poll(now_ms);
        self.apply_search(query).await
    }

    async fn apply_search(&self, query: Option<String>) -> Result<Option<Applied>, ClientError> {
        let Some(query) = query else {
            return Ok(None);
        };
        log::debug!("Search settled on {:?}", query);
        self.filters.borrow_mut().set_search_query(query);
        self.on_mount().await.map(Some)
    }

    async fn run(&self, ticket: PageTicket) -> Result<Applied, ClientError> {
        let filters = self.filters();
        let result = self
            .source
            .fetch_page(ticket.page, self.page_size, &filters)
            .await;
        self.pager.borrow_mut().apply(ticket, result)
    }
}
