//! Page accumulation for infinite-scroll lists.
//!
//! Starting a load hands out a [`PageTicket`]; the fetched page is committed
//! with [`Pager::apply`]. Every first-page load or refresh bumps the
//! generation, and a ticket from an older generation is discarded on
//! arrival, so a slow response for a previous filter never overwrites the
//! list of the current one.

use contracts::shared::api::{Page, Pagination};

use crate::shared::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    Idle,
    LoadingFirstPage,
    LoadingMore,
    Refreshing,
    Error,
}

impl PagerState {
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            PagerState::LoadingFirstPage | PagerState::LoadingMore | PagerState::Refreshing
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    FirstPage,
    More,
    Refresh,
}

/// Authorization to commit one fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    pub generation: u64,
    /// 1-based page number to request
    pub page: u32,
    pub kind: LoadKind,
}

/// What [`Pager::apply`] did with a successful response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Replaced { count: usize },
    Appended { count: usize },
    /// Superseded by a newer load; nothing changed
    Stale,
}

#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Vec<T>,
    state: PagerState,
    /// Last committed page, 0 before the first success
    page: u32,
    pagination: Pagination,
    generation: u64,
    last_error: Option<ClientError>,
}

impl<T> Default for Pager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pager<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            state: PagerState::Idle,
            page: 0,
            pagination: Pagination::default(),
            generation: 0,
            last_error: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_next_page
    }

    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    /// Load page 1 for a new filter state. Always allowed: it supersedes
    /// whatever is in flight. The current list stays until page 1 lands.
    pub fn start_first_page(&mut self) -> PageTicket {
        self.next_ticket(LoadKind::FirstPage, PagerState::LoadingFirstPage)
    }

    /// Pull-to-refresh. Ignored while a page-1 load is already running.
    pub fn start_refresh(&mut self) -> Option<PageTicket> {
        if matches!(
            self.state,
            PagerState::LoadingFirstPage | PagerState::Refreshing
        ) {
            return None;
        }
        Some(self.next_ticket(LoadKind::Refresh, PagerState::Refreshing))
    }

    /// Next page on scroll end. Only when nothing is loading, something was
    /// loaded, and the server reported another page.
    pub fn start_load_more(&mut self) -> Option<PageTicket> {
        if self.state.is_loading() || self.page == 0 || !self.pagination.has_next_page {
            return None;
        }
        self.state = PagerState::LoadingMore;
        Some(PageTicket {
            generation: self.generation,
            page: self.page + 1,
            kind: LoadKind::More,
        })
    }

    fn next_ticket(&mut self, kind: LoadKind, state: PagerState) -> PageTicket {
        self.generation += 1;
        self.state = state;
        PageTicket {
            generation: self.generation,
            page: 1,
            kind,
        }
    }

    pub fn is_current(&self, ticket: &PageTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Commit a fetch result. Failures leave the list untouched and move to
    /// `Error`; stale tickets change nothing.
    pub fn apply(
        &mut self,
        ticket: PageTicket,
        result: Result<Page<T>, ClientError>,
    ) -> Result<Applied, ClientError> {
        if !self.is_current(&ticket) {
            log::debug!(
                "Discarding page {} of generation {} (current {})",
                ticket.page,
                ticket.generation,
                self.generation
            );
            return Ok(Applied::Stale);
        }

        match result {
            Ok(page) => {
                let count = page.items.len();
                let applied = if ticket.page <= 1 {
                    self.items = page.items;
                    Applied::Replaced { count }
                } else {
                    self.items.extend(page.items);
                    Applied::Appended { count }
                };
                self.page = ticket.page;
                self.pagination = page.pagination;
                self.state = PagerState::Idle;
                self.last_error = None;
                Ok(applied)
            }
            Err(err) => {
                log::warn!("Loading page {} failed: {}", ticket.page, err);
                self.state = PagerState::Error;
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}
