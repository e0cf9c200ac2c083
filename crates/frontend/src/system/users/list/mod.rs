pub mod filters;

use async_trait::async_trait;
use contracts::shared::api::Page;
use contracts::system::users::User;

pub use filters::UserFilters;

use super::api::{self, UsersQuery};
use crate::shared::api_utils::ApiContext;
use crate::shared::config::ListConfig;
use crate::shared::error::ClientError;
use crate::shared::list_controller::{ListController, PageSource};

/// Admin users list. Server-side filters are forwarded as a hint only.
pub struct UsersSource {
    ctx: ApiContext,
}

impl UsersSource {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }
}

#[async_trait(?Send)]
impl PageSource for UsersSource {
    type Item = User;
    type Filters = UserFilters;

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        filters: &UserFilters,
    ) -> Result<Page<User>, ClientError> {
        let query = UsersQuery::new(
            page,
            limit,
            filters.role.as_ref(),
            filters.status.as_ref(),
            &filters.search_query,
        );
        api::fetch_users_page(&self.ctx, &query).await
    }
}

pub type UsersList = ListController<UsersSource>;

pub fn create_state(ctx: ApiContext, config: &ListConfig) -> UsersList {
    ListController::new(UsersSource::new(ctx), config)
}
