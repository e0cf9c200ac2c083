use contracts::shared::api::Page;
use contracts::system::users::{CreateUserDto, Role, UpdateUserDto, User, UserForm, UserStatus};
use serde::Serialize;

use crate::shared::api_utils::{path_segment, ApiContext};
use crate::shared::error::ClientError;

const BASE: &str = "/users";

/// Query of `GET /users`. The server filters are sent, but the result is
/// filtered again on the client.
#[derive(Debug, Default, Serialize)]
pub struct UsersQuery<'a> {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<&'a str>,
}

impl<'a> UsersQuery<'a> {
    pub fn new(
        page: u32,
        limit: u32,
        role: Option<&'a Role>,
        status: Option<&'a UserStatus>,
        search: &'a str,
    ) -> Self {
        let search = search.trim();
        Self {
            page,
            limit,
            role: role.map(Role::code),
            status: status.map(UserStatus::code),
            search: (!search.is_empty()).then_some(search),
        }
    }
}

pub async fn fetch_users_page(
    ctx: &ApiContext,
    query: &UsersQuery<'_>,
) -> Result<Page<User>, ClientError> {
    ctx.get_page(BASE, query).await
}

pub async fn fetch_user(ctx: &ApiContext, user_id: &str) -> Result<User, ClientError> {
    ctx.get_one(&format!("{}/{}", BASE, path_segment(user_id)))
        .await
}

pub async fn create_user(ctx: &ApiContext, form: &UserForm) -> Result<User, ClientError> {
    let dto: CreateUserDto = form.to_create_dto()?;
    log::info!("Creating {} account for {}", dto.role, dto.email);
    ctx.post(BASE, &dto).await
}

pub async fn update_user(
    ctx: &ApiContext,
    user_id: &str,
    dto: &UpdateUserDto,
) -> Result<User, ClientError> {
    ctx.patch(&format!("{}/{}", BASE, path_segment(user_id)), dto)
        .await
}
