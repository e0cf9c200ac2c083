pub mod session;
pub mod storage;

pub use session::Session;

use crate::shared::api_utils::ApiContext;
use crate::shared::config::ClientConfig;
use crate::shared::error::ClientError;

/// API context for the stored session, or `NotAuthenticated`
pub fn restore_context(config: &ClientConfig) -> Result<ApiContext, ClientError> {
    let session = storage::load_session().ok_or(ClientError::NotAuthenticated)?;
    log::debug!("Restored session of {} ({})", session.user_id, session.role);
    Ok(ApiContext::new(config, session))
}
