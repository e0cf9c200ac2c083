use contracts::system::users::Role;
use serde::{Deserialize, Serialize};

/// Identity of the signed-in actor.
///
/// Passed to every API call through [`crate::shared::api_utils::ApiContext`]
/// instead of living in a global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            display_name: None,
            access_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    pub fn is_technician(&self) -> bool {
        self.role == Role::Technician
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        let session = Session::new("tech-1", Role::Technician);
        assert_eq!(session.authorization_header(), None);
        let session = session.with_token("abc");
        assert_eq!(session.authorization_header().as_deref(), Some("Bearer abc"));
        assert!(session.is_technician());
    }
}
