use contracts::system::users::{Role, User, UserStatus};
use serde::{Deserialize, Serialize};

use crate::shared::list_utils::{
    all_sentinel, count_query, count_selected, selection_matches, ListFilter, Searchable,
};

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilters {
    #[serde(with = "all_sentinel")]
    pub role: Option<Role>,
    #[serde(with = "all_sentinel")]
    pub status: Option<UserStatus>,
    pub search_query: String,
}

impl ListFilter<User> for UserFilters {
    fn matches(&self, user: &User) -> bool {
        selection_matches(&self.role, &user.role)
            && selection_matches(&self.status, &user.status)
            && user.matches_search(&self.search_query)
    }

    fn active_count(&self) -> usize {
        count_selected(&self.role) + count_selected(&self.status) + count_query(&self.search_query)
    }

    fn search_query(&self) -> &str {
        &self.search_query
    }

    fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::apply_filters;
    use proptest::prelude::*;
    use serde_json::json;

    fn user(name: &str, email: &str, phone: &str, role: &str, status: &str) -> User {
        serde_json::from_value(json!({
            "name": name,
            "email": email,
            "phone": phone,
            "role": role,
            "status": status
        }))
        .unwrap()
    }

    fn fixtures() -> Vec<User> {
        vec![
            user("Ana Lopez", "ana@city.es", "+34 600 111 222", "citizen", "active"),
            user("Luis Gil", "luis@city.es", "+34 600 333 444", "technician", "active"),
            user("Marta Ruiz", "marta@city.es", "+34 611 555 666", "coordinator", "suspended"),
            user("Root", "root@city.es", "", "admin", "active"),
        ]
    }

    #[test]
    fn test_search_over_name_email_phone() {
        let users = fixtures();
        let by_phone = UserFilters {
            search_query: "611".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&users, &by_phone)[0].name, "Marta Ruiz");

        let by_email = UserFilters {
            search_query: "LUIS@".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&users, &by_email)[0].name, "Luis Gil");
    }

    #[test]
    fn test_role_and_status() {
        let users = fixtures();
        let filters = UserFilters {
            role: None,
            status: Some(UserStatus::Active),
            search_query: String::new(),
        };
        assert_eq!(apply_filters(&users, &filters).len(), 3);

        let filters = UserFilters {
            role: Some(Role::Coordinator),
            status: Some(UserStatus::Active),
            search_query: String::new(),
        };
        assert!(apply_filters(&users, &filters).is_empty());
    }

    #[test]
    fn test_all_sentinel_matches_cleared() {
        let filters: UserFilters =
            serde_json::from_value(json!({ "role": "all", "status": "all" })).unwrap();
        assert_eq!(filters, UserFilters::cleared());
        assert_eq!(filters.active_count(), 0);
        assert_eq!(apply_filters(&fixtures(), &filters).len(), 4);

        let admins: UserFilters =
            serde_json::from_value(json!({ "role": "admin", "status": "all" })).unwrap();
        assert_eq!(admins.role, Some(Role::Admin));
        assert_eq!(apply_filters(&fixtures(), &admins)[0].name, "Root");
    }

    proptest! {
        #[test]
        fn prop_setting_one_dimension_adds_one(
            role in prop::sample::select(Role::all()),
            query in "[a-z]{1,8}",
        ) {
            let cleared = UserFilters::cleared();
            prop_assert_eq!(cleared.active_count(), 0);
            prop_assert_eq!(UserFilters { role: Some(role), ..cleared.clone() }.active_count(), 1);
            prop_assert_eq!(UserFilters { search_query: query, ..cleared }.active_count(), 1);
        }
    }
}
