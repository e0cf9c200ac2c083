use contracts::domain::a002_collection_request::{CollectionRequest, RequestStatus, WasteType};
use serde::{Deserialize, Serialize};

use crate::shared::list_utils::{
    all_sentinel, count_query, count_selected, selection_matches, ListFilter, Searchable,
};

impl Searchable for CollectionRequest {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.tracking_id.as_str(),
            self.address.street.as_str(),
            self.address.city.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestFilters {
    pub search_query: String,
    #[serde(with = "all_sentinel")]
    pub status: Option<RequestStatus>,
    #[serde(with = "all_sentinel")]
    pub waste_type: Option<WasteType>,
}

impl ListFilter<CollectionRequest> for RequestFilters {
    fn matches(&self, request: &CollectionRequest) -> bool {
        selection_matches(&self.status, &request.status)
            && selection_matches(&self.waste_type, &request.waste_type)
            && request.matches_search(&self.search_query)
    }

    fn active_count(&self) -> usize {
        count_query(&self.search_query)
            + count_selected(&self.status)
            + count_selected(&self.waste_type)
    }

    fn search_query(&self) -> &str {
        &self.search_query
    }

    fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }
}
