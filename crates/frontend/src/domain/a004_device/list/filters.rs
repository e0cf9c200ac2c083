use contracts::domain::a004_device::{Device, DeviceStatus};
use serde::{Deserialize, Serialize};

use crate::shared::list_utils::{
    all_sentinel, count_query, count_selected, selection_matches, ListFilter, Searchable,
};

impl Searchable for Device {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.device_id.as_str(), self.device_type.as_str()];
        if let Some(bin_id) = &self.bin_id {
            fields.push(bin_id.as_str());
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceFilters {
    pub search_query: String,
    #[serde(with = "all_sentinel")]
    pub status: Option<DeviceStatus>,
    #[serde(with = "all_sentinel")]
    pub is_online: Option<bool>,
}

impl ListFilter<Device> for DeviceFilters {
    fn matches(&self, device: &Device) -> bool {
        selection_matches(&self.status, &device.status)
            && selection_matches(&self.is_online, &device.is_online)
            && device.matches_search(&self.search_query)
    }

    fn active_count(&self) -> usize {
        count_query(&self.search_query)
            + count_selected(&self.status)
            + count_selected(&self.is_online)
    }

    fn search_query(&self) -> &str {
        &self.search_query
    }

    fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }
}
