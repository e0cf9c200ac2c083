use contracts::domain::a001_bin::{Bin, BinStatus, BinType, FillLevelBucket};
use serde::{Deserialize, Serialize};

use crate::shared::list_utils::{
    all_sentinel, count_query, count_selected, selection_matches, ListFilter, Searchable,
};

impl Searchable for Bin {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.bin_id.as_str(),
            self.location.address.as_str(),
            self.location.area.as_str(),
        ]
    }
}

/// Filter sheet of the bins screen. `None` is "all".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BinFilters {
    pub search_query: String,
    #[serde(with = "all_sentinel")]
    pub bin_type: Option<BinType>,
    #[serde(with = "all_sentinel")]
    pub status: Option<BinStatus>,
    #[serde(with = "all_sentinel")]
    pub fill_level_bucket: Option<FillLevelBucket>,
}

impl ListFilter<Bin> for BinFilters {
    fn matches(&self, bin: &Bin) -> bool {
        selection_matches(&self.bin_type, &bin.bin_type)
            && selection_matches(&self.status, &bin.status)
            && selection_matches(&self.fill_level_bucket, &bin.fill_bucket())
            && bin.matches_search(&self.search_query)
    }

    fn active_count(&self) -> usize {
        count_query(&self.search_query)
            + count_selected(&self.bin_type)
            + count_selected(&self.status)
            + count_selected(&self.fill_level_bucket)
    }

    fn search_query(&self) -> &str {
        &self.search_query
    }

    fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }
}
