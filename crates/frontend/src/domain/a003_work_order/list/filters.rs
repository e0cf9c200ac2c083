use contracts::domain::a003_work_order::{Priority, WorkOrder, WorkOrderStatus};
use serde::{Deserialize, Serialize};

use crate::shared::list_utils::{
    all_sentinel, count_query, count_selected, selection_matches, ListFilter, Searchable,
};

impl Searchable for WorkOrder {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.work_order_id.as_str(), self.device_id.as_str()];
        if let Some(bin_id) = &self.bin_id {
            fields.push(bin_id.as_str());
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkOrderFilters {
    pub search_query: String,
    /// Matched against the stored status, not the "Resolved" override
    #[serde(with = "all_sentinel")]
    pub status: Option<WorkOrderStatus>,
    #[serde(with = "all_sentinel")]
    pub priority: Option<Priority>,
}

impl ListFilter<WorkOrder> for WorkOrderFilters {
    fn matches(&self, order: &WorkOrder) -> bool {
        selection_matches(&self.status, &order.status)
            && selection_matches(&self.priority, &order.priority)
            && order.matches_search(&self.search_query)
    }

    fn active_count(&self) -> usize {
        count_query(&self.search_query)
            + count_selected(&self.status)
            + count_selected(&self.priority)
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
    use serde_json::json;

    fn order(id: &str, status: &str, priority: &str, device: &str, bin: Option<&str>) -> WorkOrder {
        serde_json::from_value(json!({
            "workOrderId": id,
            "issueType": "sensor-malfunction",
            "priority": priority,
            "status": status,
            "deviceId": device,
            "binId": bin
        }))
        .unwrap()
    }

    #[test]
    fn test_search_includes_optional_bin_id() {
        let orders = vec![
            order("WO-1", "pending", "high", "DEV-1", Some("BIN-001")),
            order("WO-2", "in-progress", "low", "DEV-2", None),
            order("WO-3", "pending", "medium", "DEV-3", Some("BIN-010")),
        ];

        let filters = WorkOrderFilters {
            search_query: "bin-0".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&orders, &filters).len(), 2);

        let filters = WorkOrderFilters {
            search_query: "dev-2".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&orders, &filters)[0].work_order_id, "WO-2");
    }

    #[test]
    fn test_status_and_priority() {
        let orders = vec![
            order("WO-1", "pending", "high", "DEV-1", None),
            order("WO-2", "pending", "low", "DEV-2", None),
            order("WO-3", "escalated", "high", "DEV-3", None),
        ];
        let filters = WorkOrderFilters {
            status: Some(WorkOrderStatus::Pending),
            priority: Some(Priority::High),
            ..Default::default()
        };
        let result = apply_filters(&orders, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].work_order_id, "WO-1");
        assert_eq!(filters.active_count(), 2);
        assert_eq!(WorkOrderFilters::cleared().active_count(), 0);
    }
}
