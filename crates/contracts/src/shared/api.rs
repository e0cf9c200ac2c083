use serde::{Deserialize, Serialize};

/// Pagination block of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Envelope every backend endpoint answers with:
/// `{ success, data?, message?, pagination? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// One fetched page of a list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ApiEnvelope<T> {
    /// Message of a `success: false` answer, with a generic text when the
    /// backend sent none.
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Request failed".to_string())
    }

    /// `Err(message)` for application-level failures, otherwise the payload.
    pub fn into_data(self) -> Result<Option<T>, String> {
        if !self.success {
            return Err(self.failure_message());
        }
        Ok(self.data)
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// List payload plus pagination. A missing pagination block means a
    /// single page.
    pub fn into_page(self) -> Result<Page<T>, String> {
        if !self.success {
            return Err(self.failure_message());
        }
        let items = self.data.unwrap_or_default();
        let pagination = self.pagination.unwrap_or_else(|| Pagination {
            total: items.len() as u64,
            total_pages: 1,
            has_next_page: false,
        });
        Ok(Page { items, pagination })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_bin::{Bin, FillLevelBucket};
    use crate::domain::a003_work_order::{WorkOrder, WorkOrderStatus};

    #[test]
    fn test_page_envelope_parses() {
        let json = r#"{
            "success": true,
            "data": [1, 2, 3],
            "pagination": { "total": 7, "totalPages": 3, "hasNextPage": true }
        }"#;
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        let page = envelope.into_page().unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.pagination.has_next_page);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_failure_envelope_carries_message() {
        let json = r#"{ "success": false, "message": "Bin not found" }"#;
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_page().unwrap_err(), "Bin not found");
    }

    #[test]
    fn test_missing_pagination_is_single_page() {
        let json = r#"{ "success": true, "data": ["a"] }"#;
        let envelope: ApiEnvelope<Vec<String>> = serde_json::from_str(json).unwrap();
        let page = envelope.into_page().unwrap();
        assert!(!page.pagination.has_next_page);
        assert_eq!(page.pagination.total, 1);
    }

    #[test]
    fn test_single_bin_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "binId": "BIN-042", "binType": "recyclable", "status": "active",
                "fillLevel": 64, "capacity": 360,
                "location": { "address": "Gran Via 1", "area": "Centro",
                              "coordinates": { "lat": 40.42, "lng": -3.70 } }
            }
        }"#;
        let envelope: ApiEnvelope<Bin> = serde_json::from_str(json).unwrap();
        let bin = envelope.into_data().unwrap().unwrap();
        assert_eq!(bin.bin_id, "BIN-042");
        assert_eq!(bin.fill_bucket(), FillLevelBucket::High);
    }

    #[test]
    fn test_single_record_envelope_without_data() {
        let envelope: ApiEnvelope<WorkOrder> =
            serde_json::from_str(r#"{ "success": true, "message": "Deleted" }"#).unwrap();
        assert_eq!(envelope.into_data().unwrap(), None);

        let failed: ApiEnvelope<Bin> =
            serde_json::from_str(r#"{ "success": false, "message": "Bin not found" }"#).unwrap();
        assert_eq!(failed.into_data().unwrap_err(), "Bin not found");
    }

    #[test]
    fn test_single_work_order_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "workOrderId": "WO-7", "issueType": "battery-low", "priority": "high",
                "status": "in-progress", "deviceId": "DEV-3"
            }
        }"#;
        let envelope: ApiEnvelope<WorkOrder> = serde_json::from_str(json).unwrap();
        let order = envelope.into_data().unwrap().unwrap();
        assert_eq!(order.status, WorkOrderStatus::InProgress);
        assert_eq!(order.action_taken, None);
    }
}
