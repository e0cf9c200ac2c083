//! Bins screen driven end to end against an in-memory backend.

use std::cell::RefCell;

use async_trait::async_trait;
use contracts::domain::a001_bin::{Bin, FillLevelBucket};
use contracts::shared::api::{ApiEnvelope, Page};
use contracts::shared::display::{ColorToken, IconToken};
use frontend::domain::a001_bin::list::BinFilters;
use frontend::shared::config::load_config;
use frontend::shared::error::ClientError;
use frontend::shared::list_controller::{ListController, PageSource};
use frontend::shared::pager::PagerState;
use serde_json::json;

/// Serves raw JSON envelopes the way `GET /bins` does and records the
/// requested pages.
struct FakeBinsApi {
    pages: Vec<serde_json::Value>,
    requested: RefCell<Vec<(u32, u32)>>,
}

#[async_trait(?Send)]
impl PageSource for FakeBinsApi {
    type Item = Bin;
    type Filters = BinFilters;

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        _filters: &BinFilters,
    ) -> Result<Page<Bin>, ClientError> {
        self.requested.borrow_mut().push((page, limit));
        let body = self
            .pages
            .get(page as usize - 1)
            .cloned()
            .ok_or_else(|| ClientError::Http {
                status: 404,
                message: "Page not found".to_string(),
            })?;
        let envelope: ApiEnvelope<Vec<Bin>> =
            serde_json::from_value(body).map_err(|e| ClientError::Parse(e.to_string()))?;
        envelope.into_page().map_err(ClientError::Application)
    }
}

fn bin_json(bin_id: &str, fill_level: f64, area: &str, is_urgent: bool) -> serde_json::Value {
    json!({
        "_id": format!("oid-{}", bin_id),
        "binId": bin_id,
        "binType": "general",
        "status": "active",
        "fillLevel": fill_level,
        "capacity": 240,
        "location": {
            "address": format!("{} street", area),
            "area": area,
            "coordinates": { "lat": 40.4, "lng": -3.7 }
        },
        "isUrgent": is_urgent
    })
}

fn backend() -> FakeBinsApi {
    FakeBinsApi {
        pages: vec![
            json!({
                "success": true,
                "data": [
                    bin_json("BIN-001", 85.0, "Centro", false),
                    bin_json("BIN-002", 10.0, "Retiro", false),
                    bin_json("BIN-003", 130.0, "Centro", true)
                ],
                "pagination": { "total": 4, "totalPages": 2, "hasNextPage": true }
            }),
            json!({
                "success": true,
                "data": [ bin_json("BIN-004", 62.0, "Latina", false) ],
                "pagination": { "total": 4, "totalPages": 2, "hasNextPage": false }
            }),
        ],
        requested: RefCell::new(Vec::new()),
    }
}

fn bins_list() -> ListController<FakeBinsApi> {
    let config = load_config(Some("[api]\n[list]\npage_size = 3\n[logging]\n")).unwrap();
    ListController::new(backend(), &config.list)
}

#[tokio::test]
async fn bins_screen_loads_filters_and_derives_display() {
    let list = bins_list();
    list.on_mount().await.unwrap();
    list.on_scroll_end().await.unwrap();

    assert_eq!(list.loaded_count(), 4);
    assert!(!list.has_more());
    assert_eq!(list.source().requested.borrow().as_slice(), &[(1, 3), (2, 3)]);

    let bins = list.visible_items();
    let full = &bins[0];
    assert_eq!(full.fill_bucket(), FillLevelBucket::Full);
    assert_eq!(full.fill_color(), ColorToken::Danger);
    // high fill alone does not make a bin urgent
    assert!(full.badges().is_empty());

    // out-of-range reading is clamped, urgency comes from the flag
    let clamped = &bins[2];
    assert_eq!(clamped.fill_level, 100);
    let badges = clamped.badges();
    assert_eq!(badges[0].label, "Urgent");
    assert_eq!(badges[0].icon, IconToken::AlertTriangle);

    list.update_filters(|f| f.fill_level_bucket = Some(FillLevelBucket::Full))
        .await
        .unwrap();
    let ids: Vec<String> = list.visible_items().into_iter().map(|b| b.bin_id).collect();
    // filter change reloads page 1 only
    assert_eq!(ids, vec!["BIN-001", "BIN-003"]);
    assert_eq!(list.active_filter_count(), 1);
}

#[tokio::test]
async fn typing_in_search_reloads_once() {
    let list = bins_list();
    list.on_mount().await.unwrap();

    let mut last = 0;
    for (i, text) in ["c", "ce", "cen"].iter().enumerate() {
        last = list.on_search_input(*text, i as u64 * 100);
    }
    assert_eq!(list.poll_search(400).await.unwrap(), None);
    assert!(list.settle_search(last).await.unwrap().is_some());
    assert_eq!(list.poll_search(10_000).await.unwrap(), None);

    assert_eq!(list.source().requested.borrow().len(), 2);
    let ids: Vec<String> = list.visible_items().into_iter().map(|b| b.bin_id).collect();
    assert_eq!(ids, vec!["BIN-001", "BIN-003"]);
}

#[tokio::test]
async fn application_failure_is_surfaced_and_list_kept() {
    let mut api = backend();
    api.pages[1] = json!({ "success": false, "message": "Database unavailable" });
    let config = load_config(None).unwrap();
    let list = ListController::new(api, &config.list);

    list.on_mount().await.unwrap();
    let err = list.on_scroll_end().await.unwrap_err();
    assert_eq!(err, ClientError::Application("Database unavailable".to_string()));
    assert_eq!(err.user_message(), "Database unavailable");
    assert_eq!(list.state(), PagerState::Error);
    assert_eq!(list.loaded_count(), 3);
}
