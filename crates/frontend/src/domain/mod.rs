pub mod a001_bin;
pub mod a002_collection_request;
pub mod a003_work_order;
pub mod a004_device;
