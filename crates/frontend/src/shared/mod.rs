pub mod api_utils;
pub mod config;
pub mod debounce;
pub mod error;
pub mod list_controller;
pub mod list_utils;
pub mod pager;
