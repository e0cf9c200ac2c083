pub mod api;
pub mod codes;
pub mod date_utils;
pub mod display;
pub mod status;
pub mod validation;
