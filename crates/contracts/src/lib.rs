//! Shared contracts of the smart-waste client: domain records, display
//! status rules and form validation. Target independent, no I/O.

pub mod shared;
pub mod domain;
pub mod system;
