pub mod aggregate;
pub mod form;

pub use aggregate::*;
pub use form::BinForm;
