pub mod aggregate;

pub use aggregate::*;

#[cfg(test)]
pub(crate) use aggregate::tests;
