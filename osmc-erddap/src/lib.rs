pub mod catalog;
pub mod colors;
#[cfg(feature = "api")]
pub mod fetch;
pub mod frame;
pub mod platform;
pub mod query;
