pub mod error;
pub mod locator;
