#![warn(clippy::uninlined_format_args)]

pub mod json_store;

pub use json_store::{JsonEventStore, StoreError};
