#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod json_store;
mod paths;
mod wire;

pub use json_store::JsonFileStore;
pub use paths::SnapshotFile;

#[cfg(test)]
use tempfile as _;
