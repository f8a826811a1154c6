//! Infrastructure layer: tenant-isolated stores, configuration.

pub mod config;
pub mod read_model;
pub mod stores;
