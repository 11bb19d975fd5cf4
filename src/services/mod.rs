// src/services/mod.rs
pub mod scan_client;

pub use scan_client::{ScanApi, ScanClient};
