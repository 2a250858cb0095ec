// src/core/mod.rs
//! Configuration and the backend client shared by the chat widget and the dashboard

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ChatTimings, ConfigManager, ServiceConfig};
pub use service_client::{SalaryApi, ServiceClient, UploadFile};
