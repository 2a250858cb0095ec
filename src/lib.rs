//! Client for the salary intelligence API: a chat session controller bound
//! to a job analysis, plus the results dashboard and benchmark panel.

pub mod analysis;
pub mod benchmark;
pub mod chat;
pub mod core;
pub mod types;
pub mod utils;

pub use analysis::{load_job_overview, render_overview, JobOverview};
pub use benchmark::BenchmarkPanel;
pub use chat::{ChatSessionController, SendOutcome, UploadOutcome};
pub use crate::core::{ChatTimings, ConfigManager, SalaryApi, ServiceClient, UploadFile};
