// src/types/mod.rs
//! Wire types exchanged with the salary analysis API

pub mod amount;
pub mod benchmark;
pub mod job;
pub mod response;

pub use amount::Amount;
pub use benchmark::BenchmarkDetails;
pub use job::{CompetitiveAnalysis, JobAnalysis, MarketInsights, SalaryRange};
pub use response::{MessageRequest, MessageResponse, SessionResponse, UploadResponse};
