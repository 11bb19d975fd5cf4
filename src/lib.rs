// src/lib.rs
pub mod config;
pub mod errors;
pub mod models;
pub mod report;
pub mod services;
pub mod session;

pub use errors::AtrustError;
pub use models::{AnalysisResult, MediaKind, SubmissionPayload, SubmissionState};
pub use report::{DisplayModel, ErrorView, MetricBar, ReportView};
pub use services::{ScanApi, ScanClient};
pub use session::{PendingSubmission, SubmissionSession, SubmitTicket};
