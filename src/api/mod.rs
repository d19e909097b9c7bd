pub mod client;
pub mod error;
pub mod types;

pub use client::{AnalysisClient, AnalyzeService};
pub use error::ApiError;
pub use types::{AnalysisMode, AnalysisRequest, AnalysisResult, ResumeFile};
