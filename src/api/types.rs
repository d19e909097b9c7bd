//! Data types for the analyze endpoint of the resume analysis service.
//!
//! The request travels as a multipart form (`resume`, `jd`, `mode`); the
//! success response body is JSON matching [`AnalysisResult`] field for field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested analysis strategy.
///
/// Serialized in lowercase ("quick"/"ai"), matching both the `mode` form
/// field and the `mode_used` response field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Fast keyword-based matching (TF-IDF on the service side).
    #[default]
    Quick,
    /// Semantic matching via embeddings. The service may fall back to quick
    /// when its semantic models are not installed.
    Ai,
}

impl AnalysisMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisMode::Quick => "quick",
            AnalysisMode::Ai => "ai",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resume file as picked by the user: raw bytes plus the original filename.
///
/// No content validation happens here; the extension filter at the selection
/// surface is advisory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// One outbound analysis exchange.
///
/// Built from a submit-ready input state at submit time and discarded after
/// a single round trip; never retried or mutated.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume: ResumeFile,
    pub job_description: String,
    pub mode: AnalysisMode,
}

/// Parsed success body of the analyze endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Match score, clamped by the service to 0..=100.
    pub score: u8,
    /// Job-description terms found in the resume, service order preserved.
    pub matching_keywords: Vec<String>,
    /// Job-description terms absent from the resume.
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    /// The mode the service actually applied. May differ from the requested
    /// mode when AI was asked for but is unavailable.
    pub mode_used: AnalysisMode,
    /// Whether the service is capable of AI mode at all.
    pub semantic_available: bool,
}
