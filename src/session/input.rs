use crate::api::{AnalysisMode, AnalysisRequest, ResumeFile};

/// Extensions accepted at the selection surface. Advisory only: an
/// unrecognized extension earns a warning, never a rejection, and nothing
/// downstream enforces it.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt"];

/// The user's current input: selected resume, job-description text, and
/// analysis mode. Persists across submissions until edited or reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    file: Option<ResumeFile>,
    job_description: String,
    mode: AnalysisMode,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current file unconditionally. No content validation.
    pub fn set_file(&mut self, file: ResumeFile) {
        self.file = Some(file);
    }

    /// Replaces the job-description text verbatim.
    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
    }

    /// Clears file, job description, and mode back to defaults. Has no
    /// effect on a request already in flight or on a prior result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn file(&self) -> Option<&ResumeFile> {
        self.file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// True iff a file is selected and the job description is non-empty
    /// after trimming whitespace.
    pub fn is_submit_ready(&self) -> bool {
        self.file.is_some() && !self.job_description.trim().is_empty()
    }

    /// Builds the outbound request from the current input, or `None` when
    /// not submit-ready.
    pub fn build_request(&self) -> Option<AnalysisRequest> {
        if !self.is_submit_ready() {
            return None;
        }
        Some(AnalysisRequest {
            resume: self.file.clone()?,
            job_description: self.job_description.clone(),
            mode: self.mode,
        })
    }
}

/// Advisory extension check on a picked filename, case-insensitive.
pub fn has_accepted_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
