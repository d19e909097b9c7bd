//! Pure mapping from the session phase to renderable report data.
//!
//! No I/O and no styling decisions happen here; the terminal renderer in
//! `ui` consumes the [`ViewState`] produced by [`present`].

use crate::api::{AnalysisMode, AnalysisResult};

use super::state::Phase;

/// How many keywords are rendered per section. The count label always shows
/// the full list length, not this cap.
pub const KEYWORD_DISPLAY_LIMIT: usize = 15;

pub const NO_MATCHES_PLACEHOLDER: &str = "No keyword matches found";
pub const NO_MISSING_PLACEHOLDER: &str = "Great! No critical keywords missing";
pub const RECOMMENDATIONS_FALLBACK: &str =
    "Your resume looks great! Keep highlighting your technical projects and skills.";

const BANNER_AI: &str = "Deep semantic understanding was used to analyze meaning and context \
     between your resume and job description.";
const BANNER_TRY_AI: &str = "Fast keyword matching was used. Try AI mode for deeper semantic analysis.";
const BANNER_AI_UNAVAILABLE: &str =
    "Fast keyword matching was used. AI mode requires additional libraries to be installed.";

/// Score bucket driving presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    /// High ≥ 80, Medium 60..80, Low < 60.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreTier::High
        } else if score >= 60 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

/// One keyword section of the report, truncated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSection {
    /// First [`KEYWORD_DISPLAY_LIMIT`] entries, order preserved.
    pub display: Vec<String>,
    /// Full list length.
    pub count: usize,
    /// Rendered instead of `display` when the list is empty.
    pub placeholder: Option<&'static str>,
}

/// Everything the renderer needs for a populated report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub score: u8,
    pub tier: ScoreTier,
    pub mode_used: AnalysisMode,
    pub matching: KeywordSection,
    pub missing: KeywordSection,
    /// Verbatim recommendations, or the fixed encouragement fallback when
    /// the service sent none.
    pub recommendations: Vec<String>,
    pub mode_banner: &'static str,
}

/// The four render states of the result panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Empty,
    Populated(ReportView),
}

/// Maps the session phase to a view state.
///
/// Idle means no result has ever been produced: once a submission completes,
/// the phase stays Succeeded or Failed until the next submit.
pub fn present(phase: &Phase) -> ViewState {
    match phase {
        Phase::Idle => ViewState::Empty,
        Phase::Submitting => ViewState::Loading,
        Phase::Failed(message) => ViewState::Error(message.clone()),
        Phase::Succeeded(result) => ViewState::Populated(report_view(result)),
    }
}

fn report_view(result: &AnalysisResult) -> ReportView {
    let recommendations = if result.recommendations.is_empty() {
        vec![RECOMMENDATIONS_FALLBACK.to_string()]
    } else {
        result.recommendations.clone()
    };

    ReportView {
        score: result.score,
        tier: ScoreTier::from_score(result.score),
        mode_used: result.mode_used,
        matching: keyword_section(&result.matching_keywords, NO_MATCHES_PLACEHOLDER),
        missing: keyword_section(&result.missing_keywords, NO_MISSING_PLACEHOLDER),
        recommendations,
        mode_banner: mode_banner(result),
    }
}

fn keyword_section(keywords: &[String], placeholder: &'static str) -> KeywordSection {
    KeywordSection {
        display: keywords.iter().take(KEYWORD_DISPLAY_LIMIT).cloned().collect(),
        count: keywords.len(),
        placeholder: keywords.is_empty().then_some(placeholder),
    }
}

fn mode_banner(result: &AnalysisResult) -> &'static str {
    match (result.mode_used, result.semantic_available) {
        (AnalysisMode::Ai, _) => BANNER_AI,
        (AnalysisMode::Quick, true) => BANNER_TRY_AI,
        (AnalysisMode::Quick, false) => BANNER_AI_UNAVAILABLE,
    }
}
