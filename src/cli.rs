//! Command-line interface for cvmatch, built on clap.
//!
//! The `analyze` subcommand runs one resume/job-description exchange against
//! the configured service; `modes` describes the available analysis modes.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::api::AnalysisMode;

/// cvmatch — resume analysis client.
#[derive(Debug, Parser)]
#[command(name = "cvmatch", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Service endpoint, overriding the config file and environment.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Enables detailed output (request id, timing).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Analysis mode as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Fast keyword-based matching.
    Quick,
    /// Semantic matching via AI embeddings, if the service supports it.
    Ai,
}

impl From<ModeArg> for AnalysisMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Quick => AnalysisMode::Quick,
            ModeArg::Ai => AnalysisMode::Ai,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyzes a resume against a job description.
    Analyze {
        /// Path to the resume file (pdf, docx, doc or txt).
        resume: PathBuf,

        /// Job description text.
        #[arg(long, conflicts_with = "jd_file")]
        jd: Option<String>,

        /// Path to a file containing the job description.
        #[arg(long)]
        jd_file: Option<PathBuf>,

        /// Analysis mode; defaults to the configured mode.
        #[arg(long)]
        mode: Option<ModeArg>,

        /// Prints the raw analysis result as JSON instead of the report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Lists the available analysis modes.
    Modes,
}
