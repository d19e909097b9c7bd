mod api;
mod cli;
mod config;
mod error;
mod orchestrator;
mod session;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use api::{AnalysisClient, AnalysisMode, ResumeFile};
use cli::{Cli, Command, ModeArg};
use config::CvmatchConfig;
use orchestrator::SessionDriver;
use session::{Command as SessionCommand, Phase, Session, ViewState, has_accepted_extension, present};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = CvmatchConfig::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint.trim_end_matches('/').to_string();
    }

    match cli.command {
        Command::Analyze {
            resume,
            jd,
            jd_file,
            mode,
            json,
        } => run_analyze(config, cli.verbose, resume, jd, jd_file, mode, json).await,
        Command::Modes => {
            print_modes();
            Ok(())
        }
    }
}

async fn run_analyze(
    config: CvmatchConfig,
    verbose: bool,
    resume: PathBuf,
    jd: Option<String>,
    jd_file: Option<PathBuf>,
    mode: Option<ModeArg>,
    json: bool,
) -> Result<()> {
    let file = read_resume(&resume)?;
    let job_description = read_job_description(jd, jd_file)?;
    let mode = mode.map(AnalysisMode::from).unwrap_or(config.default_mode);

    let filename = file.filename.clone();
    let mut session = Session::new();
    session.apply(SessionCommand::SetFile(file));
    session.apply(SessionCommand::SetJobDescription(job_description));
    session.apply(SessionCommand::SetMode(mode));

    let driver = SessionDriver::new(AnalysisClient::with_base_url(config.endpoint.clone()));
    let progress = ui::AnalysisProgress::start(&filename);
    let record = driver.submit(&mut session).await;
    progress.finish();

    let Some(record) = record else {
        bail!("Nothing to submit: a resume and a non-empty job description are required");
    };

    if verbose {
        eprintln!(
            "request {} (generation {}) completed in {}ms against {}",
            record.request_id,
            record.generation,
            record.duration_ms(),
            config.endpoint
        );
    }

    if json && let Phase::Succeeded(result) = session.phase() {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let view = present(session.phase());
    ui::render(&view);

    if matches!(view, ViewState::Error(_)) {
        std::process::exit(1);
    }
    Ok(())
}

fn read_resume(path: &Path) -> Result<ResumeFile> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("Invalid resume path: {}", path.display()))?;

    if !has_accepted_extension(&filename) {
        eprintln!(
            "Warning: {filename} does not look like a supported resume format \
             (pdf, docx, doc, txt); sending it anyway"
        );
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read resume file: {}", path.display()))?;

    Ok(ResumeFile { filename, bytes })
}

fn read_job_description(jd: Option<String>, jd_file: Option<PathBuf>) -> Result<String> {
    match (jd, jd_file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read job description file: {}", path.display())),
        (None, None) => bail!("Provide the job description via --jd or --jd-file"),
    }
}

fn print_modes() {
    println!("⚡ quick - fast keyword-based analysis using TF-IDF");
    println!("🤖 ai    - deep understanding using AI embeddings (if available on the service)");
}
