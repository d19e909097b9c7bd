//! Terminal rendering — spinner while the exchange is in flight, styled
//! report afterwards.
//!
//! Uses `indicatif` for the progress spinner and `console` for colors. All
//! display decisions (truncation, placeholders, banner text) were already
//! made by the presenter; this module only puts them on screen.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::session::presenter::{KeywordSection, ReportView, ScoreTier, ViewState};

/// Spinner shown while a submission is in flight.
pub struct AnalysisProgress {
    pb: ProgressBar,
}

impl AnalysisProgress {
    pub fn start(filename: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("Analyzing {filename}..."));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

/// Renders the result panel for the current view state.
pub fn render(view: &ViewState) {
    match view {
        ViewState::Loading => {
            println!("Analyzing your resume... This may take a few seconds");
        }
        ViewState::Empty => {
            println!("Ready for Analysis");
            println!("Upload your resume and job description to get detailed insights");
        }
        ViewState::Error(message) => {
            let red = Style::new().red().bold();
            println!("{} Analysis Failed", red.apply_to("✗"));
            println!("  {message}");
        }
        ViewState::Populated(report) => render_report(report),
    }
}

fn render_report(report: &ReportView) {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!(
        "{} {}",
        bold.apply_to("Analysis Results"),
        dim.apply_to(format!("({} mode)", report.mode_used))
    );
    println!();
    println!(
        "  {} {} Match Score",
        tier_style(report.tier).apply_to(format!("{}%", report.score)),
        tier_emoji(report.tier)
    );
    println!();

    render_keywords(
        &format!("✅ Found Keywords ({})", report.matching.count),
        &report.matching,
        Style::new().green(),
    );
    render_keywords(
        &format!("⚠️  Missing Keywords ({})", report.missing.count),
        &report.missing,
        Style::new().red(),
    );

    println!("{}", bold.apply_to("💡 Professional Recommendations"));
    for recommendation in &report.recommendations {
        println!("  • {recommendation}");
    }
    println!();
    println!("{}", dim.apply_to(report.mode_banner));
}

fn render_keywords(header: &str, section: &KeywordSection, tag_style: Style) {
    println!("{}", Style::new().bold().apply_to(header));
    match section.placeholder {
        Some(placeholder) => println!("  {}", Style::new().italic().apply_to(placeholder)),
        None => {
            for keyword in &section.display {
                println!("  {}", tag_style.apply_to(keyword));
            }
        }
    }
    println!();
}

fn tier_style(tier: ScoreTier) -> Style {
    match tier {
        ScoreTier::High => Style::new().green().bold(),
        ScoreTier::Medium => Style::new().yellow().bold(),
        ScoreTier::Low => Style::new().red().bold(),
    }
}

fn tier_emoji(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::High => "🎉",
        ScoreTier::Medium => "👍",
        ScoreTier::Low => "⚠️",
    }
}
