use crate::fetchers::{PerformanceReading, SiteArtifact};
use crate::results::Report;
use crate::scoring::RoadmapItem;
use std::fmt;

/// Headings shown per level
const HEADINGS_SHOWN: usize = 5;

/// Plain-text view of a report
pub struct TextReport<'a>(pub &'a Report);

/// Numbered view of a roadmap
pub struct RoadmapList<'a>(pub &'a [RoadmapItem]);

/// Renders a report as plain text for the terminal
pub fn render_text(report: &Report) -> String {
    TextReport(report).to_string()
}

/// Renders the roadmap as a numbered list
pub fn render_roadmap(roadmap: &[RoadmapItem]) -> String {
    RoadmapList(roadmap).to_string()
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let signals = &report.signals;
        let meta = &signals.metadata;

        writeln!(f, "SEO report for {}", report.url)?;

        section(f, "On-Page SEO")?;
        writeln!(f, "Title: {}", meta.title)?;
        writeln!(f, "Description: {}", meta.description)?;
        writeln!(f, "Canonical: {}", meta.canonical)?;
        writeln!(f, "Viewport: {}", meta.viewport)?;
        writeln!(f, "Headings:")?;
        for (tag, values) in signals.headings.iter() {
            let shown: Vec<&str> = values
                .iter()
                .take(HEADINGS_SHOWN)
                .map(String::as_str)
                .collect();
            writeln!(
                f,
                "  {} ({}) -> {:?}",
                tag.to_uppercase(),
                values.len(),
                shown
            )?;
        }
        writeln!(f, "Word Count: {}", signals.words.total_words)?;
        let top = signals
            .words
            .top_words
            .iter()
            .map(|row| format!("{} ({})", row.word, row.count))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Top Words: {}", top)?;

        section(f, "Technical SEO")?;
        artifact(f, &report.robots)?;
        artifact(f, &report.sitemap)?;
        writeln!(
            f,
            "Structured data: {} JSON-LD block(s)",
            signals.structured_data.blocks.len()
        )?;
        writeln!(f, "{}", performance_line(&report.performance))?;

        section(f, "Scores")?;
        for (category, score) in report.analysis.categories() {
            writeln!(f, "{}: {}/100", category.label(), score.score)?;
            for suggestion in &score.suggestions {
                writeln!(f, "  • {}", suggestion)?;
            }
        }
        writeln!(
            f,
            "Overall: {}/100 (estimated rank {})",
            report.analysis.overall,
            report.analysis.rank_bucket.label()
        )?;

        if !report.analysis.has_suggestions() {
            writeln!(f, "Your SEO looks great!")?;
        }
        Ok(())
    }
}

impl fmt::Display for RoadmapList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        section(f, "Roadmap")?;
        if self.0.is_empty() {
            return writeln!(f, "Nothing to fix.");
        }
        for (i, item) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{:>2}. [+{}] {} ({})",
                i + 1,
                item.expected_boost,
                item.fix,
                item.category.label()
            )?;
        }
        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "\n== {} ==", title)
}

fn artifact(f: &mut fmt::Formatter<'_>, artifact: &SiteArtifact) -> fmt::Result {
    writeln!(f, "{}:", artifact.kind().file_name())?;
    for line in artifact.display_text().lines() {
        writeln!(f, "    {}", line)?;
    }
    Ok(())
}

fn performance_line(reading: &PerformanceReading) -> String {
    match reading {
        PerformanceReading::PageSpeed { score } => format!("PageSpeed Score: {}/100", score),
        PerformanceReading::ResponseTime {
            seconds,
            pagespeed_error,
        } => match pagespeed_error {
            Some(err) => format!(
                "PageSpeed score unavailable ({}). Response time: {:.2}s",
                err, seconds
            ),
            None => format!("Response time: {:.2}s", seconds),
        },
        PerformanceReading::Unavailable { reason } => {
            format!("PageSpeed score unavailable ({})", reason)
        }
        PerformanceReading::Skipped => "PageSpeed check skipped".to_string(),
    }
}
