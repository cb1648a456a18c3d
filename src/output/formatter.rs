//! Formatters for search results and postings

use crate::catalog::posting::JobPosting;
use crate::error::Result;
use colored::Colorize;

/// Console formatter with optional color
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// One compact block per posting: id, title, company, location.
    pub fn format_listing(&self, jobs: &[&JobPosting]) -> String {
        let mut out = String::new();
        for job in jobs {
            out.push_str(&format!(
                "{} {} - {}\n",
                self.accent(&format!("[{}]", job.id)),
                self.emphasize(&job.title),
                job.company
            ));
            out.push_str(&format!("Location: {}\n", job.location));
            out.push_str(&"-".repeat(60));
            out.push('\n');
        }
        out
    }

    /// The full posting, responsibilities bulleted.
    pub fn format_posting(&self, job: &JobPosting) -> String {
        let mut lines = vec![
            format!(
                "{} {} - {}",
                self.accent(&format!("[{}]", job.id)),
                self.emphasize(&job.title),
                job.company
            ),
            format!(
                "Location: {} | Type: {} | Experience: {}",
                job.location, job.employment_type, job.experience_level
            ),
            format!("Summary: {}", job.summary),
            format!("Skills: {}", job.skills.join(", ")),
            format!("Tools: {}", job.tools.join(", ")),
            format!("Description: {}", job.description),
            "Responsibilities:".to_string(),
        ];
        lines.extend(job.responsibilities.iter().map(|r| format!("  - {}", r)));
        lines.join("\n")
    }

    fn accent(&self, text: &str) -> String {
        if self.use_colors {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn emphasize(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// JSON formatter for machine consumption
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format_jobs(&self, jobs: &[&JobPosting]) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(jobs)?
        } else {
            serde_json::to_string(jobs)?
        };
        Ok(rendered)
    }
}
