//! CLI interface for job-tailor

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-tailor")]
#[command(about = "Search curated job postings and tailor your resume for applications")]
#[command(
    long_about = "Filter a job dataset by keywords and location, inspect postings, and rewrite a plain-text resume to emphasize the skills a selected posting asks for"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the job dataset file (overrides the configured default)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search job postings by keyword and location
    Search {
        /// Comma-separated keywords; every keyword must match
        #[arg(short, long)]
        keywords: Option<String>,

        /// Regex matched against the location field, case-insensitively
        #[arg(short, long)]
        location: Option<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Print the full posting for a job id
    Show {
        /// Job id, matched exactly
        job_id: String,
    },

    /// Tailor a resume for a specific job
    Tailor {
        /// Job id to tailor the resume for
        job_id: String,

        /// Path to the resume file (TXT, MD)
        resume: PathBuf,

        /// Output path for the tailored resume
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Split a comma-separated keyword list, dropping blanks.
pub fn parse_keywords(raw_keywords: Option<&str>) -> Vec<String> {
    match raw_keywords {
        Some(raw) => raw
            .split(',')
            .map(|kw| kw.trim().to_string())
            .filter(|kw| !kw.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_keywords(None), Vec::<String>::new());
        assert_eq!(parse_keywords(Some("")), Vec::<String>::new());
        assert_eq!(
            parse_keywords(Some("python, sql ,, machine learning")),
            vec!["python", "sql", "machine learning"]
        );
    }

    #[test]
    fn test_parse_output_format() {
        assert!(parse_output_format("console").is_ok());
        assert!(parse_output_format("JSON").is_ok());
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("resume.txt"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.PDF"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["txt", "md"]).is_err());
    }
}
