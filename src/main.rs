//! job-tailor: search curated job postings and tailor a resume for applications

mod catalog;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod resume;

use catalog::{JobCatalog, SearchQuery};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{JobTailorError, Result};
use input::InputManager;
use log::{error, info};
use output::{ConsoleFormatter, JsonFormatter};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(cli: Cli, config: Config) -> Result<()> {
    let data_path = cli.data.unwrap_or_else(|| config.data.path.clone());

    match cli.command {
        Commands::Search {
            keywords,
            location,
            output,
        } => {
            let format = cli::parse_output_format(&output).map_err(JobTailorError::InvalidInput)?;

            let catalog = JobCatalog::load(&data_path)?;

            let mut query = SearchQuery::new().with_keywords(cli::parse_keywords(keywords.as_deref()));
            if let Some(pattern) = location {
                query = query.with_location(pattern);
            }

            let matches = query.run(catalog.jobs())?;
            info!("Search returned {} postings", matches.len());

            match format {
                OutputFormat::Console => {
                    if matches.is_empty() {
                        println!("No jobs found for the provided criteria.");
                    } else {
                        let formatter = ConsoleFormatter::new(config.output.color);
                        print!("{}", formatter.format_listing(&matches));
                    }
                }
                OutputFormat::Json => {
                    let formatter = JsonFormatter::new(true);
                    println!("{}", formatter.format_jobs(&matches)?);
                }
            }
        }

        Commands::Show { job_id } => {
            let catalog = JobCatalog::load(&data_path)?;
            let job = catalog.get(&job_id)?;

            let formatter = ConsoleFormatter::new(config.output.color);
            println!("{}", formatter.format_posting(job));
        }

        Commands::Tailor {
            job_id,
            resume: resume_path,
            output,
        } => {
            cli::validate_file_extension(&resume_path, &["txt", "md", "markdown"])
                .map_err(|e| JobTailorError::InvalidInput(format!("Resume file: {}", e)))?;

            // Resolve the job before touching the resume so an unknown id
            // fails without writing anything.
            let catalog = JobCatalog::load(&data_path)?;
            let job = catalog.get(&job_id)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume_path)?;

            let tailored = resume::tailor(job, &resume_text, &config.tailor_options())?;

            let output_path = output.unwrap_or_else(|| default_output_path(&resume_path, &job.id));
            std::fs::write(&output_path, &tailored)?;
            println!("Tailored resume saved to {}", output_path.display());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}", Config::config_path().display());
                println!("Job dataset: {}", config.data.path.display());
                println!("Max highlighted skills: {}", config.tailor.max_highlights);
                println!("Fuzzy skill threshold: {:.2}", config.tailor.fuzzy_threshold);
                println!("Color output: {}", config.output.color);
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}

/// Default output path: the resume's stem with the job id appended.
fn default_output_path(resume_path: &Path, job_id: &str) -> PathBuf {
    let stem = resume_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    resume_path.with_file_name(format!("{}_{}.txt", stem, job_id))
}
