//! Error handling for the job-tailor application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobTailorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid job dataset: {0}")]
    DataFormat(String),

    #[error("Invalid location pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid resume: {0}")]
    ResumeFormat(String),

    #[error("No job posting with id '{0}'")]
    JobNotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JobTailorError>;
