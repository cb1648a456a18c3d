//! Loading and lookup of the job posting dataset

use crate::catalog::posting::JobPosting;
use crate::error::{JobTailorError, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// The in-memory job catalog, in dataset file order.
#[derive(Debug)]
pub struct JobCatalog {
    jobs: Vec<JobPosting>,
    source: PathBuf,
}

impl JobCatalog {
    /// Load a catalog from a JSON file containing an array of postings.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| JobTailorError::DataFormat(format!("not valid JSON: {}", e)))?;

        let entries = value.as_array().ok_or_else(|| {
            JobTailorError::DataFormat("top-level value must be an array of postings".to_string())
        })?;

        let mut jobs = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let job: JobPosting = serde_json::from_value(entry.clone()).map_err(|e| {
                JobTailorError::DataFormat(format!("posting at index {}: {}", idx, e))
            })?;
            jobs.push(job);
        }

        let mut seen = HashSet::new();
        for job in &jobs {
            if !seen.insert(job.id.as_str()) {
                return Err(JobTailorError::DataFormat(format!(
                    "duplicate posting id '{}'",
                    job.id
                )));
            }
        }

        info!("Loaded {} postings from {}", jobs.len(), path.display());

        Ok(Self {
            jobs,
            source: path.to_path_buf(),
        })
    }

    /// All postings, in file order.
    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    /// Look up a posting by exact id.
    pub fn get(&self, job_id: &str) -> Result<&JobPosting> {
        debug!("Looking up posting '{}'", job_id);
        self.jobs
            .iter()
            .find(|job| job.id == job_id)
            .ok_or_else(|| JobTailorError::JobNotFound(job_id.to_string()))
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const VALID: &str = r#"[
        {
            "id": "DS-101", "title": "Data Scientist", "company": "Acme",
            "location": "Remote - US", "type": "Full-time",
            "summary": "Build models", "skills": ["Python"], "tools": [],
            "experience_level": "Mid", "description": "Data work",
            "responsibilities": []
        }
    ]"#;

    #[test]
    fn test_load_valid_dataset() {
        let file = write_dataset(VALID);
        let catalog = JobCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.jobs()[0].id, "DS-101");
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let file = write_dataset("not json at all");
        let err = JobCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, JobTailorError::DataFormat(_)));
    }

    #[test]
    fn test_load_rejects_non_array() {
        let file = write_dataset(r#"{"id": "DS-101"}"#);
        let err = JobCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, JobTailorError::DataFormat(_)));
    }

    #[test]
    fn test_load_rejects_missing_field() {
        let file = write_dataset(r#"[{"id": "DS-101", "title": "Data Scientist"}]"#);
        let err = JobCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, JobTailorError::DataFormat(_)));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let one = VALID.trim_start_matches('[').trim_end_matches(']');
        let doubled = format!("[{},{}]", one, one);
        let file = write_dataset(&doubled);
        let err = JobCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, JobTailorError::DataFormat(_)));
    }

    #[test]
    fn test_get_unknown_id() {
        let file = write_dataset(VALID);
        let catalog = JobCatalog::load(file.path()).unwrap();
        let err = catalog.get("XX-999").unwrap_err();
        assert!(matches!(err, JobTailorError::JobNotFound(_)));
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let file = write_dataset(VALID);
        let catalog = JobCatalog::load(file.path()).unwrap();
        assert!(catalog.get("ds-101").is_err());
        assert!(catalog.get("DS-101").is_ok());
    }
}
