//! Integration tests for job-tailor

use job_tailor::catalog::{JobCatalog, SearchQuery};
use job_tailor::error::JobTailorError;
use job_tailor::input::InputManager;
use job_tailor::resume::{tailor, TailorOptions};
use std::path::Path;

fn fixture_catalog() -> JobCatalog {
    JobCatalog::load(Path::new("tests/fixtures/sample_jobs.json")).unwrap()
}

#[test]
fn test_search_matches_keywords_across_fields() {
    let catalog = fixture_catalog();
    let matches = SearchQuery::new()
        .with_keywords(["machine", "learning"])
        .run(catalog.jobs())
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "DS-101");
}

#[test]
fn test_search_filters_location() {
    let catalog = fixture_catalog();
    let matches = SearchQuery::new()
        .with_location("New York")
        .run(catalog.jobs())
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "PM-301");
}

#[test]
fn test_unfiltered_search_returns_catalog_in_order() {
    let catalog = fixture_catalog();
    let matches = SearchQuery::new().run(catalog.jobs()).unwrap();
    let ids: Vec<&str> = matches.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["DS-101", "PM-301"]);
}

#[test]
fn test_unknown_job_id() {
    let catalog = fixture_catalog();
    let err = catalog.get("XX-999").unwrap_err();
    assert!(matches!(err, JobTailorError::JobNotFound(_)));
}

#[test]
fn test_tailor_fixture_resume_end_to_end() {
    let catalog = fixture_catalog();
    let job = catalog.get("DS-101").unwrap();

    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .unwrap();

    let tailored = tailor(job, &resume_text, &TailorOptions::default()).unwrap();

    // summary body replaced with a line naming the role and company
    assert!(tailored.contains("Data Scientist"));
    assert!(tailored.contains("Acme"));
    assert!(!tailored.contains("Experienced data professional."));

    // overlapping skills highlighted, in job order
    let highlights = tailored.split("ROLE HIGHLIGHTS").nth(1).unwrap();
    assert!(highlights.contains("- Python"));
    assert!(highlights.contains("- SQL"));
    assert!(!highlights.contains("- Machine Learning"));

    // untouched sections survive verbatim
    assert!(tailored.contains("NAME\nAda Lovelace"));
    assert!(tailored
        .contains("EXPERIENCE\nAnalytical Engines Ltd\nDesigned the first published algorithm."));
}

#[test]
fn test_tailoring_twice_is_stable() {
    let catalog = fixture_catalog();
    let job = catalog.get("DS-101").unwrap();

    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .unwrap();

    let once = tailor(job, &resume_text, &TailorOptions::default()).unwrap();
    let twice = tailor(job, &once, &TailorOptions::default()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_markdown_resume_extraction() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .unwrap();

    assert!(text.contains("ADA LOVELACE"));
    assert!(text.contains("SKILLS"));
    // markdown formatting must be gone
    assert!(!text.contains("**"));
    assert!(!text.contains('#'));
}

#[test]
fn test_markdown_resume_can_be_tailored() {
    let catalog = fixture_catalog();
    let job = catalog.get("DS-101").unwrap();

    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .unwrap();

    let tailored = tailor(job, &text, &TailorOptions::default()).unwrap();
    assert!(tailored.contains("SUMMARY"));
    let highlights = tailored.split("ROLE HIGHLIGHTS").nth(1).unwrap();
    assert!(highlights.contains("- Python"));
}

#[test]
fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[test]
fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz"));
    assert!(result.is_err());
}

#[test]
fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt"));
    assert!(result.is_err());
}

#[test]
fn test_malformed_dataset_is_rejected() {
    use std::io::Write;
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(br#"{"not": "an array"}"#).unwrap();
    let err = JobCatalog::load(file.path()).unwrap_err();
    assert!(matches!(err, JobTailorError::DataFormat(_)));
}
