//! Keyword and location filtering over the job catalog

use crate::catalog::posting::JobPosting;
use crate::error::{JobTailorError, Result};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// A search over the catalog. Keywords combine with AND: every keyword must
/// occur as a case-insensitive substring of the posting's title, summary,
/// description, or one of its skills. The location pattern is a
/// case-insensitive regex matched anywhere in the location field.
#[derive(Debug, Default, Clone)]
pub struct SearchQuery {
    keywords: Vec<String>,
    location: Option<String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add keywords, dropping blanks and duplicates while keeping order.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                continue;
            }
            if seen.insert(keyword.to_lowercase()) {
                self.keywords.push(keyword.to_string());
            }
        }
        self
    }

    pub fn with_location(mut self, pattern: impl Into<String>) -> Self {
        self.location = Some(pattern.into());
        self
    }

    /// Run the query, preserving catalog order in the result.
    pub fn run<'a>(&self, jobs: &'a [JobPosting]) -> Result<Vec<&'a JobPosting>> {
        let location_regex = match &self.location {
            Some(pattern) => Some(compile_location_pattern(pattern)?),
            None => None,
        };

        let keyword_matcher = if self.keywords.is_empty() {
            None
        } else {
            let matcher = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(&self.keywords)
                .map_err(|e| {
                    JobTailorError::InvalidInput(format!("Failed to build keyword matcher: {}", e))
                })?;
            Some(matcher)
        };

        let mut matches = Vec::new();
        for job in jobs {
            if let Some(regex) = &location_regex {
                if !regex.is_match(&job.location) {
                    continue;
                }
            }

            if let Some(matcher) = &keyword_matcher {
                let haystack = job.search_haystack();
                let mut found = HashSet::new();
                for mat in matcher.find_overlapping_iter(&haystack) {
                    found.insert(mat.pattern().as_usize());
                }
                if found.len() < self.keywords.len() {
                    continue;
                }
            }

            matches.push(job);
        }

        debug!(
            "Query matched {} of {} postings (keywords: {:?}, location: {:?})",
            matches.len(),
            jobs.len(),
            self.keywords,
            self.location
        );

        Ok(matches)
    }
}

fn compile_location_pattern(pattern: &str) -> Result<Regex> {
    let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
    Ok(regex)
}
