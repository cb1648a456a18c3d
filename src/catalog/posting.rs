//! Job posting data model

use serde::{Deserialize, Serialize};

/// A single job posting as it appears in the dataset file.
///
/// Every field is required; a dataset entry missing any of them is rejected
/// at load time rather than defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub experience_level: String,
    pub description: String,
    pub responsibilities: Vec<String>,
}

impl JobPosting {
    /// The text fields a keyword search looks through, joined so that a
    /// match cannot span two fields.
    pub fn search_haystack(&self) -> String {
        let mut haystack = String::with_capacity(
            self.title.len() + self.summary.len() + self.description.len(),
        );
        haystack.push_str(&self.title);
        haystack.push('\n');
        haystack.push_str(&self.summary);
        haystack.push('\n');
        haystack.push_str(&self.description);
        for skill in &self.skills {
            haystack.push('\n');
            haystack.push_str(skill);
        }
        haystack
    }
}
