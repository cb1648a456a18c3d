//! Heading-delimited resume document structure

use crate::error::{JobTailorError, Result};

/// A heading line plus the body lines that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub body: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            body,
        }
    }
}

/// A resume split into sections. Lines before the first heading form the
/// preamble. Headings are kept exactly as found; body lines, blank lines
/// included, are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    pub preamble: Vec<String>,
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// Parse resume text by scanning for heading lines.
    ///
    /// A heading is an unindented, unbulleted line whose trimmed text is
    /// non-empty and consists solely of uppercase letters and spaces.
    pub fn parse(text: &str) -> Result<Self> {
        if text.lines().next().is_none() {
            return Err(JobTailorError::ResumeFormat(
                "resume text is empty".to_string(),
            ));
        }

        let mut preamble = Vec::new();
        let mut sections: Vec<Section> = Vec::new();

        for line in text.lines() {
            if is_heading(line) {
                sections.push(Section::new(line, Vec::new()));
            } else if let Some(section) = sections.last_mut() {
                section.body.push(line.to_string());
            } else {
                preamble.push(line.to_string());
            }
        }

        Ok(Self { preamble, sections })
    }

    /// Index of the first section whose heading matches, ignoring case.
    pub fn find_section(&self, heading: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| s.heading.trim().eq_ignore_ascii_case(heading))
    }

    pub fn section_body(&self, heading: &str) -> Option<&[String]> {
        self.find_section(heading)
            .map(|idx| self.sections[idx].body.as_slice())
    }

    pub fn replace_body(&mut self, index: usize, body: Vec<String>) {
        self.sections[index].body = body;
    }

    pub fn insert_section(&mut self, index: usize, section: Section) {
        self.sections.insert(index, section);
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Reassemble the document: heading lines verbatim, one blank line
    /// between sections, trailing newline at the end. Trailing blank lines
    /// inside a body are absorbed into the separator, so rendering is
    /// normalizing and re-parsing the output yields the same document.
    pub fn render(&self) -> String {
        let mut blocks = Vec::new();

        let preamble = trim_trailing_blanks(&self.preamble);
        if !preamble.is_empty() {
            blocks.push(preamble.join("\n"));
        }

        for section in &self.sections {
            let mut lines = vec![section.heading.clone()];
            lines.extend(trim_trailing_blanks(&section.body));
            blocks.push(lines.join("\n"));
        }

        let mut text = blocks.join("\n\n");
        text.push('\n');
        text
    }
}

fn trim_trailing_blanks(lines: &[String]) -> Vec<String> {
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map(|idx| idx + 1)
        .unwrap_or(0);
    lines[..end].to_vec()
}

fn is_heading(line: &str) -> bool {
    if line.starts_with(|c: char| c.is_whitespace()) {
        return false;
    }
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(['-', '*', '\u{2022}']) {
        return false;
    }
    let mut has_letter = false;
    for c in trimmed.chars() {
        if c.is_alphabetic() {
            if !c.is_uppercase() {
                return false;
            }
            has_letter = true;
        } else if c != ' ' {
            return false;
        }
    }
    has_letter
}
