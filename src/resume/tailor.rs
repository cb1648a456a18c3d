//! Tailoring a resume toward a specific job posting

use crate::catalog::posting::JobPosting;
use crate::error::Result;
use crate::resume::document::{ResumeDocument, Section};
use log::debug;
use std::collections::HashSet;
use strsim::jaro_winkler;

/// Heading of the section whose body is replaced with the tailored summary.
pub const SUMMARY_HEADING: &str = "SUMMARY";
/// Heading of the injected skills-highlight section. Distinct from the
/// resume's own SKILLS section, which is left untouched.
pub const HIGHLIGHT_HEADING: &str = "ROLE HIGHLIGHTS";
/// Heading of the resume section the candidate's own skills are read from.
pub const SKILLS_HEADING: &str = "SKILLS";

#[derive(Debug, Clone)]
pub struct TailorOptions {
    /// Cap on the number of skills named in the summary and highlight list.
    pub max_highlights: usize,
    /// Jaro-Winkler similarity at which two skill spellings count as the
    /// same skill ("PostgreSQL" vs "Postgres").
    pub fuzzy_threshold: f64,
}

impl Default for TailorOptions {
    fn default() -> Self {
        Self {
            max_highlights: 3,
            fuzzy_threshold: 0.95,
        }
    }
}

/// Rewrite `resume_text` to emphasize the skills `job` asks for.
///
/// Replaces (or inserts) the SUMMARY section and the ROLE HIGHLIGHTS section;
/// every other section keeps its heading, order, and body.
pub fn tailor(job: &JobPosting, resume_text: &str, options: &TailorOptions) -> Result<String> {
    let mut doc = ResumeDocument::parse(resume_text)?;

    let resume_tokens = resume_skill_tokens(&doc);
    let selected = select_skills(&job.skills, &resume_tokens, options);
    debug!(
        "Selected {} of {} job skills for '{}'",
        selected.len(),
        job.skills.len(),
        job.id
    );

    let summary = summary_line(job, &selected);
    match doc.find_section(SUMMARY_HEADING) {
        Some(idx) => doc.replace_body(idx, vec![summary]),
        None => {
            let at = summary_insert_position(&doc);
            doc.insert_section(at, Section::new(SUMMARY_HEADING, vec![summary]));
        }
    }

    let highlights = highlight_lines(&selected);
    match doc.find_section(HIGHLIGHT_HEADING) {
        Some(idx) => doc.replace_body(idx, highlights),
        None => doc.push_section(Section::new(HIGHLIGHT_HEADING, highlights)),
    }

    Ok(doc.render())
}

/// Skill tokens from the resume's own SKILLS section: one per non-blank body
/// line with any bullet stripped, comma-separated entries split apart.
fn resume_skill_tokens(doc: &ResumeDocument) -> HashSet<String> {
    let mut tokens = HashSet::new();
    if let Some(body) = doc.section_body(SKILLS_HEADING) {
        for line in body {
            let line = line.trim().trim_start_matches(['-', '*', '\u{2022}']).trim();
            for part in line.split(',') {
                let token = normalize_token(part);
                if !token.is_empty() {
                    tokens.insert(token);
                }
            }
        }
    }
    tokens
}

/// Job skills that the resume also lists, in job order, capped at
/// `max_highlights`. Falls back to the job's first skills when there is no
/// overlap at all.
fn select_skills(
    job_skills: &[String],
    resume_tokens: &HashSet<String>,
    options: &TailorOptions,
) -> Vec<String> {
    let matched: Vec<String> = job_skills
        .iter()
        .filter(|skill| {
            let wanted = normalize_token(skill);
            resume_tokens.contains(&wanted)
                || resume_tokens
                    .iter()
                    .any(|token| jaro_winkler(token, &wanted) >= options.fuzzy_threshold)
        })
        .cloned()
        .collect();

    let mut selected = if matched.is_empty() {
        job_skills.to_vec()
    } else {
        matched
    };
    selected.truncate(options.max_highlights);
    selected
}

fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

fn summary_line(job: &JobPosting, selected: &[String]) -> String {
    if selected.is_empty() {
        format!(
            "Candidate for the {} role at {}, eager to ramp up on the team's preferred tools and practices.",
            job.title, job.company
        )
    } else {
        format!(
            "Candidate for the {} role at {}, bringing strengths in {}.",
            job.title,
            job.company,
            selected.join(", ")
        )
    }
}

fn highlight_lines(selected: &[String]) -> Vec<String> {
    if selected.is_empty() {
        return vec!["- Rapid learner with a track record of mastering new domains".to_string()];
    }
    selected.iter().map(|skill| format!("- {}", skill)).collect()
}

/// New SUMMARY sections go after the leading run of NAME/CONTACT sections,
/// or at the top when the resume does not start with one.
fn summary_insert_position(doc: &ResumeDocument) -> usize {
    let mut at = 0;
    while at < doc.sections.len() && is_contact_like(&doc.sections[at].heading) {
        at += 1;
    }
    at
}

fn is_contact_like(heading: &str) -> bool {
    let heading = heading.trim();
    heading.eq_ignore_ascii_case("NAME") || heading.to_uppercase().starts_with("CONTACT")
}
