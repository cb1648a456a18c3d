//! Resume parsing and tailoring module

pub mod document;
pub mod tailor;

pub use document::{ResumeDocument, Section};
pub use tailor::{tailor, TailorOptions};
