// src/data.rs

use crate::error::ContentError;
use crate::model::{Course, QuestionBank};
use crate::validate::{validate_bank, validate_course};
use std::path::Path;

const EMBEDDED_COURSE: &str = include_str!("data/course.yaml");
const EMBEDDED_BANK: &str = include_str!("data/question_bank.yaml");

/// Parses a course and rejects it if any authored question is malformed.
pub fn parse_course(yaml: &str) -> Result<Course, ContentError> {
    let course: Course = serde_yaml::from_str(yaml)?;
    validate_course(&course)?;
    log::debug!(
        "loaded course '{}' with {} sections",
        course.title,
        course.sections.len()
    );
    Ok(course)
}

pub fn parse_bank(yaml: &str) -> Result<QuestionBank, ContentError> {
    let bank: QuestionBank = serde_yaml::from_str(yaml)?;
    validate_bank(&bank)?;
    log::debug!(
        "loaded question bank '{}' with {} questions",
        bank.title,
        bank.questions.len()
    );
    Ok(bank)
}

pub fn read_course_embedded() -> Result<Course, ContentError> {
    parse_course(EMBEDDED_COURSE)
}

pub fn read_bank_embedded() -> Result<QuestionBank, ContentError> {
    parse_bank(EMBEDDED_BANK)
}

pub fn read_course_from_path(path: &Path) -> Result<Course, ContentError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_course(&yaml)
}
