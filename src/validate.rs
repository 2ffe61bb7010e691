// src/validate.rs
//
// Load-time checks on authored content. Anything that fails here is a content
// bug and stops the app from starting.

use crate::error::AuthoringError;
use crate::model::{Course, Question, QuestionBank, Section};
use std::collections::HashSet;

pub fn validate_question(scope: &str, q: &Question) -> Result<(), AuthoringError> {
    if q.options.len() < 2 {
        return Err(AuthoringError::TooFewOptions {
            scope: scope.to_owned(),
            id: q.id.clone(),
            count: q.options.len(),
        });
    }
    if q.correct_index >= q.options.len() {
        return Err(AuthoringError::CorrectIndexOutOfRange {
            scope: scope.to_owned(),
            id: q.id.clone(),
            index: q.correct_index,
            len: q.options.len(),
        });
    }
    Ok(())
}

/// Validates every question and checks ids are unique within the list.
pub fn validate_questions<'a>(
    scope: &str,
    questions: impl IntoIterator<Item = &'a Question>,
) -> Result<(), AuthoringError> {
    let mut seen = HashSet::new();
    for q in questions {
        validate_question(scope, q)?;
        if !seen.insert(&q.id) {
            return Err(AuthoringError::DuplicateQuestionId {
                scope: scope.to_owned(),
                id: q.id.clone(),
            });
        }
    }
    Ok(())
}

pub fn validate_quiz(scope: &str, questions: &[Question]) -> Result<(), AuthoringError> {
    if questions.is_empty() {
        return Err(AuthoringError::EmptyQuiz {
            scope: scope.to_owned(),
        });
    }
    validate_questions(scope, questions)
}

pub fn validate_section(section: &Section) -> Result<(), AuthoringError> {
    validate_questions(&format!("section {} checks", section.id), section.checks())?;
    validate_quiz(&format!("section {} quiz", section.id), &section.quiz.questions)?;

    let mut panels = HashSet::new();
    for name in section.panel_names() {
        if !panels.insert(name) {
            return Err(AuthoringError::DuplicatePanel {
                section: section.id.clone(),
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

pub fn validate_course(course: &Course) -> Result<(), AuthoringError> {
    let mut ids = HashSet::new();
    for section in &course.sections {
        if !ids.insert(section.id.as_str()) {
            return Err(AuthoringError::DuplicateSectionId {
                id: section.id.clone(),
            });
        }
        validate_section(section)?;
    }
    Ok(())
}

pub fn validate_bank(bank: &QuestionBank) -> Result<(), AuthoringError> {
    validate_quiz(&format!("bank {}", bank.title), &bank.questions)
}
